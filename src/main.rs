use std::process::ExitCode;

use wifi_signal_sim::frontend::cli::cli;


fn main() -> ExitCode {
    cli()
}
