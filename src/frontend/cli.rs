use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use env_logger::Env;
use log::error;

use crate::frontend::input::{parse_distance, parse_finite};
use crate::frontend::renderer::Pixel;

use args::{
    handle_arguments, ARG_BAND, ARG_DISTANCE, ARG_FREQUENCY, ARG_JSON_OUTPUT,
    ARG_MAX_DISTANCE, ARG_MAX_THROUGHPUT, ARG_MIDPOINT, ARG_MODE,
    ARG_PLOT_CAPTION, ARG_PLOT_HEIGHT, ARG_PLOT_PATH, ARG_PLOT_WIDTH,
    ARG_PRECISION, ARG_STEEPNESS, ARG_TX_POWER, ARG_VERBOSE, BAND_2_4_GHZ,
    BAND_5_GHZ, DEFAULT_BAND, DEFAULT_DISTANCE, DEFAULT_MAX_DISTANCE,
    DEFAULT_MODE, DEFAULT_PLOT_CAPTION, DEFAULT_PLOT_HEIGHT,
    DEFAULT_PLOT_WIDTH, DEFAULT_PRECISION, MODE_CURVE, MODE_EXPLORE,
    MODE_READING
};


mod args;


pub fn cli() -> ExitCode {
    let matches = command().get_matches();

    init_logger(matches.get_flag(ARG_VERBOSE));

    match handle_arguments(&matches) {
        Ok(())     => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    let _ = env_logger::Builder::from_env(
        Env::default().default_filter_or(default_filter)
    )
        .try_init();
}

#[must_use]
pub fn command() -> Command {
    Command::new("wifi_signal_sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Models how Wi-Fi signal strength falls with distance under \
            free-space path loss."
        )
        .args([
            arg_mode(),
            arg_distance(),
            arg_max_distance(),
            arg_band(),
            arg_frequency(),
            arg_tx_power(),
            arg_midpoint(),
            arg_steepness(),
            arg_max_throughput(),
            arg_precision(),
            arg_json_output(),
            arg_plot_path(),
            arg_plot_caption(),
            arg_plot_width(),
            arg_plot_height(),
            arg_verbose(),
        ])
}

fn arg_mode() -> Arg {
    Arg::new(ARG_MODE)
        .short('m')
        .long("mode")
        .value_parser([MODE_READING, MODE_CURVE, MODE_EXPLORE])
        .default_value(DEFAULT_MODE)
        .help(
            format!(
                "Choose what to show: one reading with the calculation \
                steps (\"{MODE_READING}\"), the sampled curve \
                (\"{MODE_CURVE}\") or distances read from stdin \
                (\"{MODE_EXPLORE}\")"
            )
        )
}

fn arg_distance() -> Arg {
    Arg::new(ARG_DISTANCE)
        .short('d')
        .long("distance")
        .value_parser(parse_distance)
        .allow_negative_numbers(true)
        .default_value(DEFAULT_DISTANCE)
        .help("Set the transmitter-receiver distance (finite float, in meters)")
}

fn arg_max_distance() -> Arg {
    Arg::new(ARG_MAX_DISTANCE)
        .long("max-distance")
        .value_parser(value_parser!(u32))
        .default_value(DEFAULT_MAX_DISTANCE)
        .help("Set the last sampled distance of the curve (in meters)")
}

fn arg_band() -> Arg {
    Arg::new(ARG_BAND)
        .long("band")
        .value_parser([BAND_2_4_GHZ, BAND_5_GHZ])
        .default_value(DEFAULT_BAND)
        .help("Choose the Wi-Fi band (in GHz)")
}

fn arg_frequency() -> Arg {
    Arg::new(ARG_FREQUENCY)
        .long("freq")
        .value_parser(value_parser!(u32).range(1..))
        .conflicts_with(ARG_BAND)
        .help("Set an exact carrier frequency instead of a band (in MHz)")
}

fn arg_tx_power() -> Arg {
    Arg::new(ARG_TX_POWER)
        .long("tx-power")
        .value_parser(parse_finite)
        .help("Set the transmit power (positive float, in mW) [default: 100]")
}

fn arg_midpoint() -> Arg {
    Arg::new(ARG_MIDPOINT)
        .long("midpoint")
        .value_parser(parse_finite)
        .allow_negative_numbers(true)
        .help(
            "Set the power that maps to 50% signal strength \
            (in dBm) [default: -65]"
        )
}

fn arg_steepness() -> Arg {
    Arg::new(ARG_STEEPNESS)
        .long("steepness")
        .value_parser(parse_finite)
        .help("Set the steepness of the signal strength curve [default: 5]")
}

fn arg_max_throughput() -> Arg {
    Arg::new(ARG_MAX_THROUGHPUT)
        .long("max-mbps")
        .value_parser(value_parser!(u32))
        .help("Set the throughput at full signal strength [default: 100]")
}

fn arg_precision() -> Arg {
    Arg::new(ARG_PRECISION)
        .long("precision")
        .value_parser(value_parser!(usize))
        .default_value(DEFAULT_PRECISION)
        .help("Set the mantissa digits of values in scientific notation")
}

fn arg_json_output() -> Arg {
    Arg::new(ARG_JSON_OUTPUT)
        .long("jo")
        .value_parser(value_parser!(PathBuf))
        .help(
            "Serialize every displayed reading with the curve to `.json` \
            files in specified directory"
        )
}

fn arg_plot_path() -> Arg {
    Arg::new(ARG_PLOT_PATH)
        .long("plot")
        .value_parser(value_parser!(PathBuf))
        .help("Render the signal vs distance chart to a `.png` file")
}

fn arg_plot_caption() -> Arg {
    Arg::new(ARG_PLOT_CAPTION)
        .short('c')
        .long("caption")
        .default_value(DEFAULT_PLOT_CAPTION)
        .help("Set the plot caption")
}

fn arg_plot_width() -> Arg {
    Arg::new(ARG_PLOT_WIDTH)
        .long("width")
        .value_parser(value_parser!(Pixel))
        .default_value(DEFAULT_PLOT_WIDTH)
        .help("Set the plot width (in pixels)")
}

fn arg_plot_height() -> Arg {
    Arg::new(ARG_PLOT_HEIGHT)
        .long("height")
        .value_parser(value_parser!(Pixel))
        .default_value(DEFAULT_PLOT_HEIGHT)
        .help("Set the plot height (in pixels)")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn infinite_distance_is_rejected() {
        let result = command().try_get_matches_from(
            ["wifi_signal_sim", "-d", "inf"]
        );

        assert!(result.is_err());
    }

    #[test]
    fn negative_distance_is_accepted() {
        let matches = command()
            .try_get_matches_from(["wifi_signal_sim", "-d", "-3"])
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(Some(&-3.0), matches.get_one::<f64>(ARG_DISTANCE));
    }

    #[test]
    fn frequency_conflicts_with_band() {
        let result = command().try_get_matches_from(
            ["wifi_signal_sim", "--band", "5", "--freq", "5180"]
        );

        assert!(result.is_err());
    }
}
