use std::path::{Path, PathBuf};

use clap::ArgMatches;

use crate::backend::mathphysics::{Dbm, Frequency, Megahertz, Meter, Milliwatt};
use crate::backend::signal::{SignalModel, SignalModelBuilder};
use crate::frontend::AppError;
use crate::frontend::config::{GeneralConfig, RenderConfig, ReportConfig};
use crate::frontend::input::InputError;
use crate::frontend::mode::Mode;
use crate::frontend::renderer::{Pixel, PlotResolution};


pub const ARG_BAND: &str           = "band";
pub const ARG_DISTANCE: &str       = "distance";
pub const ARG_FREQUENCY: &str      = "frequency";
pub const ARG_JSON_OUTPUT: &str    = "json output directory";
pub const ARG_MAX_DISTANCE: &str   = "max distance";
pub const ARG_MAX_THROUGHPUT: &str = "max throughput";
pub const ARG_MIDPOINT: &str       = "midpoint";
pub const ARG_MODE: &str           = "mode";
pub const ARG_PLOT_CAPTION: &str   = "plot caption";
pub const ARG_PLOT_HEIGHT: &str    = "plot height";
pub const ARG_PLOT_PATH: &str      = "plot path";
pub const ARG_PLOT_WIDTH: &str     = "plot width";
pub const ARG_PRECISION: &str      = "precision";
pub const ARG_STEEPNESS: &str      = "steepness";
pub const ARG_TX_POWER: &str       = "transmit power";
pub const ARG_VERBOSE: &str        = "verbose";

pub const MODE_CURVE: &str   = "curve";
pub const MODE_EXPLORE: &str = "explore";
pub const MODE_READING: &str = "reading";

pub const BAND_2_4_GHZ: &str = "2.4";
pub const BAND_5_GHZ: &str   = "5";

pub const DEFAULT_BAND: &str         = BAND_2_4_GHZ;
pub const DEFAULT_DISTANCE: &str     = "6";
pub const DEFAULT_MAX_DISTANCE: &str = "20";
pub const DEFAULT_MODE: &str         = MODE_READING;
pub const DEFAULT_PLOT_CAPTION: &str = "";
pub const DEFAULT_PLOT_HEIGHT: &str  = "480";
pub const DEFAULT_PLOT_WIDTH: &str   = "640";
pub const DEFAULT_PRECISION: &str    = "3";


/// # Errors
///
/// Will return `Err` if the arguments describe an invalid signal model or
/// if the selected mode fails.
pub fn handle_arguments(matches: &ArgMatches) -> Result<(), AppError> {
    let general_config = general_config(matches)?;

    mode(matches)?.execute(&general_config)
}

fn general_config(matches: &ArgMatches) -> Result<GeneralConfig, AppError> {
    Ok(
        GeneralConfig::new(
            signal_model(matches)?,
            report_config(matches)?,
            render_config(matches)?,
        )
    )
}

fn required<'a, T>(
    matches: &'a ArgMatches,
    id: &'static str
) -> Result<&'a T, InputError>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .ok_or(InputError::MissingArgument(id))
}

fn mode(matches: &ArgMatches) -> Result<Mode, InputError> {
    let mode = match required::<String>(matches, ARG_MODE)?.as_str() {
        MODE_CURVE   => Mode::Curve,
        MODE_EXPLORE => Mode::Explore,
        _            => Mode::Reading,
    };

    Ok(mode)
}

// Parameters left out on the command line keep the reference values.
fn signal_model(matches: &ArgMatches) -> Result<SignalModel, AppError> {
    let mut builder = SignalModelBuilder::new()
        .set_frequency(frequency(matches)?);

    if let Some(transmit_power) = matches.get_one::<f64>(ARG_TX_POWER) {
        builder = builder.set_transmit_power(Milliwatt::new(*transmit_power));
    }
    if let Some(midpoint) = matches.get_one::<f64>(ARG_MIDPOINT) {
        builder = builder.set_midpoint(Dbm::new(*midpoint));
    }
    if let Some(steepness) = matches.get_one::<f64>(ARG_STEEPNESS) {
        builder = builder.set_steepness(*steepness);
    }
    if let Some(max_throughput) = matches.get_one::<u32>(ARG_MAX_THROUGHPUT) {
        builder = builder.set_max_throughput(*max_throughput);
    }

    Ok(builder.build()?)
}

fn frequency(matches: &ArgMatches) -> Result<Megahertz, InputError> {
    if let Some(frequency) = matches.get_one::<Megahertz>(ARG_FREQUENCY) {
        return Ok(*frequency);
    }

    let band = match required::<String>(matches, ARG_BAND)?.as_str() {
        BAND_5_GHZ => Frequency::Wifi5GHz,
        _          => Frequency::Wifi2_4GHz,
    };

    Ok(band.megahertz())
}

fn report_config(matches: &ArgMatches) -> Result<ReportConfig, InputError> {
    Ok(
        ReportConfig::new(
            distance(matches)?,
            *required::<u32>(matches, ARG_MAX_DISTANCE)?,
            *required::<usize>(matches, ARG_PRECISION)?,
            output_directory(matches),
        )
    )
}

fn render_config(matches: &ArgMatches) -> Result<RenderConfig, InputError> {
    Ok(
        RenderConfig::new(
            plot_path(matches),
            required::<String>(matches, ARG_PLOT_CAPTION)?,
            plot_resolution(matches)?,
        )
    )
}

fn distance(matches: &ArgMatches) -> Result<Meter, InputError> {
    required::<Meter>(matches, ARG_DISTANCE).copied()
}

fn output_directory(matches: &ArgMatches) -> Option<&Path> {
    matches
        .get_one::<PathBuf>(ARG_JSON_OUTPUT)
        .map(PathBuf::as_path)
}

fn plot_path(matches: &ArgMatches) -> Option<&Path> {
    matches
        .get_one::<PathBuf>(ARG_PLOT_PATH)
        .map(PathBuf::as_path)
}

fn plot_resolution(matches: &ArgMatches) -> Result<PlotResolution, InputError> {
    let plot_width  = *required::<Pixel>(matches, ARG_PLOT_WIDTH)?;
    let plot_height = *required::<Pixel>(matches, ARG_PLOT_HEIGHT)?;

    Ok(PlotResolution::new(plot_width, plot_height))
}


#[cfg(test)]
mod tests {
    use crate::backend::MAX_SAMPLED_DISTANCE;
    use crate::backend::signal::SignalModelBuildError;
    use crate::frontend::cli::command;
    use crate::frontend::renderer::DEFAULT_PLOT_RESOLUTION;

    use super::*;


    fn matches_from(args: &[&str]) -> ArgMatches {
        command()
            .try_get_matches_from(
                std::iter::once("wifi_signal_sim").chain(args.iter().copied())
            )
            .unwrap_or_else(|error| panic!("{}", error))
    }


    #[test]
    fn defaults_describe_reference_setup() {
        let matches = matches_from(&[]);

        let general_config = general_config(&matches)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(SignalModel::default(), *general_config.model());
        assert_eq!(6.0, general_config.report_config().distance());
        assert_eq!(
            MAX_SAMPLED_DISTANCE,
            general_config.report_config().max_distance()
        );
        assert_eq!(3, general_config.report_config().precision());
        assert!(general_config.report_config().output_directory().is_none());
        assert!(general_config.render_config().plot_path().is_none());
        assert_eq!(
            DEFAULT_PLOT_RESOLUTION,
            general_config.render_config().plot_resolution()
        );
        assert_eq!(Mode::Reading, mode(&matches).unwrap_or(Mode::Explore));
    }

    #[test]
    fn band_and_exact_frequency() {
        assert_eq!(Ok(5_000), frequency(&matches_from(&["--band", "5"])));
        assert_eq!(Ok(5_180), frequency(&matches_from(&["--freq", "5180"])));
    }

    #[test]
    fn model_parameters_override_reference() {
        let matches = matches_from(
            &["--tx-power", "20", "--midpoint", "-70", "--max-mbps", "54"]
        );

        let model = signal_model(&matches)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(20.0, model.transmit_power().value());
        assert_eq!(-70.0, model.midpoint().value());
        assert_eq!(54, model.max_throughput());
        assert_eq!(5.0, model.steepness());
    }

    #[test]
    fn invalid_model_parameters_are_reported() {
        let matches = matches_from(&["--tx-power", "0"]);

        assert!(
            matches!(
                signal_model(&matches),
                Err(AppError::Model(SignalModelBuildError::InvalidTransmitPower))
            )
        );
    }

    #[test]
    fn modes_are_selected_by_name() {
        assert_eq!(Ok(Mode::Curve), mode(&matches_from(&["-m", "curve"])));
        assert_eq!(Ok(Mode::Explore), mode(&matches_from(&["--mode", "explore"])));
    }

    #[test]
    fn output_paths_are_optional() {
        let matches = matches_from(
            &["--jo", "snapshots", "--plot", "chart.png", "-c", "Signal"]
        );

        let report_config = report_config(&matches)
            .unwrap_or_else(|error| panic!("{}", error));
        let render_config = render_config(&matches)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(
            Some(Path::new("snapshots")),
            report_config.output_directory()
        );
        assert_eq!(Some(Path::new("chart.png")), render_config.plot_path());
        assert_eq!("Signal", render_config.plot_caption());
    }
}
