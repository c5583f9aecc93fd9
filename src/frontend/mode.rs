use std::io::{self, Write};

use log::warn;

use super::AppError;
use super::config::{GeneralConfig, RenderConfig};
use super::explorer::{is_within_range, SignalExplorer};
use super::renderer::PlottersRenderer;
use super::report::{curve_table, title};


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Reading,
    Curve,
    Explore,
}

impl Mode {
    /// # Errors
    ///
    /// Will return `Err` if writing the report, the snapshot or the chart
    /// fails.
    pub fn execute(&self, general_config: &GeneralConfig) -> Result<(), AppError> {
        let report_config = general_config.report_config();

        if !is_within_range(report_config.distance(), report_config.max_distance()) {
            warn!(
                "Distance {} m is outside of the plotted range 0..={} m",
                report_config.distance(),
                report_config.max_distance()
            );
        }

        let mut explorer = SignalExplorer::new(
            *general_config.model(),
            report_config
        );
        let mut stdout = io::stdout().lock();

        writeln!(stdout, "{}\n", title(explorer.model()))?;

        match self {
            Self::Reading => {
                writeln!(stdout, "{}", explorer.calculation_report())?;
                explorer.save_snapshot()?;
            },
            Self::Curve   => {
                writeln!(stdout, "{}", curve_table(explorer.curve()))?;
                explorer.save_snapshot()?;
            },
            Self::Explore => {
                explorer.play(io::stdin().lock(), &mut stdout)?;
            },
        }

        render_chart(
            general_config.render_config(),
            report_config.max_distance(),
            &explorer
        )
    }
}


fn render_chart(
    render_config: &RenderConfig,
    max_distance: u32,
    explorer: &SignalExplorer
) -> Result<(), AppError> {
    let Some(plot_path) = render_config.plot_path() else {
        return Ok(());
    };

    let renderer = PlottersRenderer::new(
        plot_path,
        render_config.plot_caption(),
        render_config.plot_resolution(),
        max_distance,
    );

    renderer.render(explorer.curve(), explorer.reading())?;

    Ok(())
}
