use std::path::{Path, PathBuf};

use crate::backend::mathphysics::Meter;
use crate::backend::signal::SignalModel;

use crate::frontend::renderer::PlotResolution;


pub struct GeneralConfig {
    model: SignalModel,
    report: ReportConfig,
    render: RenderConfig,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(
        model: SignalModel,
        report: ReportConfig,
        render: RenderConfig,
    ) -> Self {
        Self {
            model,
            report,
            render,
        }
    }

    #[must_use]
    pub fn model(&self) -> &SignalModel {
        &self.model
    }

    #[must_use]
    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }

    #[must_use]
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }
}


pub struct ReportConfig {
    distance: Meter,
    max_distance: u32,
    precision: usize,
    output_directory: Option<PathBuf>,
}

impl ReportConfig {
    #[must_use]
    pub fn new(
        distance: Meter,
        max_distance: u32,
        precision: usize,
        output_directory: Option<&Path>,
    ) -> Self {
        Self {
            distance,
            max_distance,
            precision,
            output_directory: output_directory.map(Path::to_path_buf),
        }
    }

    #[must_use]
    pub fn distance(&self) -> Meter {
        self.distance
    }

    #[must_use]
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }
}


// Without `plot_path` no chart is rendered.
pub struct RenderConfig {
    plot_path: Option<PathBuf>,
    plot_caption: String,
    plot_resolution: PlotResolution,
}

impl RenderConfig {
    #[must_use]
    pub fn new(
        plot_path: Option<&Path>,
        plot_caption: &str,
        plot_resolution: PlotResolution,
    ) -> Self {
        Self {
            plot_path: plot_path.map(Path::to_path_buf),
            plot_caption: plot_caption.to_string(),
            plot_resolution,
        }
    }

    #[must_use]
    pub fn plot_path(&self) -> Option<&Path> {
        self.plot_path.as_deref()
    }

    #[must_use]
    pub fn plot_caption(&self) -> &str {
        &self.plot_caption
    }

    #[must_use]
    pub fn plot_resolution(&self) -> PlotResolution {
        self.plot_resolution
    }
}
