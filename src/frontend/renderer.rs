use std::fmt::Display;
use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;
use thiserror::Error;

use crate::backend::signal::SignalReading;

use primitives::{
    curve_point_primitive, level_color, plot_point, selected_point_primitive
};

pub use plotcfg::{
    distance_axis, font_size, strength_axis, Pixel, PlottersUnit,
    PlotResolution, DEFAULT_PLOT_RESOLUTION
};

use plotcfg::{LABEL_AREA_SIZE, PLOT_MARGIN};


mod plotcfg;
mod primitives;


const FONT: &str = "sans-serif";
const LINE_WIDTH: u32 = 3;


#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw the chart: {0}")]
    Drawing(String),
}


fn drawing_error<E: Display>(error: E) -> RenderError {
    RenderError::Drawing(error.to_string())
}


/// Draws the signal vs distance chart into a PNG file.
pub struct PlottersRenderer {
    output_filename: PathBuf,
    caption: String,
    plot_resolution: PlotResolution,
    font_size: Pixel,
    max_distance: u32,
}

impl PlottersRenderer {
    #[must_use]
    pub fn new(
        output_filename: &Path,
        caption: &str,
        plot_resolution: PlotResolution,
        max_distance: u32,
    ) -> Self {
        Self {
            output_filename: output_filename.to_path_buf(),
            caption: caption.to_string(),
            plot_resolution,
            font_size: font_size(plot_resolution),
            max_distance,
        }
    }

    #[must_use]
    pub fn output_filename(&self) -> &Path {
        &self.output_filename
    }

    /// Draws `curve` as a line in the color of `selected`'s level and marks
    /// `selected` with a larger dot.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bitmap backend fails to draw or to write the
    /// file.
    pub fn render(
        &self,
        curve: &[SignalReading],
        selected: &SignalReading
    ) -> Result<(), RenderError> {
        let area = BitMapBackend::new(
            &self.output_filename,
            self.plot_resolution.into()
        )
            .into_drawing_area();

        area.fill(&WHITE).map_err(drawing_error)?;

        let mut chart_builder = ChartBuilder::on(&area);

        if !self.caption.is_empty() {
            chart_builder.caption(&self.caption, (FONT, self.font_size));
        }

        let mut chart = chart_builder
            .margin(PLOT_MARGIN)
            .x_label_area_size(LABEL_AREA_SIZE)
            .y_label_area_size(LABEL_AREA_SIZE)
            .build_cartesian_2d(
                distance_axis(self.max_distance),
                strength_axis()
            )
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Signal (%)")
            .label_style((FONT, self.font_size * 2 / 3))
            .draw()
            .map_err(drawing_error)?;

        let line_color = level_color(selected.level());

        chart
            .draw_series(LineSeries::new(
                curve.iter().map(plot_point),
                line_color.stroke_width(LINE_WIDTH)
            ))
            .map_err(drawing_error)?;
        chart
            .draw_series(curve.iter().map(curve_point_primitive))
            .map_err(drawing_error)?;

        if self.is_on_chart(selected) {
            chart
                .draw_series([selected_point_primitive(selected)])
                .map_err(drawing_error)?;
        }

        area.present().map_err(drawing_error)?;

        info!("Chart rendered in {}", self.output_filename.display());

        Ok(())
    }

    fn is_on_chart(&self, reading: &SignalReading) -> bool {
        !reading.is_no_signal()
            && distance_axis(self.max_distance)
                .contains(&reading.distance_meters())
    }
}
