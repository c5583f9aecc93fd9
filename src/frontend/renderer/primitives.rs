use plotters::prelude::*;
use plotters::style::RGBColor;

use crate::backend::signal::{SignalLevel, SignalReading};

use super::{Pixel, PlottersUnit};


const STRONG_COLOR: RGBColor   = RGBColor(22, 163, 74);
const MODERATE_COLOR: RGBColor = RGBColor(245, 158, 11);
const WEAK_COLOR: RGBColor     = RGBColor(220, 38, 38);
const CURVE_POINT_COLOR: RGBColor = RGBColor(37, 99, 235);

const CURVE_POINT_SIZE: Pixel    = 2;
const SELECTED_POINT_SIZE: Pixel = 5;


type PlottersCircle = Circle<(PlottersUnit, PlottersUnit), Pixel>;


#[must_use]
pub fn level_color(level: SignalLevel) -> RGBColor {
    match level {
        SignalLevel::Strong   => STRONG_COLOR,
        SignalLevel::Moderate => MODERATE_COLOR,
        SignalLevel::Weak     => WEAK_COLOR,
        SignalLevel::NoSignal => BLACK,
    }
}

#[must_use]
pub fn plot_point(reading: &SignalReading) -> (PlottersUnit, PlottersUnit) {
    (reading.distance_meters(), reading.strength_percent().value())
}

#[must_use]
pub fn curve_point_primitive(reading: &SignalReading) -> PlottersCircle {
    Circle::new(
        plot_point(reading),
        CURVE_POINT_SIZE,
        CURVE_POINT_COLOR.filled()
    )
}

#[must_use]
pub fn selected_point_primitive(reading: &SignalReading) -> PlottersCircle {
    let color = level_color(reading.level());

    Circle::new(plot_point(reading), SELECTED_POINT_SIZE, color.filled())
}
