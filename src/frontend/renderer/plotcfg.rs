use std::ops::Range;


pub const PLOT_MARGIN: Pixel       = 20;
pub const LABEL_AREA_SIZE: Pixel   = 40;
pub const STRENGTH_AXIS_MAX: PlottersUnit = 100.0;

pub const DEFAULT_PLOT_RESOLUTION: PlotResolution = PlotResolution {
    width: 640,
    height: 480,
};


pub type Pixel        = u32;
pub type PlottersUnit = f64;


#[must_use]
pub fn font_size(plot_resolution: PlotResolution) -> Pixel {
    (plot_resolution.width / 30).max(1)
}

#[must_use]
pub fn distance_axis(max_distance: u32) -> Range<PlottersUnit> {
    // One extra meter keeps the last sample off the chart edge.
    0.0..PlottersUnit::from(max_distance) + 1.0
}

#[must_use]
pub fn strength_axis() -> Range<PlottersUnit> {
    0.0..STRENGTH_AXIS_MAX
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotResolution {
    width: Pixel,
    height: Pixel
}

impl PlotResolution {
    #[must_use]
    pub fn new(
        width: Pixel,
        height: Pixel
    ) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> Pixel {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Pixel {
        self.height
    }
}

impl Default for PlotResolution {
    fn default() -> Self {
        DEFAULT_PLOT_RESOLUTION
    }
}

impl From<PlotResolution> for (Pixel, Pixel) {
    fn from(plot_resolution: PlotResolution) -> Self {
        (plot_resolution.width(), plot_resolution.height())
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn font_scales_with_width() {
        assert_eq!(21, font_size(DEFAULT_PLOT_RESOLUTION));
        assert_eq!(1, font_size(PlotResolution::new(10, 10)));
    }

    #[test]
    fn distance_axis_is_never_empty() {
        assert_eq!(0.0..21.0, distance_axis(20));
        assert_eq!(0.0..1.0, distance_axis(0));
    }
}
