use std::f64::consts::PI;

pub use frequency::Frequency;
pub use unit::*;


pub mod frequency;
pub mod unit;


// FSPL constant for distances in kilometers and frequencies in megahertz.
pub const FSPL_KM_MHZ_CONSTANT: f64 = 32.44;


/// Power density of an isotropic source at `distance` meters
/// (inverse-square law).
#[must_use]
pub fn inverse_square_law(transmit_power: Milliwatt, distance: Meter) -> Milliwatt {
    transmit_power / (4.0 * PI * distance.powi(2))
}

/// Free-space path loss for a distance in kilometers and a frequency in
/// megahertz.
///
/// Sub-kilometer distances give a negative first term, so short links may
/// come out with a negative loss. That is kept as is.
#[must_use]
pub fn free_space_path_loss(
    distance: Kilometer,
    frequency: Megahertz
) -> Decibel {
    let loss = 20.0 * distance.log10()
        + 20.0 * f64::from(frequency).log10()
        + FSPL_KM_MHZ_CONSTANT;

    Decibel::new(loss)
}

/// Maps any real value into (0, 1) with a sigmoid centered at `midpoint`.
#[must_use]
pub fn logistic(value: f64, midpoint: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-(value - midpoint) / steepness).exp())
}

#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);

    (value * scale).round() / scale
}


#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;


    #[test]
    fn power_density_falls_with_square_of_distance() {
        let transmit_power = Milliwatt::new(100.0);

        let at_one_meter  = inverse_square_law(transmit_power, 1.0);
        let at_two_meters = inverse_square_law(transmit_power, 2.0);

        assert_approx_eq!(100.0 / (4.0 * PI), at_one_meter.value());
        assert_approx_eq!(at_one_meter.value() / 4.0, at_two_meters.value());
    }

    #[test]
    fn path_loss_at_one_kilometer() {
        let loss = free_space_path_loss(1.0, 2_400);

        assert_approx_eq!(100.0442, loss.value(), 1e-4);
    }

    #[test]
    fn path_loss_is_negative_for_short_distance_at_low_frequency() {
        assert!(free_space_path_loss(0.000_1, 100).value() < 0.0);
    }

    #[test]
    fn path_loss_grows_six_decibels_per_doubling() {
        let near = free_space_path_loss(0.005, 2_400);
        let far  = free_space_path_loss(0.010, 2_400);

        assert_approx_eq!(6.0206, (far - near).value(), 1e-4);
    }

    #[test]
    fn logistic_midpoint_is_one_half() {
        assert_approx_eq!(0.5, logistic(-65.0, -65.0, 5.0));
        assert!(logistic(0.0, -65.0, 5.0) > 0.999);
        assert!(logistic(-200.0, -65.0, 5.0) < 0.001);
    }

    #[test]
    fn logistic_of_negative_infinity_is_zero() {
        assert_eq!(0.0, logistic(f64::NEG_INFINITY, -65.0, 5.0));
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_approx_eq!(63.8, round_to_decimals(63.819_195, 1));
        assert_approx_eq!(99.9, round_to_decimals(99.887_936, 1));
        assert_approx_eq!(-62.16, round_to_decimals(-62.162_373, 2));
    }
}
