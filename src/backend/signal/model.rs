use serde::Serialize;
use thiserror::Error;

use crate::backend::{
    MAX_THROUGHPUT, SIGNAL_MIDPOINT, SIGNAL_STEEPNESS, TRANSMIT_POWER,
    WIFI_FREQUENCY
};
use crate::backend::mathphysics::{
    free_space_path_loss, inverse_square_law, meters_to_kilometers, Dbm,
    Mbps, Megahertz, Meter, Milliwatt
};

use super::{SignalReading, SignalStrength};


#[derive(Debug, Error, PartialEq)]
pub enum SignalModelBuildError {
    #[error("Transmit power must be a positive finite number of milliwatts")]
    InvalidTransmitPower,
    #[error("Frequency must be greater than 0 MHz")]
    InvalidFrequency,
    #[error("Signal curve midpoint must be a finite power level")]
    InvalidMidpoint,
    #[error("Signal curve steepness must be a positive finite number")]
    InvalidSteepness,
    #[error("Maximum throughput must be greater than 0 Mbps")]
    InvalidMaxThroughput,
}


/// Free-space propagation model of a single Wi-Fi transmitter.
///
/// The model holds no state besides its parameters, so equal distances
/// always produce bit-identical readings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SignalModel {
    transmit_power: Milliwatt,
    frequency: Megahertz,
    midpoint: Dbm,
    steepness: f64,
    max_throughput: Mbps,
}

impl SignalModel {
    #[must_use]
    pub fn transmit_power(&self) -> Milliwatt {
        self.transmit_power
    }

    #[must_use]
    pub fn frequency(&self) -> Megahertz {
        self.frequency
    }

    #[must_use]
    pub fn midpoint(&self) -> Dbm {
        self.midpoint
    }

    #[must_use]
    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    #[must_use]
    pub fn max_throughput(&self) -> Mbps {
        self.max_throughput
    }

    /// Computes the reading for a receiver `distance` meters away.
    ///
    /// Zero and negative distances give `SignalReading::no_signal`. NaN is
    /// carried through to every derived quantity.
    #[must_use]
    pub fn compute_reading(&self, distance: Meter) -> SignalReading {
        if distance <= 0.0 {
            return SignalReading::no_signal(distance);
        }

        let distance_km     = meters_to_kilometers(distance);
        let received_power  = inverse_square_law(self.transmit_power, distance);
        let path_loss       = free_space_path_loss(distance_km, self.frequency);
        let corrected_power = received_power - path_loss;
        let power           = Dbm::from(corrected_power);
        let strength        = SignalStrength::from_power(
            power,
            self.midpoint,
            self.steepness
        );

        SignalReading::new(
            distance,
            distance_km,
            received_power,
            path_loss,
            corrected_power,
            power,
            strength.rounded(),
            strength.throughput(self.max_throughput),
        )
    }

    /// One reading per whole meter from 1 to `max_distance` inclusive.
    #[must_use]
    pub fn compute_curve(&self, max_distance: u32) -> Vec<SignalReading> {
        (1..=max_distance)
            .map(|distance| self.compute_reading(Meter::from(distance)))
            .collect()
    }
}

impl Default for SignalModel {
    fn default() -> Self {
        Self {
            transmit_power: TRANSMIT_POWER,
            frequency: WIFI_FREQUENCY.megahertz(),
            midpoint: SIGNAL_MIDPOINT,
            steepness: SIGNAL_STEEPNESS,
            max_throughput: MAX_THROUGHPUT,
        }
    }
}


// Unset parameters fall back to the reference Wi-Fi configuration.
#[derive(Default)]
pub struct SignalModelBuilder {
    transmit_power: Option<Milliwatt>,
    frequency: Option<Megahertz>,
    midpoint: Option<Dbm>,
    steepness: Option<f64>,
    max_throughput: Option<Mbps>,
}

impl SignalModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_transmit_power(mut self, transmit_power: Milliwatt) -> Self {
        self.transmit_power = Some(transmit_power);
        self
    }

    #[must_use]
    pub fn set_frequency(mut self, frequency: Megahertz) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn set_midpoint(mut self, midpoint: Dbm) -> Self {
        self.midpoint = Some(midpoint);
        self
    }

    #[must_use]
    pub fn set_steepness(mut self, steepness: f64) -> Self {
        self.steepness = Some(steepness);
        self
    }

    #[must_use]
    pub fn set_max_throughput(mut self, max_throughput: Mbps) -> Self {
        self.max_throughput = Some(max_throughput);
        self
    }

    /// # Errors
    ///
    /// Will return `Err` if transmit power or steepness is not a positive
    /// finite number, if the midpoint is not finite, or if frequency or
    /// maximum throughput is zero.
    pub fn build(self) -> Result<SignalModel, SignalModelBuildError> {
        let reference = SignalModel::default();

        let transmit_power = self.transmit_power
            .unwrap_or(reference.transmit_power);
        let frequency      = self.frequency.unwrap_or(reference.frequency);
        let midpoint       = self.midpoint.unwrap_or(reference.midpoint);
        let steepness      = self.steepness.unwrap_or(reference.steepness);
        let max_throughput = self.max_throughput
            .unwrap_or(reference.max_throughput);

        if !is_positive_finite(transmit_power.value()) {
            return Err(SignalModelBuildError::InvalidTransmitPower);
        }
        if frequency == 0 {
            return Err(SignalModelBuildError::InvalidFrequency);
        }
        if !midpoint.value().is_finite() {
            return Err(SignalModelBuildError::InvalidMidpoint);
        }
        if !is_positive_finite(steepness) {
            return Err(SignalModelBuildError::InvalidSteepness);
        }
        if max_throughput == 0 {
            return Err(SignalModelBuildError::InvalidMaxThroughput);
        }

        Ok(SignalModel {
            transmit_power,
            frequency,
            midpoint,
            steepness,
            max_throughput,
        })
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
