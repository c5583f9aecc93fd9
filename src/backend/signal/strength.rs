use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};

use crate::backend::mathphysics::{logistic, round_to_decimals, Dbm, Mbps};


pub const MAX_SIGNAL_STRENGTH_VALUE: StrengthValue = 100.0;

pub const NO_SIGNAL_STRENGTH: SignalStrength       = SignalStrength(0.0);
pub const MAX_WEAK_SIGNAL_STRENGTH: SignalStrength = SignalStrength(
    MAX_SIGNAL_STRENGTH_VALUE * 0.4
);
pub const MAX_MODERATE_SIGNAL_STRENGTH: SignalStrength = SignalStrength(
    MAX_SIGNAL_STRENGTH_VALUE * 0.7
);
pub const MAX_SIGNAL_STRENGTH: SignalStrength      = SignalStrength(
    MAX_SIGNAL_STRENGTH_VALUE
);

const DISPLAYED_DECIMALS: i32 = 1;


// Percentage in [0, 100].
pub type StrengthValue = f64;


#[derive(
    Clone, Copy, Debug, Display, Default, Add, Sub, PartialEq, PartialOrd,
    Serialize, Deserialize
)]
#[display("{_0}%")]
pub struct SignalStrength(StrengthValue);

impl SignalStrength {
    #[must_use]
    pub fn new(value: StrengthValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> StrengthValue {
        self.0
    }

    /// Squashes a power level into a 0..100 quality score.
    ///
    /// `midpoint` is the power that maps to 50 %, `steepness` is the scale
    /// of the logistic curve in dB.
    #[must_use]
    pub fn from_power(power: Dbm, midpoint: Dbm, steepness: f64) -> Self {
        let fraction = logistic(power.value(), midpoint.value(), steepness);

        Self(MAX_SIGNAL_STRENGTH_VALUE * fraction)
    }

    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(round_to_decimals(self.0, DISPLAYED_DECIMALS))
    }

    // NaN saturates to 0.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_possible_truncation)]
    pub fn throughput(&self, max_throughput: Mbps) -> Mbps {
        let fraction = self.0 / MAX_SIGNAL_STRENGTH_VALUE;

        (fraction * f64::from(max_throughput)).round() as Mbps
    }
}
