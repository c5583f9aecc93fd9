use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{
    SignalStrength, MAX_MODERATE_SIGNAL_STRENGTH, MAX_WEAK_SIGNAL_STRENGTH
};


#[derive(
    Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default, Debug, Display,
    Serialize, Deserialize
)]
pub enum SignalLevel {
    #[default]
    #[display("No signal")]
    NoSignal,
    #[display("Weak")]
    Weak,
    #[display("Moderate")]
    Moderate,
    #[display("Strong")]
    Strong,
}

impl SignalLevel {
    #[must_use]
    pub fn is_no_signal(&self) -> bool {
        matches!(self, Self::NoSignal)
    }

    #[must_use]
    pub fn is_weak(&self) -> bool {
        matches!(self, Self::Weak)
    }

    #[must_use]
    pub fn is_moderate(&self) -> bool {
        matches!(self, Self::Moderate)
    }

    #[must_use]
    pub fn is_strong(&self) -> bool {
        matches!(self, Self::Strong)
    }
}

// A strength alone never yields `NoSignal`; that level is reserved for
// readings taken at a non-positive distance.
impl From<SignalStrength> for SignalLevel {
    fn from(strength: SignalStrength) -> Self {
        if strength > MAX_MODERATE_SIGNAL_STRENGTH {
            Self::Strong
        } else if strength > MAX_WEAK_SIGNAL_STRENGTH {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn level_thresholds() {
        assert!(SignalLevel::from(SignalStrength::new(99.9)).is_strong());
        assert!(SignalLevel::from(SignalStrength::new(70.1)).is_strong());
        assert!(SignalLevel::from(SignalStrength::new(70.0)).is_moderate());
        assert!(SignalLevel::from(SignalStrength::new(40.1)).is_moderate());
        assert!(SignalLevel::from(SignalStrength::new(40.0)).is_weak());
        assert!(SignalLevel::from(SignalStrength::new(0.0)).is_weak());
    }

    #[test]
    fn levels_are_ordered_by_quality() {
        assert!(SignalLevel::NoSignal < SignalLevel::Weak);
        assert!(SignalLevel::Weak < SignalLevel::Moderate);
        assert!(SignalLevel::Moderate < SignalLevel::Strong);
    }

    #[test]
    fn level_names() {
        assert_eq!("No signal", SignalLevel::NoSignal.to_string());
        assert_eq!("Strong", SignalLevel::Strong.to_string());
    }
}
