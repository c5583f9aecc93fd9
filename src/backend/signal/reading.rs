use serde::Serialize;

use crate::backend::mathphysics::{
    Dbm, Decibel, Kilometer, Mbps, Meter, Milliwatt
};

use super::{SignalLevel, SignalStrength, NO_SIGNAL_STRENGTH};


/// Physical quantities of a link at one transmitter-receiver separation.
///
/// Readings are plain values: every field is derived from the distance and
/// the model parameters, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SignalReading {
    distance_meters: Meter,
    distance_km: Kilometer,
    received_power_mw: Milliwatt,
    path_loss_db: Decibel,
    corrected_power_mw: Milliwatt,
    power_dbm: Dbm,
    strength_percent: SignalStrength,
    throughput_mbps: Mbps,
}

impl SignalReading {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        distance_meters: Meter,
        distance_km: Kilometer,
        received_power_mw: Milliwatt,
        path_loss_db: Decibel,
        corrected_power_mw: Milliwatt,
        power_dbm: Dbm,
        strength_percent: SignalStrength,
        throughput_mbps: Mbps,
    ) -> Self {
        Self {
            distance_meters,
            distance_km,
            received_power_mw,
            path_loss_db,
            corrected_power_mw,
            power_dbm,
            strength_percent,
            throughput_mbps,
        }
    }

    /// Reading for a distance at which the model is undefined (zero or
    /// negative). Only the distance is kept.
    #[must_use]
    pub fn no_signal(distance_meters: Meter) -> Self {
        Self {
            distance_meters,
            distance_km: 0.0,
            received_power_mw: Milliwatt::default(),
            path_loss_db: Decibel::default(),
            corrected_power_mw: Milliwatt::default(),
            power_dbm: Dbm::NO_SIGNAL,
            strength_percent: NO_SIGNAL_STRENGTH,
            throughput_mbps: 0,
        }
    }

    #[must_use]
    pub fn distance_meters(&self) -> Meter {
        self.distance_meters
    }

    #[must_use]
    pub fn distance_km(&self) -> Kilometer {
        self.distance_km
    }

    #[must_use]
    pub fn received_power_mw(&self) -> Milliwatt {
        self.received_power_mw
    }

    #[must_use]
    pub fn path_loss_db(&self) -> Decibel {
        self.path_loss_db
    }

    #[must_use]
    pub fn corrected_power_mw(&self) -> Milliwatt {
        self.corrected_power_mw
    }

    #[must_use]
    pub fn power_dbm(&self) -> Dbm {
        self.power_dbm
    }

    #[must_use]
    pub fn strength_percent(&self) -> SignalStrength {
        self.strength_percent
    }

    #[must_use]
    pub fn throughput_mbps(&self) -> Mbps {
        self.throughput_mbps
    }

    #[must_use]
    pub fn is_no_signal(&self) -> bool {
        self.power_dbm == Dbm::NO_SIGNAL
    }

    #[must_use]
    pub fn level(&self) -> SignalLevel {
        if self.is_no_signal() {
            return SignalLevel::NoSignal;
        }

        SignalLevel::from(self.strength_percent)
    }
}
