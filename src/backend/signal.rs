use super::mathphysics::Meter;


pub use level::*;
pub use model::*;
pub use reading::*;
pub use strength::*;


pub mod level;
pub mod model;
pub mod reading;
pub mod strength;


/// Reading of the reference model (100 mW at 2.4 GHz).
#[must_use]
pub fn compute_reading(distance: Meter) -> SignalReading {
    SignalModel::default().compute_reading(distance)
}

/// Sampled curve of the reference model over `1..=max_distance` meters.
#[must_use]
pub fn compute_curve(max_distance: u32) -> Vec<SignalReading> {
    SignalModel::default().compute_curve(max_distance)
}
