use mathphysics::{Dbm, Frequency, Mbps, Milliwatt};


pub mod mathphysics;
pub mod signal;


pub const TRANSMIT_POWER: Milliwatt = Milliwatt::new(100.0);
pub const WIFI_FREQUENCY: Frequency = Frequency::Wifi2_4GHz;
pub const MAX_SAMPLED_DISTANCE: u32 = 20;
pub const MAX_THROUGHPUT: Mbps      = 100;

// Logistic curve that maps power levels to signal strength percents.
pub const SIGNAL_MIDPOINT: Dbm  = Dbm::new(-65.0);
pub const SIGNAL_STEEPNESS: f64 = 5.0;
