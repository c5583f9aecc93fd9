use std::ops;

use derive_more::{Add, Display, Div, From, Mul, Sub};
use impl_ops::{
    _impl_binary_op_borrowed_borrowed, _impl_binary_op_borrowed_owned,
    _impl_binary_op_internal, _impl_binary_op_owned_borrowed,
    _impl_binary_op_owned_owned, _parse_binary_op, impl_op, impl_op_ex
};
use serde::{Deserialize, Serialize};


pub type Meter     = f64;
pub type Kilometer = f64;
pub type Megahertz = u32;
pub type Mbps      = u32;


pub const METERS_IN_KILOMETER: Meter = 1_000.0;


#[must_use]
pub fn meters_to_kilometers(distance: Meter) -> Kilometer {
    distance / METERS_IN_KILOMETER
}


#[derive(
    Clone, Copy, Debug, Display, Default, From, Add, Sub, Mul, Div,
    PartialEq, PartialOrd, Serialize, Deserialize
)]
#[display("{_0} mW")]
pub struct Milliwatt(f64);

impl Milliwatt {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Dbm> for Milliwatt {
    fn from(power: Dbm) -> Self {
        Self(10.0_f64.powf(power.0 / 10.0))
    }
}


#[derive(
    Clone, Copy, Debug, Display, Default, From, Add, Sub,
    PartialEq, PartialOrd, Serialize, Deserialize
)]
#[display("{_0} dB")]
pub struct Decibel(f64);

impl Decibel {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    // Linear power ratio equivalent to this loss.
    #[must_use]
    pub fn attenuation_ratio(&self) -> f64 {
        10.0_f64.powf(-self.0 / 10.0)
    }
}


// Power level relative to 1 mW. Negative infinity stands for no signal.
#[derive(
    Clone, Copy, Debug, Display, Default, From, PartialEq, PartialOrd,
    Serialize, Deserialize
)]
#[display("{_0} dBm")]
pub struct Dbm(f64);

impl Dbm {
    pub const NO_SIGNAL: Self = Self(f64::NEG_INFINITY);

    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Milliwatt> for Dbm {
    fn from(power: Milliwatt) -> Self {
        Self(10.0 * power.0.log10())
    }
}


impl_op_ex!(
    - |a: &Milliwatt, b: &Decibel| -> Milliwatt {
        Milliwatt(a.0 * b.attenuation_ratio())
    }
);
impl_op_ex!(
    + |a: &Dbm, b: &Decibel| -> Dbm {
        Dbm(a.0 + b.0)
    }
);
impl_op_ex!(
    - |a: &Dbm, b: &Decibel| -> Dbm {
        Dbm(a.0 - b.0)
    }
);
impl_op_ex!(
    - |a: &Dbm, b: &Dbm| -> Decibel {
        Decibel(a.0 - b.0)
    }
);
