use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::Megahertz;


// The representation type needs to be updated if the `Megahertz` type is
// changed.
#[repr(u32)]
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, PartialEq, Hash, Deserialize,
    Serialize
)]
pub enum Frequency {
    #[default]
    #[display("2.4 GHz")]
    Wifi2_4GHz = 2_400,
    #[display("5 GHz")]
    Wifi5GHz   = 5_000,
}

impl Frequency {
    #[must_use]
    pub fn megahertz(self) -> Megahertz {
        self as Megahertz
    }
}
