use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume of a teapot in liters
///
/// Only a fixed set of volumes is manufactured, so capacity is a closed enum.
/// On the wire it is a plain JSON number (`0.3`, `3`, `10`, ...).
///
/// # Example
/// ```
/// use teapot_api::domain::teapot::Capacity;
///
/// assert_eq!(Capacity::try_from(0.3), Ok(Capacity::L0_3));
/// assert!(Capacity::try_from(7.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Capacity {
    L0_3,
    L0_5,
    L1,
    L1_5,
    L2,
    L3,
    L5,
    L10,
}

impl Capacity {
    /// All manufactured capacities, smallest first
    pub const ALL: [Capacity; 8] = [
        Capacity::L0_3,
        Capacity::L0_5,
        Capacity::L1,
        Capacity::L1_5,
        Capacity::L2,
        Capacity::L3,
        Capacity::L5,
        Capacity::L10,
    ];

    const TOLERANCE: f64 = 1e-9;

    /// Returns the volume in liters
    pub fn liters(&self) -> f64 {
        match self {
            Capacity::L0_3 => 0.3,
            Capacity::L0_5 => 0.5,
            Capacity::L1 => 1.0,
            Capacity::L1_5 => 1.5,
            Capacity::L2 => 2.0,
            Capacity::L3 => 3.0,
            Capacity::L5 => 5.0,
            Capacity::L10 => 10.0,
        }
    }

    /// Message reported when a volume is not one of [`Capacity::ALL`]
    fn invalid_message() -> String {
        let allowed: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
        format!("capacity must be one of {} liters", allowed.join(", "))
    }
}

impl TryFrom<f64> for Capacity {
    type Error = String;

    fn try_from(liters: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| (c.liters() - liters).abs() < Self::TOLERANCE)
            .ok_or_else(Self::invalid_message)
    }
}

impl From<Capacity> for f64 {
    fn from(capacity: Capacity) -> Self {
        capacity.liters()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.liters())
    }
}
