//! Money in minor currency units

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in minor currency units (cents).
///
/// Prices enter the system in cents. Stored nightly costs are in major
/// units, so every comparison against the store goes through [`Cents::to_major`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Major-unit value (`cents / 100`), fractional part preserved.
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Major-unit value when the amount has no fractional cents.
    pub const fn whole_major(self) -> Option<i64> {
        if self.0 % 100 == 0 {
            Some(self.0 / 100)
        } else {
            None
        }
    }
}

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Cents {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
