use core::fmt;
use core::ops::Add;
use serde::{Deserialize, Serialize};

/// Payout multiplier kept in fixed point hundredths, so `1.12` is stored as `112`.
///
/// Every increment is a whole number of hundredths, which keeps the value exactly at two decimal places
/// after any number of additions. Scaling the per-tile reward of 100 by it is then exact integer math.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Self = Self(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// `floor(reward * multiplier)`, exact since the multiplier has two decimals.
    pub const fn scale(self, reward: u32) -> u32 {
        reward.saturating_mul(self.0) / 100
    }
}

impl Add for Multiplier {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}x", self.0 / 100, self.0 % 100)
    }
}
