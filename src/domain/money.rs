use crate::error::FeeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A per-day storage rate in whole Rupiah.
///
/// This is a wrapper around `rust_decimal::Decimal` to keep amounts exact and
/// to reject negative rates at the configuration boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, FeeError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FeeError::Validation(
                "Rate must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Charge for `days` full days at this rate.
    pub fn times(&self, days: u32) -> Fee {
        Fee(self.0 * Decimal::from(days))
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = FeeError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A computed storage fee. Never negative: fees are only ever built from
/// non-negative rates and day counts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Fee(Decimal);

impl Fee {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Fee {
    type Error = FeeError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FeeError::Validation("Fee must not be negative".to_string()))
        }
    }
}

impl From<Rate> for Fee {
    fn from(rate: Rate) -> Self {
        Self(rate.0)
    }
}

impl Add for Fee {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fee {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
