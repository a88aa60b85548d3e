//! Money amount used for rates and reservation totals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// A monetary amount in the property's currency.
///
/// Totals are derived from a nightly rate times a fractional night count, so
/// the amount is kept as a float and never rounded by the domain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    #[inline]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    #[inline]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Price of `nights` at this nightly rate
    #[inline]
    #[must_use]
    pub fn for_nights(self, nights: f64) -> Self {
        self * nights
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, rhs: f64) -> Money {
        Money(self.0 * rhs)
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
