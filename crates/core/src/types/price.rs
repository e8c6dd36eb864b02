//! Whole-ruble price representation.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// A non-negative price in whole rubles.
///
/// The menu never uses kopecks, so the amount is a plain integer. Arithmetic
/// saturates instead of wrapping.
///
/// ```
/// use sakura_core::Price;
///
/// let price = Price::new(300);
/// assert_eq!(price.times(2), Price::new(600));
/// assert_eq!(price.to_string(), "300 ₽");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Currency sign used when formatting.
    pub const SYMBOL: &'static str = "₽";

    /// Create a price from whole rubles.
    #[must_use]
    pub const fn new(rubles: u64) -> Self {
        Self(rubles)
    }

    /// Get the amount in whole rubles.
    #[must_use]
    pub const fn rubles(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Sum of two prices.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, Self::SYMBOL)
    }
}

impl From<u64> for Price {
    fn from(rubles: u64) -> Self {
        Self(rubles)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::plus)
    }
}
