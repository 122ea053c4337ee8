//! Whole-rouble price representation.
//!
//! Bakery prices carry no minor units: a pie costs `850 ₽`, never `850.50 ₽`.
//! Arithmetic saturates at `u64::MAX` so cart totals are always defined.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative amount in whole roubles.
///
/// ## Examples
///
/// ```
/// use bakery_core::Price;
///
/// let pie = Price::new(850);
/// assert_eq!(pie.times(2), Price::new(1700));
/// assert_eq!(pie.to_string(), "850 ₽");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero roubles.
    pub const ZERO: Self = Self(0);

    /// Currency sign used when rendering prices.
    pub const CURRENCY_SIGN: &'static str = "₽";

    /// Create a price from a whole-rouble amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in whole roubles.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, Self::CURRENCY_SIGN)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times() {
        assert_eq!(Price::new(120).times(2), Price::new(240));
        assert_eq!(Price::new(120).times(0), Price::ZERO);
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(240), Price::new(850)].into_iter().sum();
        assert_eq!(total, Price::new(1090));

        let empty: Price = core::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(1090).to_string(), "1090 ₽");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert_eq!(serde_json::from_str::<Price>("90").unwrap(), Price::new(90));
    }
}
