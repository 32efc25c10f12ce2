//! [`Days`]-related definitions.

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use derive_more::{Display, From, Into};
use rust_decimal::Decimal;

/// Exact (possibly fractional) amount of days.
///
/// Leave quantities come in half-day steps, though any [`Decimal`] is
/// accepted. May be negative, when describing a shortage.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
#[display("{}", _0.normalize())]
pub struct Days(Decimal);

impl Days {
    /// Zero [`Days`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates new [`Days`] out of the provided amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates new [`Days`] out of the provided whole number of days.
    #[must_use]
    pub fn whole(count: u32) -> Self {
        Self(Decimal::from(count))
    }

    /// Returns the amount of these [`Days`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns a half of these [`Days`].
    #[must_use]
    pub fn half(self) -> Self {
        Self(self.0 / Decimal::TWO)
    }

    /// Subtracts the provided [`Days`], flooring the result at [`Days::ZERO`].
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        (self - rhs).max(Self::ZERO)
    }

    /// Indicates whether these [`Days`] are below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<u16> for Days {
    fn from(count: u16) -> Self {
        Self(Decimal::from(count))
    }
}

impl Add for Days {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Days {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Days {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Days {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl FromStr for Days {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| "invalid `Days` value")
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Days;

    #[test]
    fn halves_exactly() {
        assert_eq!(Days::whole(1).half(), Days::new(Decimal::new(5, 1)));
        assert_eq!(Days::whole(3).half().to_string(), "1.5");
        assert_eq!(
            [Days::whole(1).half(), Days::whole(1).half()]
                .into_iter()
                .sum::<Days>(),
            Days::whole(1),
        );
    }

    #[test]
    fn floors_at_zero() {
        assert_eq!(
            Days::whole(15).saturating_sub(Days::whole(20)),
            Days::ZERO,
        );
        assert_eq!(
            Days::whole(20).saturating_sub(Days::whole(15)),
            Days::from(5_u16),
        );
    }

    #[test]
    fn displays_without_trailing_zeros() {
        assert_eq!(Days::whole(5).to_string(), "5");
        assert_eq!("2.50".parse::<Days>().unwrap().to_string(), "2.5");
        assert_eq!((Days::whole(1) - Days::whole(3)).to_string(), "-2");
    }

    #[test]
    fn detects_shortage() {
        assert!((Days::whole(1) - Days::whole(2)).is_negative());
        assert!(!Days::ZERO.is_negative());
        assert!(!Days::whole(2).is_negative());
    }
}
