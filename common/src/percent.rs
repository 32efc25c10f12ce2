//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Days;

/// Non-negative floating-point percentage.
///
/// Not capped at `100`, as ratios may exceed the whole.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
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
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not
    /// negative.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO).then_some(Self(val))
    }

    /// Calculates the [`Percent`] the `part` makes of the `whole`, rounded to
    /// one decimal place.
    ///
    /// [`Percent::ZERO`] is returned if the `whole` is not positive, or the
    /// `part` is negative.
    #[must_use]
    pub fn ratio(part: Days, whole: Days) -> Self {
        if whole <= Days::ZERO {
            return Self::ZERO;
        }
        Self::new(
            (part.amount() * Decimal::ONE_HUNDRED / whole.amount())
                .round_dp(1),
        )
        .unwrap_or(Self::ZERO)
    }

    /// Returns the value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}
