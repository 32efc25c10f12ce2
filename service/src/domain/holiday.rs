//! [`PublicHoliday`] definitions.

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::Serialize;
use time::Date;

/// Public holiday observed by a jurisdiction.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[display("{date} ({name})")]
pub struct PublicHoliday {
    /// Calendar [`Date`] of this [`PublicHoliday`].
    pub date: Date,

    /// Name of this [`PublicHoliday`].
    pub name: &'static str,
}

impl PublicHoliday {
    /// Creates a new [`PublicHoliday`].
    #[must_use]
    pub const fn new(date: Date, name: &'static str) -> Self {
        Self { date, name }
    }
}
