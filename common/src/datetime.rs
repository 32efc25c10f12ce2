//! Date and time utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{
    format_description::well_known::Rfc3339, macros::format_description,
    Date, UtcOffset,
};

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn now() -> Self {
        let inner = time::OffsetDateTime::now_utc();
        Self {
            _of: PhantomData,
            inner: inner
                .replace_microsecond(inner.microsecond())
                .expect("infallible"),
        }
    }

    /// Creates a new [`DateTime`] at the midnight (UTC) of the provided
    /// [`Date`].
    #[must_use]
    pub fn midnight_of(date: Date) -> Self {
        Self {
            inner: date.midnight().assume_utc(),
            _of: PhantomData,
        }
    }

    /// Returns the calendar [`Date`] (UTC) of this [`DateTime`], discarding
    /// its time of day.
    #[must_use]
    pub fn date(&self) -> Date {
        self.inner.date()
    }

    /// Creates a new [`DateTime`] from the provided [RFC 3339] string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        use ParseError as E;

        time::OffsetDateTime::parse(input, &Rfc3339)
            .map_err(E::Parse)?
            .try_into()
            .map_err(E::ComponentRange)
    }

    /// Returns the [`DateTime`] as an [RFC 3339] string.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.inner.format(&Rfc3339).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as RFC 3339: {e}")
        })
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing [`DateTime`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into an [`DateTime`].
    Parse(time::error::Parse),

    /// Parsed [`DateTime`] has an out of range component.
    ComponentRange(time::error::ComponentRange),
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> TryFrom<time::OffsetDateTime> for DateTimeOf<Of> {
    type Error = time::error::ComponentRange;

    fn try_from(dt: time::OffsetDateTime) -> Result<Self, Self::Error> {
        dt.to_offset(UtcOffset::UTC)
            .replace_microsecond(dt.microsecond())
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
    }
}

impl<Of: ?Sized> From<DateTimeOf<Of>> for time::OffsetDateTime {
    fn from(dt: DateTimeOf<Of>) -> Self {
        dt.inner
    }
}

/// Returns the current calendar [`Date`] (UTC).
///
/// Meant to be called only at the outermost call site: calculations accept
/// the reference [`Date`] as an explicit argument instead.
#[must_use]
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

/// Parses a [`Date`] from the provided `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns an error if the string is not a valid `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    pub mod rfc3339 {
        //! Module providing serialization and deserialization of
        //! [`DateTimeOf`] as an [RFC 3339] string.
        //!
        //! [RFC 3339]: https://tools.ietf.org/html/rfc3339

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::super::DateTimeOf;

        /// Serializes the [`DateTimeOf`] as an [RFC 3339] string.
        ///
        /// # Errors
        ///
        /// Never errors on its own, only propagates [`Serializer`] errors.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn serialize<Of, S>(
            dt: &DateTimeOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&dt.to_rfc3339())
        }

        /// Deserializes an [RFC 3339] string into a [`DateTimeOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid [RFC 3339] date and
        /// time.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateTimeOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            let s = String::deserialize(deserializer)?;
            DateTimeOf::from_rfc3339(&s).map_err(|e| {
                Error::custom(format!("invalid RFC 3339 `DateTime` `{s}`: {e}"))
            })
        }
    }

    pub mod date {
        //! Module providing serialization and deserialization of a [`Date`]
        //! as a `YYYY-MM-DD` string.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};
        use time::Date;

        /// Serializes the [`Date`] as a `YYYY-MM-DD` string.
        ///
        /// # Errors
        ///
        /// Never errors on its own, only propagates [`Serializer`] errors.
        pub fn serialize<S>(
            date: &Date,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(date)
        }

        /// Deserializes a `YYYY-MM-DD` string into a [`Date`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid date.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            super::super::parse_date(&s).map_err(|e| {
                Error::custom(format!("invalid `YYYY-MM-DD` date `{s}`: {e}"))
            })
        }

        pub mod option {
            //! Module providing deserialization of an optional [`Date`].

            use serde::{Deserialize, Deserializer};
            use time::Date;

            /// Deserializes an optional `YYYY-MM-DD` string into a [`Date`].
            ///
            /// # Errors
            ///
            /// Returns an error if the string is present, but is not a valid
            /// date.
            pub fn deserialize<'de, D>(
                deserializer: D,
            ) -> Result<Option<Date>, D::Error>
            where
                D: Deserializer<'de>,
            {
                #[derive(Deserialize)]
                struct Wrapper(#[serde(with = "super")] Date);

                Ok(Option::<Wrapper>::deserialize(deserializer)?
                    .map(|Wrapper(date)| date))
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use time::macros::{date, datetime};

    use super::{parse_date, DateTime};

    #[test]
    fn strips_time_of_day() {
        let dt = DateTime::try_from(datetime!(2026-01-12 23:59:59 UTC))
            .unwrap();
        assert_eq!(dt.date(), date!(2026 - 01 - 12));

        let dt = DateTime::try_from(datetime!(2026-01-12 0:00:00 UTC))
            .unwrap();
        assert_eq!(dt.date(), date!(2026 - 01 - 12));
    }

    #[test]
    fn midnight_keeps_date() {
        assert_eq!(
            DateTime::midnight_of(date!(2027 - 02 - 25)).date(),
            date!(2027 - 02 - 25),
        );
    }

    #[test]
    fn parses_dates() {
        assert_eq!(parse_date("2026-10-19").unwrap(), date!(2026 - 10 - 19));
        assert_eq!(parse_date(" 2026-10-19 ").unwrap(), date!(2026 - 10 - 19));
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("19/10/2026").is_err());
    }

    #[test]
    fn rfc3339_round_trip() {
        let dt = DateTime::from_rfc3339("2026-01-10T08:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-10T08:30:00Z");
    }
}
