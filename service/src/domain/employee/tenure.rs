//! Tenure and annual leave entitlement.

use time::Date;

use super::Grade;

/// Returns the completed whole years between the `first_day_of_work` and the
/// `as_of` [`Date`].
///
/// A year is completed on its anniversary. Returns `0` if `as_of` precedes
/// the `first_day_of_work`.
#[must_use]
pub fn years_of_service(first_day_of_work: Date, as_of: Date) -> u32 {
    if as_of <= first_day_of_work {
        return 0;
    }

    let mut years = as_of.year() - first_day_of_work.year();
    let anniversary_passed = (u8::from(as_of.month()), as_of.day())
        >= (u8::from(first_day_of_work.month()), first_day_of_work.day());
    if !anniversary_passed {
        years -= 1;
    }

    u32::try_from(years).unwrap_or_default()
}

/// Returns the annual leave entitlement (in days) for the provided [`Grade`]
/// and completed years of service.
#[must_use]
pub fn annual_entitlement(grade: Grade, years_of_service: u32) -> u16 {
    base_entitlement(grade) + ServiceBracket::of(years_of_service).bonus()
}

/// Returns the base annual leave entitlement (in days) of a [`Grade`].
#[must_use]
pub const fn base_entitlement(grade: Grade) -> u16 {
    match grade {
        Grade::Junior => 15,
        Grade::Mid => 18,
        Grade::Senior => 20,
        Grade::Executive => 25,
    }
}

/// Bracket of completed years of service, granting bonus entitlement days.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ServiceBracket {
    /// Less than 3 years.
    Starting,

    /// From 3 to 5 years.
    Established,

    /// From 6 to 10 years.
    Experienced,

    /// 11 years and more.
    Veteran,
}

impl ServiceBracket {
    /// Returns the [`ServiceBracket`] of the provided completed years of
    /// service.
    #[must_use]
    pub const fn of(years_of_service: u32) -> Self {
        match years_of_service {
            0..=2 => Self::Starting,
            3..=5 => Self::Established,
            6..=10 => Self::Experienced,
            _ => Self::Veteran,
        }
    }

    /// Returns the bonus entitlement days granted by this [`ServiceBracket`]
    /// on top of the [`Grade`]'s base.
    #[must_use]
    pub const fn bonus(self) -> u16 {
        match self {
            Self::Starting => 0,
            Self::Established => 2,
            Self::Experienced => 4,
            Self::Veteran => 6,
        }
    }
}

#[cfg(test)]
mod spec {
    use proptest::prelude::*;
    use time::macros::date;

    use super::{annual_entitlement, years_of_service, Grade, ServiceBracket};

    #[test]
    fn counts_completed_years_only() {
        let first = date!(2015 - 03 - 16);

        assert_eq!(years_of_service(first, date!(2015 - 03 - 16)), 0);
        assert_eq!(years_of_service(first, date!(2016 - 03 - 15)), 0);
        assert_eq!(years_of_service(first, date!(2016 - 03 - 16)), 1);
        assert_eq!(years_of_service(first, date!(2026 - 03 - 15)), 10);
        assert_eq!(years_of_service(first, date!(2026 - 03 - 16)), 11);
    }

    #[test]
    fn no_service_before_first_day() {
        assert_eq!(
            years_of_service(date!(2026 - 06 - 01), date!(2020 - 01 - 01)),
            0,
        );
    }

    #[test]
    fn leap_day_anniversary() {
        let first = date!(2020 - 02 - 29);

        assert_eq!(years_of_service(first, date!(2021 - 02 - 28)), 0);
        assert_eq!(years_of_service(first, date!(2021 - 03 - 01)), 1);
        assert_eq!(years_of_service(first, date!(2024 - 02 - 29)), 4);
    }

    #[test]
    fn brackets_are_inclusive_on_lower_bound() {
        assert_eq!(ServiceBracket::of(0), ServiceBracket::Starting);
        assert_eq!(ServiceBracket::of(2), ServiceBracket::Starting);
        assert_eq!(ServiceBracket::of(3), ServiceBracket::Established);
        assert_eq!(ServiceBracket::of(5), ServiceBracket::Established);
        assert_eq!(ServiceBracket::of(6), ServiceBracket::Experienced);
        assert_eq!(ServiceBracket::of(10), ServiceBracket::Experienced);
        assert_eq!(ServiceBracket::of(11), ServiceBracket::Veteran);
        assert_eq!(ServiceBracket::of(40), ServiceBracket::Veteran);
    }

    #[test]
    fn entitlement_table() {
        assert_eq!(annual_entitlement(Grade::Junior, 0), 15);
        assert_eq!(annual_entitlement(Grade::Mid, 3), 20);
        assert_eq!(annual_entitlement(Grade::Senior, 11), 26);
        assert_eq!(annual_entitlement(Grade::Executive, 7), 29);
    }

    proptest! {
        #[test]
        fn entitlement_is_monotonic(years in 0_u32..60, extra in 0_u32..60) {
            for grade in Grade::ALL {
                prop_assert!(
                    annual_entitlement(*grade, years)
                        <= annual_entitlement(*grade, years + extra)
                );
            }
        }
    }
}
