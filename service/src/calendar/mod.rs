//! [`Calendar`] of working days and public holidays.

mod hong_kong;

use common::define_kind;
use time::{Date, Weekday};

use crate::domain::PublicHoliday;

define_kind! {
    #[doc = "Jurisdiction whose public holidays a [`HolidayTable`] lists."]
    enum Jurisdiction {
        #[doc = "Hong Kong SAR."]
        HongKong = 1 => "HK",
    }
}

/// Calendar distinguishing working days from weekends and public holidays.
///
/// Every check compares calendar days only: callers holding a
/// [`DateTime`] normalize it via [`DateTime::date()`] first.
///
/// [`DateTime`]: common::DateTime
/// [`DateTime::date()`]: common::DateTimeOf::date
pub trait Calendar {
    /// Returns all the [`PublicHoliday`]s known to this [`Calendar`].
    fn holidays(&self) -> &[PublicHoliday];

    /// Indicates whether the provided [`Date`] is a [`PublicHoliday`].
    fn is_public_holiday(&self, date: Date) -> bool {
        self.holidays().iter().any(|h| h.date == date)
    }

    /// Returns the [`PublicHoliday`]s falling into the inclusive
    /// `[start, end]` range, in their table order.
    fn holidays_in_range(
        &self,
        start: Date,
        end: Date,
    ) -> Vec<&PublicHoliday> {
        self.holidays()
            .iter()
            .filter(|h| start <= h.date && h.date <= end)
            .collect()
    }

    /// Indicates whether the provided [`Date`] is a Saturday or a Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Indicates whether the provided [`Date`] is neither a weekend nor a
    /// [`PublicHoliday`].
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Counts working days in the inclusive `[start, end]` range.
    ///
    /// Returns `0` if `end` precedes `start`.
    fn count_working_days(&self, start: Date, end: Date) -> u32 {
        let mut count = 0;
        let mut day = Some(start);
        while let Some(date) = day.filter(|d| *d <= end) {
            if self.is_working_day(date) {
                count += 1;
            }
            day = date.next_day();
        }
        count
    }
}

/// Versioned table of [`PublicHoliday`]s of a [`Jurisdiction`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolidayTable {
    /// [`Jurisdiction`] observing the [`PublicHoliday`]s.
    pub jurisdiction: Jurisdiction,

    /// Version label of this [`HolidayTable`] (usually the covered years).
    pub version: &'static str,

    /// [`PublicHoliday`]s of this [`HolidayTable`].
    pub holidays: Vec<PublicHoliday>,
}

impl HolidayTable {
    /// Returns the built-in [`HolidayTable`] of the provided
    /// [`Jurisdiction`].
    #[must_use]
    pub fn of(jurisdiction: Jurisdiction) -> Self {
        match jurisdiction {
            Jurisdiction::HongKong => Self::hong_kong(),
        }
    }

    /// Returns the [`HolidayTable`] of Hong Kong for 2026 and 2027.
    #[must_use]
    pub fn hong_kong() -> Self {
        Self {
            jurisdiction: Jurisdiction::HongKong,
            version: hong_kong::VERSION,
            holidays: hong_kong::HOLIDAYS.to_vec(),
        }
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::hong_kong()
    }
}

impl Calendar for HolidayTable {
    fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }
}

#[cfg(test)]
mod spec {
    use proptest::prelude::*;
    use time::{macros::date, Date};

    use super::{Calendar, HolidayTable, Jurisdiction};

    #[test]
    fn hong_kong_table() {
        let table = HolidayTable::hong_kong();

        assert_eq!(table.holidays.len(), 33);
        assert_eq!(table.version, "2026-2027");
        assert_eq!(table.jurisdiction.to_string(), "HK");
        assert_eq!(
            "HK".parse::<Jurisdiction>(),
            Ok(Jurisdiction::HongKong),
        );
    }

    #[test]
    fn detects_public_holidays() {
        let table = HolidayTable::hong_kong();

        assert!(table.is_public_holiday(date!(2026 - 12 - 25)));
        assert!(table.is_public_holiday(date!(2027 - 02 - 25)));
        assert!(!table.is_public_holiday(date!(2026 - 12 - 24)));
        assert!(!table.is_public_holiday(date!(2028 - 01 - 01)));
    }

    #[test]
    fn detects_weekends() {
        let table = HolidayTable::hong_kong();

        assert!(table.is_weekend(date!(2026 - 01 - 10)));
        assert!(table.is_weekend(date!(2026 - 01 - 11)));
        assert!(!table.is_weekend(date!(2026 - 01 - 12)));
    }

    #[test]
    fn holidays_in_range_keep_table_order() {
        let table = HolidayTable::hong_kong();

        let names = table
            .holidays_in_range(date!(2026 - 04 - 01), date!(2026 - 05 - 01))
            .into_iter()
            .map(|h| h.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "Ching Ming Festival",
                "Good Friday",
                "Day Following Good Friday",
                "Easter Monday",
                "Labour Day",
            ],
        );

        assert!(table
            .holidays_in_range(date!(2026 - 05 - 01), date!(2026 - 04 - 01))
            .is_empty());
    }

    #[test]
    fn counts_working_days() {
        let table = HolidayTable::hong_kong();

        // Monday to Friday without holidays.
        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 12),
                date!(2026 - 01 - 16),
            ),
            5,
        );
        // Whole week including a weekend.
        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 12),
                date!(2026 - 01 - 18),
            ),
            5,
        );
        // Christmas and Boxing Day 2026 (Friday and Saturday).
        assert_eq!(
            table.count_working_days(
                date!(2026 - 12 - 21),
                date!(2026 - 12 - 27),
            ),
            4,
        );
        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 16),
                date!(2026 - 01 - 12),
            ),
            0,
        );
    }

    #[test]
    fn single_day_range() {
        let table = HolidayTable::hong_kong();

        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 12),
                date!(2026 - 01 - 12),
            ),
            1,
        );
        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 10),
                date!(2026 - 01 - 10),
            ),
            0,
        );
        assert_eq!(
            table.count_working_days(
                date!(2026 - 01 - 01),
                date!(2026 - 01 - 01),
            ),
            0,
        );
    }

    fn any_date() -> impl Strategy<Value = Date> {
        (0_i64..1_000).prop_map(|offset| {
            date!(2025 - 06 - 01) + time::Duration::days(offset)
        })
    }

    proptest! {
        #[test]
        fn single_day_counts_iff_working(day in any_date()) {
            let table = HolidayTable::hong_kong();

            prop_assert_eq!(
                table.count_working_days(day, day),
                u32::from(table.is_working_day(day)),
            );
        }

        #[test]
        fn reversed_range_is_empty(a in any_date(), b in any_date()) {
            prop_assume!(a != b);
            let table = HolidayTable::hong_kong();
            let (start, end) = if a < b { (b, a) } else { (a, b) };

            prop_assert_eq!(table.count_working_days(start, end), 0);
        }

        #[test]
        fn never_exceeds_calendar_days(a in any_date(), b in any_date()) {
            let table = HolidayTable::hong_kong();
            let (start, end) = if a <= b { (a, b) } else { (b, a) };

            let span = (end - start).whole_days() + 1;
            prop_assert!(
                i64::from(table.count_working_days(start, end)) <= span
            );
        }
    }
}
