//! Quantification of leave in [`Days`].

use common::Days;

use crate::calendar::Calendar;

use super::{Duration, Period};

/// Returns the amount of leave [`Days`] the provided [`Period`] takes with
/// the provided [`Duration`] shape.
///
/// Only working days of the [`Calendar`] count. A half-day [`Duration`]
/// halves every day of the [`Period`], even a multi-day one.
#[must_use]
pub fn leave_days(
    calendar: &impl Calendar,
    period: Period,
    duration: Duration,
) -> Days {
    let working = Days::whole(
        calendar.count_working_days(period.start(), period.end()),
    );
    if !duration.is_half_day() {
        return working;
    }

    if period.is_multi_day() {
        tracing::debug!(
            %period,
            %duration,
            "half-day `Duration` over multiple days, halving every day",
        );
    }
    working.half()
}

#[cfg(test)]
mod spec {
    use common::Days;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use time::{macros::date, Duration as Span};

    use crate::calendar::HolidayTable;

    use super::{leave_days, Duration, Period};

    #[test]
    fn full_days_over_working_week() {
        let period =
            Period::new(date!(2026 - 01 - 12), date!(2026 - 01 - 16)).unwrap();

        assert_eq!(
            leave_days(&HolidayTable::hong_kong(), period, Duration::FullDay),
            Days::whole(5),
        );
    }

    #[test]
    fn half_day_on_working_day() {
        let period = Period::day(date!(2026 - 01 - 13));

        assert_eq!(
            leave_days(&HolidayTable::hong_kong(), period, Duration::HalfDayAm),
            Days::new(Decimal::new(5, 1)),
        );
    }

    #[test]
    fn half_day_on_holiday_is_free() {
        let period = Period::day(date!(2026 - 12 - 25));

        assert_eq!(
            leave_days(&HolidayTable::hong_kong(), period, Duration::HalfDayPm),
            Days::ZERO,
        );
    }

    #[test]
    fn multi_day_half_day_halves_every_day() {
        let period =
            Period::new(date!(2026 - 01 - 12), date!(2026 - 01 - 16)).unwrap();

        assert_eq!(
            leave_days(&HolidayTable::hong_kong(), period, Duration::HalfDayPm)
                .to_string(),
            "2.5",
        );
    }

    #[test]
    fn skips_weekends_and_holidays() {
        // Lunar New Year 2027 takes Thursday to Saturday.
        let period =
            Period::new(date!(2027 - 02 - 22), date!(2027 - 02 - 28)).unwrap();

        assert_eq!(
            leave_days(&HolidayTable::hong_kong(), period, Duration::FullDay),
            Days::whole(3),
        );
    }

    proptest! {
        #[test]
        fn comes_in_half_day_steps(
            offset in 0_i64..700,
            length in 0_i64..30,
            shape in 0_usize..Duration::ALL.len(),
        ) {
            let start = date!(2026 - 01 - 01) + Span::days(offset);
            let period =
                Period::new(start, start + Span::days(length)).unwrap();

            let days = leave_days(
                &HolidayTable::hong_kong(),
                period,
                Duration::ALL[shape],
            );

            let doubled = days.amount() * Decimal::TWO;
            prop_assert_eq!(doubled, doubled.trunc());
            prop_assert!(!days.is_negative());
        }
    }
}
