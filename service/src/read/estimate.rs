//! [`Estimate`] read model definition.

use common::Days;
use time::Date;

use crate::{
    calendar::Calendar,
    domain::{
        leave::{self, Category},
        Employee, PublicHoliday,
    },
};

/// Estimated annual leave balance of an [`Employee`] at a future [`Date`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Estimate {
    /// [`Date`] the balance is estimated at.
    pub target: Date,

    /// Estimated annual remaining [`Days`].
    pub balance: Days,

    /// [`PublicHoliday`]s between today and the `target` [`Date`].
    pub holidays: Vec<PublicHoliday>,
}

impl Estimate {
    /// Estimates the annual leave balance of the [`Employee`] at the `target`
    /// [`Date`], listing the [`PublicHoliday`]s up to it.
    ///
    /// [`None`] is returned unless the `target` follows `today`.
    #[must_use]
    pub fn compute(
        employee: &Employee,
        history: &[leave::Request],
        calendar: &impl Calendar,
        target: Date,
        today: Date,
    ) -> Option<Self> {
        let balance =
            estimate_balance_at(employee, history, calendar, target, today)?;

        Some(Self {
            target,
            balance,
            holidays: calendar
                .holidays_in_range(today, target)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}

/// Estimates the annual remaining [`Days`] of the [`Employee`] at the
/// `target` [`Date`].
///
/// The entitlement is the one of the tenure reached at the `target`. Only
/// approved annual leave ending not later than the `target` is subtracted.
///
/// [`None`] is returned unless the `target` follows `today`.
#[must_use]
pub fn estimate_balance_at(
    employee: &Employee,
    history: &[leave::Request],
    calendar: &impl Calendar,
    target: Date,
    today: Date,
) -> Option<Days> {
    if target <= today {
        return None;
    }

    let entitlement = Days::from(employee.annual_entitlement(target));
    let used = history
        .iter()
        .filter(|r| {
            r.employee_id == employee.id
                && r.is_approved()
                && r.category() == Category::Annual
                && r.period.end() <= target
        })
        .map(|r| leave::leave_days(calendar, r.period, r.duration))
        .sum();

    Some(entitlement.saturating_sub(used))
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Days};
    use time::{macros::date, Date};

    use crate::{
        calendar::HolidayTable,
        domain::{
            employee::{self, Department, Email, Grade, Name},
            leave::{self, Duration, Period, Status, Type},
            Employee,
        },
    };

    use super::{estimate_balance_at, Estimate};

    fn employee() -> Employee {
        Employee {
            id: employee::Id::new(),
            name: Name::new("David Lee").unwrap(),
            email: Email::new("david.lee@company.com").unwrap(),
            grade: Grade::Mid,
            department: Department::new("Finance").unwrap(),
            first_day_of_work: date!(2023 - 11 - 01),
        }
    }

    fn approved(
        employee_id: employee::Id,
        start: Date,
        end: Date,
        kind: Type,
    ) -> leave::Request {
        leave::Request {
            id: leave::Id::new(),
            employee_id,
            period: Period::new(start, end).unwrap(),
            kind,
            duration: Duration::FullDay,
            status: Status::Approved,
            submitted_at: DateTime::midnight_of(start).coerce(),
            notes: None,
            reject_reason: None,
        }
    }

    #[test]
    fn requires_future_target() {
        let emp = employee();
        let calendar = HolidayTable::hong_kong();
        let today = date!(2026 - 10 - 19);

        assert_eq!(
            estimate_balance_at(&emp, &[], &calendar, today, today),
            None,
        );
        assert_eq!(
            estimate_balance_at(
                &emp,
                &[],
                &calendar,
                date!(2026 - 10 - 18),
                today,
            ),
            None,
        );
        assert!(Estimate::compute(&emp, &[], &calendar, today, today)
            .is_none());
    }

    #[test]
    fn uses_tenure_reached_at_target() {
        let emp = employee();
        let calendar = HolidayTable::hong_kong();
        let history = [
            // 5 days, ending before the target.
            approved(
                emp.id,
                date!(2026 - 11 - 02),
                date!(2026 - 11 - 06),
                Type::Vacation,
            ),
            // Ending after the target.
            approved(
                emp.id,
                date!(2026 - 11 - 30),
                date!(2026 - 12 - 04),
                Type::Personal,
            ),
            // Not annual leave.
            approved(
                emp.id,
                date!(2026 - 11 - 09),
                date!(2026 - 11 - 10),
                Type::Medical,
            ),
        ];

        // 3 years of service reached on 2026-11-01: 18 + 2.
        assert_eq!(
            estimate_balance_at(
                &emp,
                &history,
                &calendar,
                date!(2026 - 12 - 01),
                date!(2026 - 10 - 19),
            ),
            Some(Days::whole(15)),
        );
    }

    #[test]
    fn lists_holidays_up_to_target() {
        let emp = employee();
        let calendar = HolidayTable::hong_kong();

        let estimate = Estimate::compute(
            &emp,
            &[],
            &calendar,
            date!(2027 - 01 - 01),
            date!(2026 - 12 - 01),
        )
        .unwrap();

        let names = estimate
            .holidays
            .iter()
            .map(|h| h.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Christmas Day", "Boxing Day", "New Year's Day"]);
        assert_eq!(estimate.balance, Days::whole(20));
    }
}
