//! [`Admission`] read model definition.

use common::Days;
#[cfg(feature = "serde")]
use serde::Serialize;
use time::Date;

use crate::{
    calendar::Calendar,
    domain::{
        employee,
        leave::{self, Category, Duration, Period},
        Employee,
    },
};

use super::Balance;

/// Leave [`Request`] being drafted, before it is submitted.
///
/// [`Request`]: leave::Request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Draft {
    /// ID of the [`Employee`] drafting the leave.
    pub employee_id: employee::Id,

    /// [`Period`] of the leave.
    pub period: Period,

    /// [`leave::Type`] of the leave.
    pub kind: leave::Type,

    /// [`Duration`] shape of the leave.
    pub duration: Duration,
}

/// Outcome of checking a [`Draft`] against the admission rules.
///
/// Advisory only: an [`Admission`] never blocks a submission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Admission {
    /// Leave [`Days`] the [`Draft`] takes.
    pub requested: Days,

    /// Annual remaining [`Days`] after the [`Draft`] is taken.
    ///
    /// Negative on a shortage.
    pub projected_remaining: Days,

    /// Indicates whether the remaining annual balance covers the [`Draft`].
    ///
    /// Always `true` for [`Category::NonAnnual`] leave.
    pub sufficient_balance: bool,

    /// Indicates whether the [`Draft`] overlaps an approved leave of the same
    /// [`Employee`].
    pub overlapping: bool,
}

impl Admission {
    /// Checks the provided [`Draft`] of the [`Employee`] against their
    /// leave `history` as of the provided [`Date`].
    #[must_use]
    pub fn check(
        employee: &Employee,
        history: &[leave::Request],
        calendar: &impl Calendar,
        draft: &Draft,
        as_of: Date,
    ) -> Self {
        let requested =
            leave::leave_days(calendar, draft.period, draft.duration);
        let remaining = Balance::compute(employee, history, calendar, as_of)
            .annual_remaining;

        let (projected_remaining, sufficient_balance) =
            match draft.kind.category() {
                Category::Annual => {
                    (remaining - requested, remaining >= requested)
                }
                Category::NonAnnual => (remaining, true),
            };

        Self {
            requested,
            projected_remaining,
            sufficient_balance,
            overlapping: has_overlapping_leave(
                employee.id,
                history,
                draft.period,
                None,
            ),
        }
    }

    /// Indicates whether no admission rule is violated.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.sufficient_balance && !self.overlapping
    }
}

/// Indicates whether the remaining annual balance of the [`Employee`] covers
/// the leave [`Days`] of the provided [`Period`] and [`Duration`].
#[must_use]
pub fn has_sufficient_balance(
    employee: &Employee,
    history: &[leave::Request],
    calendar: &impl Calendar,
    period: Period,
    duration: Duration,
    as_of: Date,
) -> bool {
    let balance = Balance::compute(employee, history, calendar, as_of);
    balance.annual_remaining >= leave::leave_days(calendar, period, duration)
}

/// Indicates whether any approved leave [`Request`] of the [`Employee`],
/// other than the `exclude`d one, overlaps the provided [`Period`].
///
/// [`Request`]: leave::Request
#[must_use]
pub fn has_overlapping_leave(
    employee_id: employee::Id,
    history: &[leave::Request],
    period: Period,
    exclude: Option<leave::Id>,
) -> bool {
    history.iter().any(|r| {
        r.employee_id == employee_id
            && r.is_approved()
            && Some(r.id) != exclude
            && r.period.overlaps(&period)
    })
}
