//! [`Balance`] read model definition.

use common::Days;
#[cfg(feature = "serde")]
use serde::Serialize;
use time::Date;

use crate::{
    calendar::Calendar,
    domain::{
        leave::{self, Category},
        Employee,
    },
};

/// Leave balance of an [`Employee`], derived from the history of their leave
/// [`Request`]s.
///
/// [`Request`]: leave::Request
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Balance {
    /// Annual leave entitlement.
    pub annual_entitlement: Days,

    /// Annual leave taken by approved requests.
    pub annual_used: Days,

    /// Annual leave still available, never below zero.
    pub annual_remaining: Days,

    /// Non-annual leave taken by approved requests, without a cap.
    pub non_annual_used: Days,
}

impl Balance {
    /// Zero [`Balance`], reported for unknown [`Employee`]s.
    pub const EMPTY: Self = Self {
        annual_entitlement: Days::ZERO,
        annual_used: Days::ZERO,
        annual_remaining: Days::ZERO,
        non_annual_used: Days::ZERO,
    };

    /// Computes the [`Balance`] of the provided [`Employee`] as of the
    /// provided [`Date`].
    ///
    /// Only [`Status::Approved`] requests of the [`Employee`] count, others
    /// are ignored.
    ///
    /// [`Status::Approved`]: leave::Status::Approved
    #[must_use]
    pub fn compute<'r>(
        employee: &Employee,
        requests: impl IntoIterator<Item = &'r leave::Request>,
        calendar: &impl Calendar,
        as_of: Date,
    ) -> Self {
        let annual_entitlement = Days::from(employee.annual_entitlement(as_of));

        let (mut annual_used, mut non_annual_used) = (Days::ZERO, Days::ZERO);
        for req in requests
            .into_iter()
            .filter(|r| r.employee_id == employee.id && r.is_approved())
        {
            let days = leave::leave_days(calendar, req.period, req.duration);
            match req.category() {
                Category::Annual => annual_used += days,
                Category::NonAnnual => non_annual_used += days,
            }
        }

        Self {
            annual_entitlement,
            annual_used,
            annual_remaining: annual_entitlement.saturating_sub(annual_used),
            non_annual_used,
        }
    }
}
