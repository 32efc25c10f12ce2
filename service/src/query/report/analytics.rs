//! [`Analytics`] definition.

use std::collections::BTreeMap;

use common::{
    operations::{By, Select},
    Days, Percent,
};
use itertools::Itertools as _;
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::Serialize;
use time::{Date, Month};
use tracerr::Traced;

use crate::{
    calendar::Calendar,
    domain::{
        employee::{self, Grade},
        leave, Employee,
    },
    infra::{database, Database},
    read::Balance,
    Query, Service,
};

/// Number of the most utilizing [`Employee`]s reported.
pub const TOP_UTILIZATION: usize = 10;

/// Number of the latest months reported.
pub const MONTHS: usize = 12;

/// [`Query`] computing leave analytics over all the [`Employee`]s as of some
/// [`Date`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Analytics {
    /// [`Date`] the [`Balance`]s are computed as of.
    pub as_of: Date,
}

impl Analytics {
    /// Creates a new [`Analytics`] [`Query`] as of today.
    #[must_use]
    pub fn today() -> Self {
        Self {
            as_of: common::today(),
        }
    }
}

/// Output of the [`Analytics`] [`Query`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// Top [`TOP_UTILIZATION`] [`Employee`]s by annual leave utilization,
    /// descending.
    pub utilization: Vec<Utilization>,

    /// Approved leave [`Days`] per [`leave::Type`], in declaration order.
    pub by_type: Vec<TypeUsage>,

    /// Approved leave [`Days`] per start month, chronologically, for the
    /// latest [`MONTHS`] months having any.
    pub monthly: Vec<MonthlyUsage>,

    /// Per-[`Grade`] averages, in declaration order.
    pub by_grade: Vec<GradeComparison>,
}

/// Annual leave utilization of an [`Employee`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Utilization {
    /// ID of the [`Employee`].
    pub employee_id: employee::Id,

    /// Name of the [`Employee`].
    pub name: employee::Name,

    /// Annual leave used, relative to the entitlement.
    pub rate: Percent,
}

/// Approved leave [`Days`] of a [`leave::Type`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeUsage {
    /// [`leave::Type`] of the leave.
    pub kind: leave::Type,

    /// Total approved [`Days`].
    pub days: Days,
}

/// Approved leave [`Days`] starting in a calendar month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MonthlyUsage {
    /// Year of the month.
    pub year: i32,

    /// Calendar [`Month`].
    pub month: Month,

    /// Total approved [`Days`].
    pub days: Days,
}

/// Average annual leave figures of a [`Grade`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GradeComparison {
    /// [`Grade`] of the [`Employee`]s.
    pub grade: Grade,

    /// Average annual leave used, rounded to one decimal place.
    pub avg_used: Days,

    /// Average annual entitlement, rounded to one decimal place.
    pub avg_entitlement: Days,
}

impl Report {
    /// Computes the [`Report`] over the provided [`Employee`]s and their
    /// leave [`Request`]s.
    ///
    /// Only [`Status::Approved`] leave is counted.
    ///
    /// [`Request`]: leave::Request
    /// [`Status::Approved`]: leave::Status::Approved
    #[must_use]
    pub fn compute(
        employees: &[Employee],
        requests: &[leave::Request],
        calendar: &impl Calendar,
        as_of: Date,
    ) -> Self {
        let balances = employees
            .iter()
            .map(|e| (e, Balance::compute(e, requests, calendar, as_of)))
            .collect::<Vec<_>>();

        let utilization = balances
            .iter()
            .map(|(e, b)| Utilization {
                employee_id: e.id,
                name: e.name.clone(),
                rate: Percent::ratio(b.annual_used, b.annual_entitlement),
            })
            .sorted_by(|a, b| b.rate.cmp(&a.rate))
            .take(TOP_UTILIZATION)
            .collect();

        let mut by_type = BTreeMap::<leave::Type, Days>::new();
        let mut monthly = BTreeMap::<(i32, u8), (Month, Days)>::new();
        for r in requests.iter().filter(|r| r.is_approved()) {
            let days = leave::leave_days(calendar, r.period, r.duration);
            *by_type.entry(r.kind).or_default() += days;

            let start = r.period.start();
            let (year, month) = (start.year(), start.month());
            monthly
                .entry((year, u8::from(month)))
                .or_insert((month, Days::ZERO))
                .1 += days;
        }
        let skipped = monthly.len().saturating_sub(MONTHS);

        let by_grade = balances
            .iter()
            .into_group_map_by(|(e, _)| e.grade)
            .into_iter()
            .sorted_by_key(|(grade, _)| *grade)
            .map(|(grade, group)| {
                let count = Decimal::from(group.len());
                let avg = |total: Days| {
                    Days::new((total.amount() / count).round_dp(1))
                };
                let (used, entitlement) = group.iter().fold(
                    (Days::ZERO, Days::ZERO),
                    |(used, entitled), (_, b)| {
                        (used + b.annual_used, entitled + b.annual_entitlement)
                    },
                );
                GradeComparison {
                    grade,
                    avg_used: avg(used),
                    avg_entitlement: avg(entitlement),
                }
            })
            .collect();

        Self {
            utilization,
            by_type: by_type
                .into_iter()
                .map(|(kind, days)| TypeUsage { kind, days })
                .collect(),
            monthly: monthly
                .into_iter()
                .skip(skipped)
                .map(|((year, _), (month, days))| MonthlyUsage {
                    year,
                    month,
                    days,
                })
                .collect(),
            by_grade,
        }
    }
}

impl<Db> Query<Analytics> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Employee>, ()>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<leave::Request>, ()>>,
            Ok = Vec<leave::Request>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Report;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Analytics { as_of }: Analytics,
    ) -> Result<Self::Ok, Self::Err> {
        let employees = self
            .database()
            .execute(Select(By::<Vec<Employee>, _>::new(())))
            .map_err(tracerr::wrap!())?;
        let requests = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .map_err(tracerr::wrap!())?;

        Ok(Report::compute(
            &employees,
            &requests,
            self.calendar(),
            as_of,
        ))
    }
}
