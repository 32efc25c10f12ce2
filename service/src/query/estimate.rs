//! [`Query`] for the [`Estimate`] of a future leave balance.

use common::operations::{By, Select};
use time::Date;
use tracerr::Traced;

use crate::{
    domain::{employee, leave, Employee},
    infra::{database, Database},
    read::Estimate,
    Query, Service,
};

/// [`Query`] estimating the annual leave balance of an [`Employee`] at a
/// `target` [`Date`].
///
/// [`None`] is returned for unknown [`Employee`]s, or when the `target` does
/// not follow `today`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BalanceAt {
    /// ID of the [`Employee`].
    pub employee_id: employee::Id,

    /// [`Date`] to estimate the balance at.
    pub target: Date,

    /// [`Date`] considered as today.
    pub today: Date,
}

impl BalanceAt {
    /// Creates a new [`BalanceAt`] [`Query`] estimating from today.
    #[must_use]
    pub fn from_today(employee_id: employee::Id, target: Date) -> Self {
        Self {
            employee_id,
            target,
            today: common::today(),
        }
    }
}

impl<Db> Query<BalanceAt> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<leave::Request>, employee::Id>>,
            Ok = Vec<leave::Request>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<Estimate>;
    type Err = Traced<database::Error>;

    fn execute(&self, query: BalanceAt) -> Result<Self::Ok, Self::Err> {
        let BalanceAt {
            employee_id,
            target,
            today,
        } = query;

        let Some(employee) = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let history = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(employee_id)))
            .map_err(tracerr::wrap!())?;

        Ok(Estimate::compute(
            &employee,
            &history,
            self.calendar(),
            target,
            today,
        ))
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, Days};
    use time::macros::date;

    use crate::{
        domain::{
            employee::{self, Department, Email, Grade, Name},
            Employee,
        },
        infra::{Database as _, Memory},
        Config, Query as _, Service,
    };

    use super::BalanceAt;

    #[test]
    fn lists_holidays_up_to_target() {
        let db = Memory::new();
        let emily = Employee {
            id: employee::Id::new(),
            name: Name::new("Emily Davis").unwrap(),
            email: Email::new("emily.davis@company.com").unwrap(),
            grade: Grade::Executive,
            department: Department::new("Marketing").unwrap(),
            first_day_of_work: date!(2019 - 02 - 11),
        };
        db.execute(Insert(emily.clone())).unwrap();
        let svc = Service::new(Config::default(), db);

        let estimate = svc
            .execute(BalanceAt {
                employee_id: emily.id,
                target: date!(2027 - 01 - 05),
                today: date!(2026 - 12 - 01),
            })
            .unwrap()
            .unwrap();

        // 7 years of service at the target: 25 + 4.
        assert_eq!(estimate.balance, Days::whole(29));
        assert_eq!(
            estimate
                .holidays
                .iter()
                .map(|h| h.date)
                .collect::<Vec<_>>(),
            [
                date!(2026 - 12 - 25),
                date!(2026 - 12 - 26),
                date!(2027 - 01 - 01),
            ],
        );
    }

    #[test]
    fn none_for_unknown_employee() {
        let svc = Service::new(Config::default(), Memory::new());

        let estimate = svc
            .execute(BalanceAt::from_today(
                employee::Id::new(),
                date!(2999 - 01 - 01),
            ))
            .unwrap();

        assert_eq!(estimate, None);
    }
}
