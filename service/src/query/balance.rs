//! [`Query`] for the leave [`Balance`] of an [`Employee`].

use common::operations::{By, Select};
use time::Date;
use tracerr::Traced;

use crate::{
    domain::{employee, leave, Employee},
    infra::{database, Database},
    read::Balance,
    Query, Service,
};

/// [`Query`] for the leave [`Balance`] of an [`Employee`] as of some
/// [`Date`].
///
/// Unknown [`Employee`]s have the [`Balance::EMPTY`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OfEmployee {
    /// ID of the [`Employee`].
    pub employee_id: employee::Id,

    /// [`Date`] the [`Balance`] is computed as of.
    pub as_of: Date,
}

impl OfEmployee {
    /// Creates a new [`OfEmployee`] [`Query`] as of today.
    #[must_use]
    pub fn today(employee_id: employee::Id) -> Self {
        Self {
            employee_id,
            as_of: common::today(),
        }
    }
}

impl<Db> Query<OfEmployee> for Service<Db>
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
    type Ok = Balance;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        OfEmployee { employee_id, as_of }: OfEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(employee) = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .map_err(tracerr::wrap!())?
        else {
            tracing::debug!(%employee_id, "no `Employee` to compute balance");
            return Ok(Balance::EMPTY);
        };

        let history = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(employee_id)))
            .map_err(tracerr::wrap!())?;

        Ok(Balance::compute(&employee, &history, self.calendar(), as_of))
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, DateTime, Days};
    use time::macros::date;

    use crate::{
        domain::{
            employee::{self, Department, Email, Grade, Name},
            leave::{self, Duration, Period, Status, Type},
            Employee,
        },
        infra::{Database as _, Memory},
        read::Balance,
        Config, Query as _, Service,
    };

    use super::OfEmployee;

    #[test]
    fn counts_only_own_approved_leave() {
        let db = Memory::new();
        let sarah = Employee {
            id: employee::Id::new(),
            name: Name::new("Sarah Chen").unwrap(),
            email: Email::new("sarah.chen@company.com").unwrap(),
            grade: Grade::Senior,
            department: Department::new("Engineering").unwrap(),
            first_day_of_work: date!(2014 - 03 - 15),
        };
        db.execute(Insert(sarah.clone())).unwrap();
        for (kind, status) in [
            (Type::Vacation, Status::Approved),
            (Type::SickLeave, Status::Approved),
            (Type::Personal, Status::Pending),
        ] {
            db.execute(Insert(leave::Request {
                id: leave::Id::new(),
                employee_id: sarah.id,
                // Monday to Wednesday, no holidays.
                period: Period::new(
                    date!(2026 - 03 - 02),
                    date!(2026 - 03 - 04),
                )
                .unwrap(),
                kind,
                duration: Duration::FullDay,
                status,
                submitted_at: DateTime::midnight_of(date!(2026 - 02 - 01))
                    .coerce(),
                notes: None,
                reject_reason: None,
            }))
            .unwrap();
        }
        let svc = Service::new(Config::default(), db);

        let balance = svc
            .execute(OfEmployee {
                employee_id: sarah.id,
                as_of: date!(2026 - 06 - 01),
            })
            .unwrap();

        assert_eq!(
            balance,
            Balance {
                annual_entitlement: Days::whole(26),
                annual_used: Days::whole(3),
                annual_remaining: Days::whole(23),
                non_annual_used: Days::whole(3),
            },
        );
    }

    #[test]
    fn empty_for_unknown_employee() {
        let svc = Service::new(Config::default(), Memory::new());

        let balance = svc
            .execute(OfEmployee::today(employee::Id::new()))
            .unwrap();

        assert_eq!(balance, Balance::EMPTY);
    }
}
