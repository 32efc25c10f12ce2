//! [`Query`] for the [`Admission`] of a leave [`Draft`].

use common::operations::{By, Select};
use time::Date;
use tracerr::Traced;

use crate::{
    domain::{employee, leave, Employee},
    infra::{database, Database},
    read::{admission::Draft, Admission},
    Query, Service,
};

/// [`Query`] checking a leave [`Draft`] against the admission rules as of
/// some [`Date`], before submitting it.
///
/// [`None`] is returned for unknown [`Employee`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckAdmission {
    /// [`Draft`] to check.
    pub draft: Draft,

    /// [`Date`] the remaining balance is computed as of.
    pub as_of: Date,
}

impl<Db> Query<CheckAdmission> for Service<Db>
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
    type Ok = Option<Admission>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        CheckAdmission { draft, as_of }: CheckAdmission,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(employee) = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(draft.employee_id)))
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let history = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(employee.id)))
            .map_err(tracerr::wrap!())?;

        Ok(Some(Admission::check(
            &employee,
            &history,
            self.calendar(),
            &draft,
            as_of,
        )))
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
        read::admission::Draft,
        Config, Query as _, Service,
    };

    use super::CheckAdmission;

    #[test]
    fn reports_shortage_and_overlap() {
        let db = Memory::new();
        // Junior, under 3 years of service: 15 days.
        let tom = Employee {
            id: employee::Id::new(),
            name: Name::new("Tom Brown").unwrap(),
            email: Email::new("tom.brown@company.com").unwrap(),
            grade: Grade::Junior,
            department: Department::new("Sales").unwrap(),
            first_day_of_work: date!(2025 - 01 - 06),
        };
        db.execute(Insert(tom.clone())).unwrap();
        // Two full working weeks: 10 days.
        db.execute(Insert(leave::Request {
            id: leave::Id::new(),
            employee_id: tom.id,
            period: Period::new(date!(2026 - 03 - 02), date!(2026 - 03 - 13))
                .unwrap(),
            kind: Type::Vacation,
            duration: Duration::FullDay,
            status: Status::Approved,
            submitted_at: DateTime::midnight_of(date!(2026 - 02 - 01)).coerce(),
            notes: None,
            reject_reason: None,
        }))
        .unwrap();
        let svc = Service::new(Config::default(), db);

        let admission = svc
            .execute(CheckAdmission {
                draft: Draft {
                    employee_id: tom.id,
                    // Monday to next Tuesday: 7 days.
                    period: Period::new(
                        date!(2026 - 03 - 09),
                        date!(2026 - 03 - 17),
                    )
                    .unwrap(),
                    kind: Type::Personal,
                    duration: Duration::FullDay,
                },
                as_of: date!(2026 - 03 - 01),
            })
            .unwrap()
            .unwrap();

        assert_eq!(admission.requested, Days::whole(7));
        assert_eq!(
            admission.projected_remaining,
            Days::ZERO - Days::whole(2),
        );
        assert!(!admission.sufficient_balance);
        assert!(admission.overlapping);
        assert!(!admission.is_clear());
    }

    #[test]
    fn none_for_unknown_employee() {
        let svc = Service::new(Config::default(), Memory::new());

        let admission = svc
            .execute(CheckAdmission {
                draft: Draft {
                    employee_id: employee::Id::new(),
                    period: Period::day(date!(2026 - 03 - 02)),
                    kind: Type::Vacation,
                    duration: Duration::FullDay,
                },
                as_of: date!(2026 - 03 - 01),
            })
            .unwrap();

        assert_eq!(admission, None);
    }
}
