//! [`Conflicts`] read model definition.

use crate::domain::{leave, Employee};

/// Approved leave of another [`Employee`] overlapping an inspected leave
/// [`Request`].
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// [`Employee`] being on leave.
    pub employee: Employee,

    /// Overlapping approved leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    pub request: leave::Request,
}

/// Approved leaves of other [`Employee`]s overlapping an inspected leave
/// [`Request`].
///
/// Advisory only, nothing prevents overlapping leaves of different
/// [`Employee`]s.
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Conflicts {
    /// [`Conflict`]s within the same department, ordered by
    /// [`Employee`] name.
    pub same_department: Vec<Conflict>,

    /// [`Conflict`]s within other departments, ordered by [`Employee`]
    /// name.
    pub other_departments: Vec<Conflict>,
}

impl Conflicts {
    /// Finds [`Conflicts`] of the inspected leave [`Request`] among the
    /// provided `requests`.
    ///
    /// Leave [`Request`]s of unknown [`Employee`]s are skipped.
    ///
    /// [`Request`]: leave::Request
    #[must_use]
    pub fn find(
        inspected: &leave::Request,
        employees: &[Employee],
        requests: &[leave::Request],
    ) -> Self {
        let department = employees
            .iter()
            .find(|e| e.id == inspected.employee_id)
            .map(|e| &e.department);

        let mut found = Self::default();
        for req in requests.iter().filter(|r| {
            r.employee_id != inspected.employee_id
                && r.is_approved()
                && r.period.overlaps(&inspected.period)
        }) {
            let Some(employee) =
                employees.iter().find(|e| e.id == req.employee_id)
            else {
                continue;
            };

            let conflict = Conflict {
                employee: employee.clone(),
                request: req.clone(),
            };
            if Some(&employee.department) == department {
                found.same_department.push(conflict);
            } else {
                found.other_departments.push(conflict);
            }
        }

        found
            .same_department
            .sort_by(|a, b| a.employee.name.cmp(&b.employee.name));
        found
            .other_departments
            .sort_by(|a, b| a.employee.name.cmp(&b.employee.name));
        found
    }

    /// Iterates over all the [`Conflict`]s, the same department ones first.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.same_department.iter().chain(&self.other_departments)
    }

    /// Returns the total number of [`Conflict`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.same_department.len() + self.other_departments.len()
    }

    /// Indicates whether there are no [`Conflict`]s at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use time::{macros::date, Date};

    use crate::domain::{
        employee::{self, Department, Email, Grade, Name},
        leave::{self, Duration, Period, Status, Type},
        Employee,
    };

    use super::Conflicts;

    fn employee(name: &str, department: &str) -> Employee {
        Employee {
            id: employee::Id::new(),
            name: Name::new(name).unwrap(),
            email: Email::new("someone@company.com").unwrap(),
            grade: Grade::Mid,
            department: Department::new(department).unwrap(),
            first_day_of_work: date!(2022 - 04 - 01),
        }
    }

    fn leave(
        employee: &Employee,
        start: Date,
        end: Date,
        status: Status,
    ) -> leave::Request {
        leave::Request {
            id: leave::Id::new(),
            employee_id: employee.id,
            period: Period::new(start, end).unwrap(),
            kind: Type::Vacation,
            duration: Duration::FullDay,
            status,
            submitted_at: DateTime::midnight_of(start).coerce(),
            notes: None,
            reject_reason: None,
        }
    }

    #[test]
    fn orders_same_department_first_then_by_name() {
        let requester = employee("Mike Johnson", "Engineering");
        let zoe = employee("Zoe Lam", "Engineering");
        let anna = employee("Anna Wong", "Sales");
        let ben = employee("Ben Ho", "Engineering");
        let employees =
            [requester.clone(), zoe.clone(), anna.clone(), ben.clone()];

        let inspected = leave(
            &requester,
            date!(2026 - 03 - 09),
            date!(2026 - 03 - 13),
            Status::Pending,
        );
        let approved = |e: &Employee, start: Date, end: Date| {
            leave(e, start, end, Status::Approved)
        };
        let requests = [
            inspected.clone(),
            approved(&zoe, date!(2026 - 03 - 13), date!(2026 - 03 - 16)),
            approved(&anna, date!(2026 - 03 - 02), date!(2026 - 03 - 09)),
            approved(&ben, date!(2026 - 03 - 10), date!(2026 - 03 - 10)),
            approved(&ben, date!(2026 - 03 - 16), date!(2026 - 03 - 20)),
            leave(
                &anna,
                date!(2026 - 03 - 11),
                date!(2026 - 03 - 11),
                Status::Pending,
            ),
            approved(&requester, date!(2026 - 03 - 09), date!(2026 - 03 - 09)),
        ];

        let conflicts = Conflicts::find(&inspected, &employees, &requests);

        let names = conflicts
            .iter()
            .map(|c| c.employee.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Ben Ho", "Zoe Lam", "Anna Wong"]);
        assert_eq!(conflicts.same_department.len(), 2);
        assert_eq!(conflicts.other_departments.len(), 1);
        assert_eq!(conflicts.len(), 3);
    }

    #[test]
    fn skips_unknown_employees() {
        let requester = employee("Mike Johnson", "Engineering");
        let ghost = employee("Ghost", "Engineering");
        let inspected = leave(
            &requester,
            date!(2026 - 03 - 09),
            date!(2026 - 03 - 13),
            Status::Pending,
        );
        let requests = [leave(
            &ghost,
            date!(2026 - 03 - 10),
            date!(2026 - 03 - 10),
            Status::Approved,
        )];

        let conflicts = Conflicts::find(&inspected, &[requester], &requests);

        assert!(conflicts.is_empty());
    }
}
