//! [`Employee`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{employee, Employee},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Insert<Employee>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Insert(employee): Insert<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        tracing::debug!(
            employee_id = %employee.id,
            name = %employee.name,
            "storing `Employee`",
        );
        let mut state = self.write().map_err(tracerr::wrap!())?;
        super::upsert(&mut state.employees, employee, |e| e.id);
        Ok(())
    }
}

impl Database<Select<By<Option<Employee>, employee::Id>>> for Memory {
    type Ok = Option<Employee>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Employee>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::wrap!())?
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }
}

impl Database<Select<By<Vec<Employee>, ()>>> for Memory {
    type Ok = Vec<Employee>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Vec<Employee>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read().map_err(tracerr::wrap!())?.employees.clone())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select};
    use time::macros::date;

    use crate::{
        domain::{
            employee::{self, Department, Email, Grade, Name},
            Employee,
        },
        infra::{Database as _, Memory},
    };

    fn employee(name: &str) -> Employee {
        Employee {
            id: employee::Id::new(),
            name: Name::new(name).unwrap(),
            email: Email::new("lisa.wang@company.com").unwrap(),
            grade: Grade::Executive,
            department: Department::new("Operations").unwrap(),
            first_day_of_work: date!(2012 - 05 - 14),
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let db = Memory::new();
        let (lisa, tom) = (employee("Lisa Wang"), employee("Tom Brown"));

        db.execute(Insert(lisa.clone())).unwrap();
        db.execute(Insert(tom.clone())).unwrap();

        assert_eq!(
            db.execute(Select(By::<Vec<Employee>, _>::new(()))).unwrap(),
            [lisa.clone(), tom],
        );
        assert_eq!(
            db.execute(Select(By::<Option<Employee>, _>::new(lisa.id)))
                .unwrap(),
            Some(lisa),
        );
        assert_eq!(
            db.execute(Select(By::<Option<Employee>, _>::new(
                employee::Id::new()
            )))
            .unwrap(),
            None,
        );
    }

    #[test]
    fn clones_share_state() {
        let db = Memory::new();
        let lisa = employee("Lisa Wang");

        db.clone().execute(Insert(lisa.clone())).unwrap();

        assert_eq!(
            db.execute(Select(By::<Option<Employee>, _>::new(lisa.id)))
                .unwrap(),
            Some(lisa),
        );
    }
}
