//! [`Command`] for adding a new [`Employee`].

use common::operations::Insert;
use time::Date;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::employee::{Department, Email, Grade, Name};
use crate::{
    domain::{employee, Employee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Employee`].
#[derive(Clone, Debug)]
pub struct AddEmployee {
    /// [`Name`] of a new [`Employee`].
    pub name: employee::Name,

    /// [`Email`] of a new [`Employee`].
    pub email: employee::Email,

    /// [`Grade`] of a new [`Employee`].
    pub grade: employee::Grade,

    /// [`Department`] of a new [`Employee`].
    pub department: employee::Department,

    /// First day a new [`Employee`] worked.
    pub first_day_of_work: Date,
}

impl<Db> Command<AddEmployee> for Service<Db>
where
    Db: Database<Insert<Employee>, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: AddEmployee) -> Result<Self::Ok, Self::Err> {
        let AddEmployee {
            name,
            email,
            grade,
            department,
            first_day_of_work,
        } = cmd;

        let employee = Employee {
            id: employee::Id::new(),
            name,
            email,
            grade,
            department,
            first_day_of_work,
        };

        self.database()
            .execute(Insert(employee.clone()))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(employee)
    }
}

/// Error of [`AddEmployee`] [`Command`] execution.
pub type ExecutionError = database::Error;
