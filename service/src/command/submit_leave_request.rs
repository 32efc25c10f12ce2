//! [`Command`] for submitting a new leave [`Request`].
//!
//! [`Request`]: leave::Request

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::leave::{Duration, Note, Period, Status, Type};
use crate::{
    domain::{employee, leave, Employee},
    infra::{database, Database},
    read::{admission::Draft, Admission},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new leave [`Request`].
///
/// The submitted [`Request`] is always stored as [`Status::Pending`]: the
/// returned [`Admission`] only advises about a shortage or an overlap.
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug)]
pub struct SubmitLeaveRequest {
    /// ID of the [`Employee`] requesting the leave.
    pub employee_id: employee::Id,

    /// [`Period`] of the leave.
    pub period: leave::Period,

    /// [`Type`] of the leave.
    pub kind: leave::Type,

    /// [`Duration`] shape of the leave.
    pub duration: leave::Duration,

    /// Optional [`Note`] of the [`Employee`].
    pub notes: Option<leave::Note>,
}

/// Output of [`SubmitLeaveRequest`] [`Command`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Stored leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    pub request: leave::Request,

    /// [`Admission`] of the [`Request`] at the moment of its submission.
    ///
    /// [`Request`]: leave::Request
    pub admission: Admission,
}

impl<Db> Command<SubmitLeaveRequest> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<leave::Request>, employee::Id>>,
            Ok = Vec<leave::Request>,
            Err = Traced<database::Error>,
        > + Database<Insert<leave::Request>, Err = Traced<database::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        cmd: SubmitLeaveRequest,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitLeaveRequest {
            employee_id,
            period,
            kind,
            duration,
            notes,
        } = cmd;

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        let history = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(employee.id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let submitted_at: leave::SubmissionDateTime = DateTime::now().coerce();
        let admission = Admission::check(
            &employee,
            &history,
            self.calendar(),
            &Draft {
                employee_id,
                period,
                kind,
                duration,
            },
            submitted_at.date(),
        );
        if !admission.is_clear() {
            tracing::info!(
                %employee_id,
                %period,
                sufficient_balance = admission.sufficient_balance,
                overlapping = admission.overlapping,
                "submitting leave `Request` violating admission rules",
            );
        }

        let request = leave::Request {
            id: leave::Id::new(),
            employee_id,
            period,
            kind,
            duration,
            status: leave::Status::Pending,
            submitted_at,
            notes,
            reject_reason: None,
        };

        self.database()
            .execute(Insert(request.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(Output { request, admission })
    }
}

/// Error of [`SubmitLeaveRequest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}
