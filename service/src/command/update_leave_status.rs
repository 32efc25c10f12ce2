//! [`Command`] for deciding upon a pending leave [`Request`].
//!
//! [`Request`]: leave::Request

use common::operations::{By, Modify};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::leave::{Reason, Status};
use crate::{
    domain::leave::{self, Decision},
    infra::{database, Database},
    Service,
};

use super::Command;

/// Modification applying a [`Decision`] to a leave [`Request`].
///
/// [`Request`]: leave::Request
type Decide = Box<dyn FnOnce(&mut leave::Request) -> Decided>;

/// Outcome of a [`Decide`] modification.
type Decided = Result<leave::Request, leave::Status>;

/// [`Command`] for deciding upon a [`Status::Pending`] leave [`Request`].
///
/// A [`Reason`] is only kept for rejections.
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug)]
pub struct UpdateLeaveStatus {
    /// ID of the leave [`Request`] to decide upon.
    ///
    /// [`Request`]: leave::Request
    pub leave_id: leave::Id,

    /// [`Decision`] upon the leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    pub decision: Decision,
}

impl<Db> Command<UpdateLeaveStatus> for Service<Db>
where
    Db: Database<
        Modify<By<leave::Request, leave::Id>, Decide>,
        Ok = Option<Decided>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = leave::Request;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        cmd: UpdateLeaveStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateLeaveStatus { leave_id, decision } = cmd;
        let status = decision.status();

        let decide: Decide = Box::new(move |req: &mut leave::Request| {
            req.decide(decision).map(|()| req.clone())
        });
        let request = self
            .database()
            .execute(Modify(By::new(leave_id), decide))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LeaveNotExists(leave_id))
            .map_err(tracerr::wrap!())?
            .map_err(|current| E::AlreadyDecided {
                leave_id,
                status: current,
            })
            .map_err(tracerr::wrap!())?;

        tracing::debug!(%leave_id, %status, "leave `Request` decided");

        Ok(request)
    }
}

/// Error of [`UpdateLeaveStatus`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Leave [`Request`] is not [`Status::Pending`] anymore.
    ///
    /// [`Request`]: leave::Request
    #[display("`LeaveRequest(id: {leave_id})` is already `{status}`")]
    AlreadyDecided {
        /// ID of the leave [`Request`].
        ///
        /// [`Request`]: leave::Request
        leave_id: leave::Id,

        /// Current [`Status`] of the leave [`Request`].
        ///
        /// [`Request`]: leave::Request
        status: leave::Status,
    },

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Leave [`Request`] with the provided ID does not exist.
    ///
    /// [`Request`]: leave::Request
    #[display("`LeaveRequest(id: {_0})` does not exist")]
    LeaveNotExists(#[error(not(source))] leave::Id),
}
