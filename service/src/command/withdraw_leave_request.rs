//! [`Command`] for withdrawing a pending leave [`Request`].
//!
//! [`Request`]: leave::Request

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::leave::Status;
use crate::{
    domain::leave,
    infra::{database, Database},
    read::leave::Pending,
    Service,
};

use super::Command;

/// [`Command`] for withdrawing a [`Status::Pending`] leave [`Request`].
///
/// Decided [`Request`]s stay untouched.
///
/// [`Request`]: leave::Request
#[derive(Clone, Copy, Debug)]
pub struct WithdrawLeaveRequest {
    /// ID of the leave [`Request`] to withdraw.
    ///
    /// [`Request`]: leave::Request
    pub leave_id: leave::Id,
}

impl<Db> Command<WithdrawLeaveRequest> for Service<Db>
where
    Db: Database<
        Delete<By<Pending<leave::Request>, leave::Id>>,
        Ok = Option<leave::Request>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = leave::Request;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        WithdrawLeaveRequest { leave_id }: WithdrawLeaveRequest,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let request = self
            .database()
            .execute(Delete(By::<Pending<leave::Request>, _>::new(leave_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LeaveNotExists(leave_id))
            .map_err(tracerr::wrap!())?;
        if !request.is_pending() {
            return Err(tracerr::new!(E::NotWithdrawable {
                leave_id,
                status: request.status,
            }));
        }

        tracing::debug!(%leave_id, "leave `Request` withdrawn");

        Ok(request)
    }
}

/// Error of [`WithdrawLeaveRequest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Leave [`Request`] with the provided ID does not exist.
    ///
    /// [`Request`]: leave::Request
    #[display("`LeaveRequest(id: {_0})` does not exist")]
    LeaveNotExists(#[error(not(source))] leave::Id),

    /// Leave [`Request`] is already decided upon.
    ///
    /// [`Request`]: leave::Request
    #[display("`LeaveRequest(id: {leave_id})` is already `{status}`")]
    NotWithdrawable {
        /// ID of the leave [`Request`].
        ///
        /// [`Request`]: leave::Request
        leave_id: leave::Id,

        /// Current [`Status`] of the leave [`Request`].
        ///
        /// [`Request`]: leave::Request
        status: leave::Status,
    },
}
