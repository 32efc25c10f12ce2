//! [`Command`] definition.

pub mod add_employee;
pub mod submit_leave_request;
pub mod update_leave_status;
pub mod withdraw_leave_request;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_employee::AddEmployee, submit_leave_request::SubmitLeaveRequest,
    update_leave_status::UpdateLeaveStatus,
    withdraw_leave_request::WithdrawLeaveRequest,
};
