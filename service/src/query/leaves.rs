//! [`Query`] collection related to the multiple leave [`Request`]s.
//!
//! [`Request`]: leave::Request

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Employee, Query};
use crate::domain::{employee, leave};

use super::DatabaseQuery;

/// Queries all the leave [`Request`]s of an [`Employee`].
///
/// [`Request`]: leave::Request
pub type ByEmployee = DatabaseQuery<By<Vec<leave::Request>, employee::Id>>;

/// Queries all the leave [`Request`]s having a [`leave::Status`].
///
/// [`Request`]: leave::Request
pub type ByStatus = DatabaseQuery<By<Vec<leave::Request>, leave::Status>>;

/// Queries all the leave [`Request`]s in their submission order.
///
/// [`Request`]: leave::Request
pub type All = DatabaseQuery<By<Vec<leave::Request>, ()>>;

/// Creates a [`ByStatus`] [`Query`] of the approval queue.
#[must_use]
pub fn pending() -> ByStatus {
    ByStatus::by(leave::Status::Pending)
}
