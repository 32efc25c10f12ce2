//! [`Query`] collection related to a single leave [`Request`].
//!
//! [`Request`]: leave::Request

use common::operations::By;

use crate::domain::leave;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a leave [`Request`] by its [`leave::Id`].
///
/// [`Request`]: leave::Request
pub type ById = DatabaseQuery<By<Option<leave::Request>, leave::Id>>;
