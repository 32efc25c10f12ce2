//! [`Query`] collection related to the multiple [`Employee`]s.

use common::operations::By;

use crate::domain::Employee;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Employee`]s in their insertion order.
pub type All = DatabaseQuery<By<Vec<Employee>, ()>>;
