//! Leave [`Request`] read model definitions.
//!
//! [`Request`]: crate::domain::leave::Request

#[cfg(doc)]
use crate::domain::leave::{Request, Status};

/// Wrapper around a [`Request`] indicating that it is
/// [`Status::Pending`].
#[derive(Clone, Copy, Debug)]
pub struct Pending<T>(pub T);
