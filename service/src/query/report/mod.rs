//! Report [`Query`] collection.
//!
//! [`Query`]: crate::Query

pub mod analytics;
pub mod export;

pub use self::{analytics::Analytics, export::Export};
