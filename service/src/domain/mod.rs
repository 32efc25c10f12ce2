//! Domain definitions.

pub mod employee;
pub mod holiday;
pub mod leave;

pub use self::{employee::Employee, holiday::PublicHoliday};
