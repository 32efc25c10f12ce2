//! Read entities definitions.

pub mod admission;
pub mod balance;
pub mod conflict;
pub mod estimate;
pub mod leave;

pub use self::{
    admission::Admission, balance::Balance, conflict::Conflicts,
    estimate::Estimate,
};
