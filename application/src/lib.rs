//! Application provides a command line interface to the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod seed;

use std::{fs, io, path::Path};

use service::{
    command::{SubmitLeaveRequest, UpdateLeaveStatus, WithdrawLeaveRequest},
    domain::leave::{Decision, Period},
    query::{
        self, balance::OfEmployee, conflicts::ConflictsOf,
        estimate::BalanceAt, report::analytics::Analytics,
    },
    Command as _,
};
use time::Date;
// Used in binary.
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Memory>;

/// Runs the provided [`args::Command`] against the [`Service`], writing its
/// report to the `out`put.
///
/// # Errors
///
/// Errors if the [`Service`] fails, the referred entity does not exist, or
/// writing the report fails.
pub fn run(
    service: &Service,
    command: args::Command,
    today: Date,
    out: &mut impl io::Write,
) -> Result<(), Error> {
    use args::Command as C;

    match command {
        C::Employees => {
            let employees = service
                .execute(query::employees::All::by(()))
                .map_err(AsError::into_error)?;
            report::employees(out, &employees)
        }
        C::Balance { employee } => {
            let found = service
                .execute(query::employee::ById::by(employee))
                .map_err(AsError::into_error)?;
            let balance = service
                .execute(OfEmployee {
                    employee_id: employee,
                    as_of: today,
                })
                .map_err(AsError::into_error)?;
            report::balance(out, found.as_ref(), &balance, today)
        }
        C::Leaves { employee } => {
            let leaves = service
                .execute(query::leaves::ByEmployee::by(employee))
                .map_err(AsError::into_error)?;
            report::leaves(out, &leaves)
        }
        C::Pending => {
            let leaves = service
                .execute(query::leaves::pending())
                .map_err(AsError::into_error)?;
            report::leaves(out, &leaves)
        }
        C::Conflicts { leave } => {
            let conflicts = service
                .execute(ConflictsOf { leave_id: leave })
                .map_err(AsError::into_error)?
                .ok_or_else(|| Error::from(Failure::Leave))?;
            report::conflicts(out, &conflicts)
        }
        C::Estimate { employee, date } => {
            let estimate = service
                .execute(BalanceAt {
                    employee_id: employee,
                    target: date,
                    today,
                })
                .map_err(AsError::into_error)?
                .ok_or_else(|| Error::from(Failure::Estimate))?;
            report::estimate(out, &estimate)
        }
        C::Analytics => {
            let report = service
                .execute(Analytics { as_of: today })
                .map_err(AsError::into_error)?;
            report::analytics(out, &report)
        }
        C::Submit {
            employee,
            start,
            end,
            kind,
            duration,
            notes,
        } => {
            let period = Period::new(start, end)
                .ok_or_else(|| Error::from(Failure::Period))?;
            let submitted = service
                .execute(SubmitLeaveRequest {
                    employee_id: employee,
                    period,
                    kind,
                    duration,
                    notes,
                })
                .map_err(AsError::into_error)?;
            report::admission(out, &submitted.request, &submitted.admission)
        }
        C::Approve { leave } => {
            let decided = service
                .execute(UpdateLeaveStatus {
                    leave_id: leave,
                    decision: Decision::Approve,
                })
                .map_err(AsError::into_error)?;
            report::leaves(out, &[decided])
        }
        C::Reject { leave, reason } => {
            let decided = service
                .execute(UpdateLeaveStatus {
                    leave_id: leave,
                    decision: Decision::Reject(reason),
                })
                .map_err(AsError::into_error)?;
            report::leaves(out, &[decided])
        }
        C::Withdraw { leave } => {
            let withdrawn = service
                .execute(WithdrawLeaveRequest { leave_id: leave })
                .map_err(AsError::into_error)?;
            report::leaves(out, &[withdrawn])
        }
        C::Export { output } => {
            let csv = service
                .execute(query::report::Export)
                .map_err(AsError::into_error)?;
            match output {
                Some(path) => export_to(&path, &csv, today),
                None => writeln!(out, "{csv}"),
            }
        }
    }
    .map_err(AsError::into_error)
}

/// Writes the `csv` to the file at the provided `path`.
///
/// Directories get a file named after the `today` [`Date`].
fn export_to(path: &Path, csv: &str, today: Date) -> io::Result<()> {
    let file = if path.is_dir() {
        path.join(query::report::export::default_filename(today))
    } else {
        path.to_owned()
    };
    fs::write(&file, csv)?;
    tracing::info!(file = %file.display(), "leave data exported");
    Ok(())
}

crate::define_error! {
    enum Failure {
        #[code = "LEAVE_NOT_EXISTS"]
        #[message = "Leave request with the provided ID does not exist"]
        Leave,

        #[code = "NO_ESTIMATE"]
        #[message = "Employee does not exist or the date is not in the \
                     future"]
        Estimate,

        #[code = "INVALID_PERIOD"]
        #[message = "Leave cannot end before it starts"]
        Period,
    }
}
