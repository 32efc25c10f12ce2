//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::datetime::parse_date;
use service::domain::{employee, leave};
use time::Date;

/// Leave accounting of the employees.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run against the seeded store.
#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Lists all the employees.
    Employees,

    /// Prints the leave balance of an employee.
    Balance {
        /// ID of the employee.
        employee: employee::Id,
    },

    /// Lists the leave requests of an employee.
    Leaves {
        /// ID of the employee.
        employee: employee::Id,
    },

    /// Lists the leave requests awaiting a decision.
    Pending,

    /// Lists approved leaves of other employees overlapping a leave request.
    Conflicts {
        /// ID of the leave request.
        leave: leave::Id,
    },

    /// Estimates the annual leave balance of an employee at a future date.
    Estimate {
        /// ID of the employee.
        employee: employee::Id,

        /// Date to estimate the balance at, as `YYYY-MM-DD`.
        #[arg(value_parser = parse_date)]
        date: Date,
    },

    /// Prints the leave analytics over all the employees.
    Analytics,

    /// Submits a leave request and prints its admission.
    Submit {
        /// ID of the employee requesting the leave.
        employee: employee::Id,

        /// First day of the leave, as `YYYY-MM-DD`.
        #[arg(value_parser = parse_date)]
        start: Date,

        /// Last day of the leave, as `YYYY-MM-DD`.
        #[arg(value_parser = parse_date)]
        end: Date,

        /// Type of the leave.
        #[arg(short, long, default_value = "Vacation")]
        kind: leave::Type,

        /// Duration of every day of the leave.
        #[arg(short, long, default_value = "Full Day")]
        duration: leave::Duration,

        /// Note of the employee.
        #[arg(short, long)]
        notes: Option<leave::Note>,
    },

    /// Approves a pending leave request.
    Approve {
        /// ID of the leave request.
        leave: leave::Id,
    },

    /// Rejects a pending leave request.
    Reject {
        /// ID of the leave request.
        leave: leave::Id,

        /// Reason of the rejection.
        #[arg(short, long)]
        reason: Option<leave::Reason>,
    },

    /// Withdraws a pending leave request.
    Withdraw {
        /// ID of the leave request.
        leave: leave::Id,
    },

    /// Exports all the leave requests as CSV.
    Export {
        /// File or directory to write the CSV to, instead of the standard
        /// output.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
