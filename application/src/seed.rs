//! Seed [`Dataset`] loading.

use common::{datetime::parse_date, operations::Insert, DateTime};
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;
use service::{
    domain::{
        employee::{self, Department, Email, Grade, Name},
        leave::{self, Duration, Note, Period, Reason, Status},
        Employee,
    },
    infra::{Database as _, Memory},
};
use time::Date;
use tracerr::Traced;

use crate::{define_error, AsError};

/// Snapshot of [`Employee`]s and their leave [`Request`]s to populate a
/// store with.
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// [`Employee`] records.
    pub employees: Vec<EmployeeRecord>,

    /// Leave [`Request`] records.
    ///
    /// [`Request`]: leave::Request
    pub leaves: Vec<LeaveRecord>,
}

/// Raw [`Employee`] record of a [`Dataset`].
#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeRecord {
    /// ID of the [`Employee`].
    pub id: employee::Id,

    /// Full name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// [`Grade`] label, [`Grade::Junior`] if unknown.
    pub grade: String,

    /// Department label.
    pub department: String,

    /// First day of work, as `YYYY-MM-DD`.
    pub first_day_of_work: String,
}

/// Raw leave [`Request`] record of a [`Dataset`].
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug, Deserialize)]
pub struct LeaveRecord {
    /// ID of the leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    pub id: leave::Id,

    /// ID of the [`Employee`] on leave.
    pub employee_id: employee::Id,

    /// First day of the leave, as `YYYY-MM-DD`.
    pub start: String,

    /// Last day of the leave, as `YYYY-MM-DD`.
    pub end: String,

    /// [`leave::Type`] label, `Vacation` if unknown.
    #[serde(rename = "type")]
    pub kind: String,

    /// [`Duration`] label.
    pub duration: String,

    /// [`Status`] label.
    pub status: String,

    /// Submission day, as `YYYY-MM-DD`.
    pub submitted_at: String,

    /// Optional note of the [`Employee`].
    #[serde(default)]
    pub notes: Option<String>,

    /// Optional [`Reason`] of a rejection.
    #[serde(default)]
    pub reject_reason: Option<String>,
}

/// Error of loading a [`Dataset`].
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// [`Dataset`] file cannot be read or parsed.
    #[display("failed to read `Dataset`: {_0}")]
    Read(config::ConfigError),

    /// Field of a record is invalid.
    #[display("invalid `{field}` of record `{record}`: `{value}`")]
    InvalidField {
        /// ID of the record.
        record: String,

        /// Name of the invalid field.
        field: &'static str,

        /// Invalid value.
        value: String,
    },

    /// Store operation failed.
    #[display("failed to store `Dataset`: {_0}")]
    #[from]
    Db(service::infra::database::Error),
}

impl AsError for Error {
    fn try_as_error(&self) -> Option<crate::Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_DATASET"]
                #[message = "Seed dataset is malformed"]
                InvalidDataset,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Read(_) | Self::InvalidField { .. } => {
                Some(Error::InvalidDataset.into())
            }
        }
    }
}

impl Dataset {
    /// Loads a [`Dataset`] from the TOML file at the provided `path`.
    ///
    /// An empty [`Dataset`] is returned if there is no such file.
    ///
    /// # Errors
    ///
    /// Errors if the file is malformed.
    pub fn load(path: &str) -> Result<Self, Traced<Error>> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(Error::Read)
            .map_err(tracerr::wrap!())
    }

    /// Populates the provided [`Memory`] store with this [`Dataset`].
    ///
    /// Returns the numbers of stored [`Employee`]s and leave [`Request`]s.
    ///
    /// # Errors
    ///
    /// Errors if any record is invalid or the store fails. Records preceding
    /// the invalid one stay stored.
    ///
    /// [`Request`]: leave::Request
    pub fn populate(
        self,
        db: &Memory,
    ) -> Result<(usize, usize), Traced<Error>> {
        let Self { employees, leaves } = self;
        let counts = (employees.len(), leaves.len());

        for record in employees {
            db.execute(Insert(record.parse()?))
                .map_err(tracerr::map_from_and_wrap!(=> Error))?;
        }
        for record in leaves {
            db.execute(Insert(record.parse()?))
                .map_err(tracerr::map_from_and_wrap!(=> Error))?;
        }

        tracing::debug!(
            employees = counts.0,
            leaves = counts.1,
            "store populated",
        );
        Ok(counts)
    }
}

impl EmployeeRecord {
    /// Parses this [`EmployeeRecord`] into an [`Employee`].
    fn parse(self) -> Result<Employee, Traced<Error>> {
        let Self {
            id,
            name,
            email,
            grade,
            department,
            first_day_of_work,
        } = self;
        let invalid = |field, value: &str| {
            tracerr::new!(Error::InvalidField {
                record: id.to_string(),
                field,
                value: value.to_owned(),
            })
        };

        Ok(Employee {
            id,
            name: Name::new(name.as_str())
                .ok_or_else(|| invalid("name", &name))?,
            email: Email::new(email.as_str())
                .ok_or_else(|| invalid("email", &email))?,
            grade: Grade::from_label(&grade),
            department: Department::new(department.as_str())
                .ok_or_else(|| invalid("department", &department))?,
            first_day_of_work: date(&first_day_of_work).ok_or_else(|| {
                invalid("first_day_of_work", &first_day_of_work)
            })?,
        })
    }
}

impl LeaveRecord {
    /// Parses this [`LeaveRecord`] into a leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    fn parse(self) -> Result<leave::Request, Traced<Error>> {
        let Self {
            id,
            employee_id,
            start,
            end,
            kind,
            duration,
            status,
            submitted_at,
            notes,
            reject_reason,
        } = self;
        let invalid = |field, value: &str| {
            tracerr::new!(Error::InvalidField {
                record: id.to_string(),
                field,
                value: value.to_owned(),
            })
        };

        let period = date(&start)
            .zip(date(&end))
            .and_then(|(start, end)| Period::new(start, end))
            .ok_or_else(|| invalid("end", &end))?;
        let submitted_at = date(&submitted_at)
            .ok_or_else(|| invalid("submitted_at", &submitted_at))?;

        Ok(leave::Request {
            id,
            employee_id,
            period,
            kind: leave::Type::from_label(&kind),
            duration: duration
                .parse::<Duration>()
                .map_err(|_| invalid("duration", &duration))?,
            status: status
                .parse::<Status>()
                .map_err(|_| invalid("status", &status))?,
            submitted_at: DateTime::midnight_of(submitted_at).coerce(),
            notes: notes.as_deref().and_then(Note::new),
            reject_reason: reject_reason.as_deref().and_then(Reason::new),
        })
    }
}

/// Parses a `YYYY-MM-DD` [`Date`] of a record.
fn date(value: &str) -> Option<Date> {
    parse_date(value).ok()
}
