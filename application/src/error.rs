//! [`Error`]-related definitions.

use std::{fmt, io};

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{command, infra::database};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Command line [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for io::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for command::submit_leave_request::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[message = "`Employee` with the provided ID does not exist"]
                EmployeeNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => {
                Some(Error::EmployeeNotExists.into())
            }
        }
    }
}

impl AsError for command::update_leave_status::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LEAVE_ALREADY_DECIDED"]
                #[message = "Leave request is already approved or rejected"]
                AlreadyDecided,

                #[code = "LEAVE_NOT_EXISTS"]
                #[message = "Leave request with the provided ID does not \
                             exist"]
                LeaveNotExists,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::AlreadyDecided { .. } => Error::AlreadyDecided.into(),
            Self::LeaveNotExists(_) => Error::LeaveNotExists.into(),
        })
    }
}

impl AsError for command::withdraw_leave_request::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LEAVE_NOT_EXISTS"]
                #[message = "Leave request with the provided ID does not \
                             exist"]
                LeaveNotExists,

                #[code = "LEAVE_NOT_WITHDRAWABLE"]
                #[message = "Only pending leave requests can be withdrawn"]
                NotWithdrawable,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::LeaveNotExists(_) => Error::LeaveNotExists.into(),
            Self::NotWithdrawable { .. } => Error::NotWithdrawable.into(),
        })
    }
}
