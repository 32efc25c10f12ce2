//! Leave [`Request`] definitions.

pub mod quantity;

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::domain::employee;
#[cfg(doc)]
use crate::domain::Employee;

pub use self::quantity::leave_days;

/// Leave request of an [`Employee`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Request {
    /// ID of this [`Request`].
    pub id: Id,

    /// ID of the [`Employee`] requesting the leave.
    pub employee_id: employee::Id,

    /// [`Period`] of the leave.
    pub period: Period,

    /// [`Type`] of the leave.
    pub kind: Type,

    /// [`Duration`] shape of every day in the [`Period`].
    pub duration: Duration,

    /// [`Status`] of this [`Request`].
    pub status: Status,

    /// [`DateTime`] when this [`Request`] was submitted.
    ///
    /// [`DateTime`]: common::DateTime
    #[cfg_attr(
        feature = "serde",
        serde(with = "common::datetime::serde::rfc3339")
    )]
    pub submitted_at: SubmissionDateTime,

    /// Optional [`Note`] left by the requesting [`Employee`].
    pub notes: Option<Note>,

    /// [`Reason`] of the rejection.
    ///
    /// Only present if this [`Request`] is [`Status::Rejected`].
    pub reject_reason: Option<Reason>,
}

impl Request {
    /// Returns the [`Category`] of this [`Request`]'s [`Type`].
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Indicates whether this [`Request`] is [`Status::Approved`].
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }

    /// Indicates whether this [`Request`] is still awaiting a [`Decision`].
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Applies the provided [`Decision`] to this [`Request`].
    ///
    /// A [`Reason`] is only kept for rejections.
    ///
    /// # Errors
    ///
    /// Returns the current [`Status`] if this [`Request`] is already decided.
    pub fn decide(&mut self, decision: Decision) -> Result<(), Status> {
        if !self.is_pending() {
            return Err(self.status);
        }
        match decision {
            Decision::Approve => {
                self.status = Status::Approved;
                self.reject_reason = None;
            }
            Decision::Reject(reason) => {
                self.status = Status::Rejected;
                self.reject_reason = reason;
            }
        }
        Ok(())
    }
}

/// ID of a [`Request`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Inclusive range of calendar days covered by a [`Request`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[display("{start}..={end}")]
pub struct Period {
    /// First day of this [`Period`].
    #[cfg_attr(
        feature = "serde",
        serde(with = "common::datetime::serde::date")
    )]
    start: Date,

    /// Last day of this [`Period`].
    #[cfg_attr(
        feature = "serde",
        serde(with = "common::datetime::serde::date")
    )]
    end: Date,
}

impl Period {
    /// Creates a new [`Period`] if the `start` doesn't follow the `end`.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates a new [`Period`] of a single day.
    #[must_use]
    pub const fn day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day of this [`Period`].
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of this [`Period`].
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Indicates whether this [`Period`] shares at least one day with the
    /// `other` one.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Indicates whether this [`Period`] spans more than a single day.
    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        self.start < self.end
    }
}

/// Free-text note attached to a [`Request`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Note(String);

impl Note {
    /// Creates a new [`Note`] if the given `text` is not blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        (!text.is_empty() && text.len() <= 2048).then(|| Self(text.into()))
    }
}

impl FromStr for Note {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Note`")
    }
}

/// Reason of a [`Request`] rejection.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Reason(String);

impl Reason {
    /// Creates a new [`Reason`] if the given `text` is not blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        (!text.is_empty() && text.len() <= 2048).then(|| Self(text.into()))
    }
}

impl FromStr for Reason {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Reason`")
    }
}

/// Decision upon a [`Status::Pending`] [`Request`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Approve the [`Request`].
    Approve,

    /// Reject the [`Request`], optionally explaining why.
    Reject(Option<Reason>),
}

impl Decision {
    /// Returns the [`Status`] a [`Request`] gets with this [`Decision`].
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Approve => Status::Approved,
            Self::Reject(_) => Status::Rejected,
        }
    }
}

define_kind! {
    #[doc = "Type of a leave [`Request`]."]
    enum Type {
        #[doc = "Vacation leave."]
        Vacation = 1 => "Vacation",

        #[doc = "Personal leave."]
        Personal = 2 => "Personal",

        #[doc = "Sick leave."]
        SickLeave = 3 => "Sick Leave",

        #[doc = "Bereavement leave."]
        Bereavement = 4 => "Bereavement",

        #[doc = "Medical leave."]
        Medical = 5 => "Medical",

        #[doc = "Parental leave."]
        Parental = 6 => "Parental",
    }
}

impl Type {
    /// Returns the [`TypeInfo`] of this [`Type`].
    #[must_use]
    pub const fn info(self) -> TypeInfo {
        TypeInfo {
            kind: self,
            category: self.category(),
            label: self.label(),
        }
    }

    /// Returns the [`Category`] this [`Type`] belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Vacation | Self::Personal => Category::Annual,
            Self::SickLeave
            | Self::Bereavement
            | Self::Medical
            | Self::Parental => Category::NonAnnual,
        }
    }

    /// Resolves a [`Type`] from its label.
    ///
    /// Unknown labels fall back to the first [`Type`] ([`Type::Vacation`])
    /// with a warning logged.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                leave_type = label,
                "unknown leave `Type`, falling back to `{}`",
                Self::Vacation,
            );
            Self::Vacation
        })
    }
}

/// Static description of a leave [`Type`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeInfo {
    /// Described [`Type`].
    pub kind: Type,

    /// [`Category`] of the [`Type`].
    pub category: Category,

    /// Display label of the [`Type`].
    pub label: &'static str,
}

define_kind! {
    #[doc = "Category of a leave [`Type`]."]
    enum Category {
        #[doc = "Drawing down the capped annual entitlement."]
        Annual = 1 => "Annual",

        #[doc = "Tracked without a cap."]
        NonAnnual = 2 => "NonAnnual",
    }
}

define_kind! {
    #[doc = "Shape of every day of a leave [`Request`]."]
    enum Duration {
        #[doc = "Whole working day."]
        FullDay = 1 => "Full Day",

        #[doc = "Morning half of a working day."]
        HalfDayAm = 2 => "Half Day AM",

        #[doc = "Afternoon half of a working day."]
        HalfDayPm = 3 => "Half Day PM",
    }
}

impl Duration {
    /// Indicates whether this [`Duration`] covers a half of a day.
    #[must_use]
    pub const fn is_half_day(self) -> bool {
        match self {
            Self::FullDay => false,
            Self::HalfDayAm | Self::HalfDayPm => true,
        }
    }
}

define_kind! {
    #[doc = "Status of a leave [`Request`]."]
    enum Status {
        #[doc = "Awaiting a [`Decision`]."]
        Pending = 1 => "Pending",

        #[doc = "Approved, counting against the balance."]
        Approved = 2 => "Approved",

        #[doc = "Rejected."]
        Rejected = 3 => "Rejected",
    }
}

/// [`DateTime`] when a [`Request`] was submitted.
///
/// [`DateTime`]: common::DateTime
pub type SubmissionDateTime = DateTimeOf<(Request, unit::Submission)>;
