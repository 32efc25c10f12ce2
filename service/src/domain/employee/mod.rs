//! [`Employee`] definitions.

pub mod tenure;

use std::sync::LazyLock;

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

pub use self::tenure::{annual_entitlement, years_of_service, ServiceBracket};

/// Employee whose leave is being accounted.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// [`Name`] of this [`Employee`].
    pub name: Name,

    /// [`Email`] of this [`Employee`].
    pub email: Email,

    /// [`Grade`] of this [`Employee`].
    pub grade: Grade,

    /// [`Department`] this [`Employee`] belongs to.
    pub department: Department,

    /// First day this [`Employee`] worked.
    #[cfg_attr(
        feature = "serde",
        serde(with = "common::datetime::serde::date")
    )]
    pub first_day_of_work: Date,
}

impl Employee {
    /// Returns the completed years of service of this [`Employee`] as of the
    /// provided [`Date`].
    #[must_use]
    pub fn years_of_service(&self, as_of: Date) -> u32 {
        years_of_service(self.first_day_of_work, as_of)
    }

    /// Returns the annual leave entitlement (in days) of this [`Employee`]
    /// as of the provided [`Date`].
    #[must_use]
    pub fn annual_entitlement(&self, as_of: Date) -> u16 {
        annual_entitlement(self.grade, self.years_of_service(as_of))
    }
}

/// ID of an [`Employee`].
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

/// Display name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[as_ref(str, String)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Contact email address of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format: a local part and a
        /// dotted domain, separated by a single `@`, without whitespace.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Department label of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[as_ref(str, String)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Department(String);

impl Department {
    /// Creates a new [`Department`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        (label.trim() == label && !label.is_empty()).then_some(Self(label))
    }
}

impl FromStr for Department {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Department`")
    }
}

define_kind! {
    #[doc = "Grade of an [`Employee`], ordered from the most junior one."]
    enum Grade {
        #[doc = "Junior grade."]
        Junior = 1 => "Junior",

        #[doc = "Mid grade."]
        Mid = 2 => "Mid",

        #[doc = "Senior grade."]
        Senior = 3 => "Senior",

        #[doc = "Executive grade."]
        Executive = 4 => "Executive",
    }
}

impl Grade {
    /// Resolves a [`Grade`] from its label.
    ///
    /// Unknown labels fall back to [`Grade::Junior`] (the smallest
    /// entitlement), with a warning logged, so that a malformed record
    /// still gets a balance.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                grade = label,
                "unknown `Grade`, falling back to `{}`",
                Self::Junior,
            );
            Self::Junior
        })
    }
}

#[cfg(test)]
mod spec {
    use super::{Department, Email, Grade, Name};

    #[test]
    fn validates_name() {
        assert!(Name::new("James Smith").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" James").is_none());
        assert!(Name::new("x".repeat(513)).is_none());
    }

    #[test]
    fn validates_email() {
        assert!(Email::new("james.smith@company.com").is_some());
        assert!(Email::new("james.smith@company").is_none());
        assert!(Email::new("james smith@company.com").is_none());
        assert!(Email::new("@company.com").is_none());
        assert!(Email::new("").is_none());
    }

    #[test]
    fn validates_department() {
        assert!(Department::new("Customer Support").is_some());
        assert!(Department::new("").is_none());
        assert!(Department::new("HR ").is_none());
    }

    #[test]
    fn grades_are_ordered() {
        assert!(Grade::Junior < Grade::Mid);
        assert!(Grade::Mid < Grade::Senior);
        assert!(Grade::Senior < Grade::Executive);
    }

    #[test]
    fn unknown_grade_falls_back_to_junior() {
        assert_eq!(Grade::from_label("Senior"), Grade::Senior);
        assert_eq!(Grade::from_label(" Executive "), Grade::Executive);
        assert_eq!(Grade::from_label("Intern"), Grade::Junior);
        assert_eq!(Grade::from_label(""), Grade::Junior);
    }
}
