//! [`Config`]-related definitions.

use common::datetime::serde::date;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::calendar::{HolidayTable, Jurisdiction};
use smart_default::SmartDefault;
use time::Date;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed data configuration.
    pub data: Data,

    /// Calendar configuration.
    pub calendar: Calendar,

    /// Clock configuration.
    pub clock: Clock,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Seed data configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Data {
    /// Path to the dataset file to populate the store with.
    #[default("seed.toml".to_owned())]
    pub path: String,
}

/// Calendar configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Calendar {
    /// [`Jurisdiction`] whose public holidays are observed.
    #[default(Jurisdiction::HongKong)]
    pub jurisdiction: Jurisdiction,
}

impl From<Calendar> for service::Config {
    fn from(value: Calendar) -> Self {
        let Calendar { jurisdiction } = value;
        Self {
            calendar: HolidayTable::of(jurisdiction),
        }
    }
}

/// Clock configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Clock {
    /// Fixed [`Date`] considered as today, making reports reproducible.
    ///
    /// The current UTC date is used, if not set.
    #[serde(deserialize_with = "date::option::deserialize")]
    pub today: Option<Date>,
}

impl Clock {
    /// Returns the [`Date`] considered as today.
    #[must_use]
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(common::today)
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
