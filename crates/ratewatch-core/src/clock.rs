//! Time source abstraction and the last-updated stamp
//!
//! Widgets that derive text from "now" (the copyright year in the page
//! footer) take a [`Clock`] instead of calling `Local::now()` directly, so
//! tests can pin the instant and never race a calendar boundary.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Injectable source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock implementation used everywhere outside of tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant, for deterministic rendering in tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

/// When the rate board was last refreshed, if that is known yet.
///
/// Callers that have never seen a refresh hold `Unknown`; display code omits
/// the corresponding output entirely rather than rendering a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum LastUpdated {
    At(DateTime<Local>),
    #[default]
    Unknown,
}

impl LastUpdated {
    /// Build from an epoch-millisecond stamp.
    ///
    /// Values outside chrono's representable range map to `Unknown`.
    pub fn from_epoch_millis(millis: i64) -> Self {
        match Local.timestamp_millis_opt(millis).single() {
            Some(instant) => Self::At(instant),
            None => Self::Unknown,
        }
    }

    /// Build from an optional epoch-millisecond stamp
    pub fn from_optional_millis(millis: Option<i64>) -> Self {
        millis.map(Self::from_epoch_millis).unwrap_or_default()
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::At(_))
    }

    pub fn instant(&self) -> Option<DateTime<Local>> {
        match self {
            Self::At(instant) => Some(*instant),
            Self::Unknown => None,
        }
    }
}

impl From<Option<DateTime<Local>>> for LastUpdated {
    fn from(value: Option<DateTime<Local>>) -> Self {
        match value {
            Some(instant) => Self::At(instant),
            None => Self::Unknown,
        }
    }
}

/// Host-default human-readable rendering of a local date-time.
///
/// `%c` is the platform's standard date-and-time representation, the chrono
/// equivalent of formatting without an explicit pattern.
pub fn format_local(instant: &DateTime<Local>) -> String {
    instant.format("%c").to_string()
}
