//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Adds `days`, or `None` if the result is outside the representable range.
    pub fn checked_plus_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Subtracts `days`, or `None` if the result is outside the representable range.
    pub fn checked_minus_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_sub_signed(delta))
            .map(Self)
    }

    /// Adds `days`, saturating at the latest representable instant.
    pub fn plus_days(&self, days: i64) -> Self {
        self.checked_plus_days(days)
            .unwrap_or(Self(DateTime::<Utc>::MAX_UTC))
    }

    /// Subtracts `days`, saturating at the earliest representable instant.
    pub fn minus_days(&self, days: i64) -> Self {
        self.checked_minus_days(days)
            .unwrap_or(Self(DateTime::<Utc>::MIN_UTC))
    }
}
