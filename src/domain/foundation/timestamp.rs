//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
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

    /// Creates a timestamp from Unix seconds.
    pub fn from_unix_secs(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Negative if `other` is after `self`.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Creates a new timestamp by adding the specified number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns the start of the calendar month containing this timestamp:
    /// day 1, 00:00:00 UTC. This is the quota window boundary; computed in
    /// a fixed timezone so user locales cannot shift it.
    pub fn start_of_month(&self) -> Self {
        let start = Utc
            .with_ymd_and_hms(self.0.year(), self.0.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or(self.0);
        Self(start)
    }

    /// Formats the timestamp with a strftime pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self(Utc.timestamp_opt(0, 0).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::from_datetime(s.parse::<DateTime<Utc>>().unwrap())
    }

    #[test]
    fn start_of_month_truncates_to_day_one_midnight() {
        let t = ts("2024-03-17T15:42:09Z");
        assert_eq!(t.start_of_month(), ts("2024-03-01T00:00:00Z"));
    }

    #[test]
    fn start_of_month_is_idempotent() {
        let t = ts("2024-03-01T00:00:00Z");
        assert_eq!(t.start_of_month(), t);
    }

    #[test]
    fn duration_since_counts_seconds() {
        let a = ts("2024-01-01T00:00:00Z");
        let b = a.plus_secs(901);
        assert_eq!(b.duration_since(&a).num_seconds(), 901);
    }

    #[test]
    fn format_renders_russian_date_layout() {
        let t = ts("2024-01-05T09:30:00Z");
        assert_eq!(t.format("%d.%m.%Y %H:%M"), "05.01.2024 09:30");
    }
}
