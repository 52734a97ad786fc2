//! Timer entries recording time spent on a task.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Formats an instant the way the kanban plugin writes timestamps.
///
/// Always three fractional digits and a `Z` suffix; finer precision is
/// truncated.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use kanban_md_protocol::timer::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap();
/// assert_eq!(format_timestamp(at), "2025-01-01T09:30:00.000Z");
/// ```
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A single start/stop interval spent working on a task.
///
/// An entry without an end time is a timer that is still running. The two
/// timestamps are opaque ISO-8601 strings; nothing checks that the end
/// comes after the start.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::TimerEntry;
///
/// let entry = TimerEntry::running("2025-01-01T09:00:00Z");
/// assert!(entry.is_running());
///
/// let entry = TimerEntry::stopped("2025-01-01T09:00:00Z", "2025-01-01T10:00:00Z");
/// assert!(!entry.is_running());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerEntry {
    /// When the timer was started.
    pub start_time: String,
    /// When the timer was stopped, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl TimerEntry {
    /// Creates a timer that is still running.
    #[must_use]
    pub fn running(start_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: None,
        }
    }

    /// Creates a timer that has been stopped.
    #[must_use]
    pub fn stopped(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: Some(end_time.into()),
        }
    }

    /// Creates an entry from instants, formatted with [`format_timestamp`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use kanban_md_protocol::TimerEntry;
    ///
    /// let start = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    /// let entry = TimerEntry::from_datetimes(start, Some(start + Duration::hours(2)));
    /// assert_eq!(entry.start_time, "2025-03-01T08:00:00.000Z");
    /// assert_eq!(entry.end_time.as_deref(), Some("2025-03-01T10:00:00.000Z"));
    /// ```
    #[must_use]
    pub fn from_datetimes(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start_time: format_timestamp(start),
            end_time: end.map(format_timestamp),
        }
    }

    /// Returns `true` if the timer has no end time.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }
}
