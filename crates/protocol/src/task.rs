//! Task cards shown on the board.
//!
//! A [`Task`] only carries what the kanban plugin stores for a card. Every
//! field but the title is optional, and an unset field is left out of the
//! encoded JSON entirely.

use serde::Serialize;

use crate::timer::TimerEntry;

/// A task on the kanban board.
///
/// `status` names the column the card sits in, `target_time` is a free-form
/// estimate such as `"8h"`, `"2d"` or a date, and tags conventionally start
/// with `#`. None of these strings are interpreted here.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::Task;
///
/// let task = Task::new("Write docs")
///     .with_status("To Do")
///     .with_tags(["#docs"]);
/// assert_eq!(task.task, "Write docs");
/// assert_eq!(task.status.as_deref(), Some("To Do"));
/// assert!(task.due_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Title displayed on the card.
    pub task: String,
    /// Column label the task belongs to (e.g. "In Progress").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Time tracked against this task, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_entries: Option<Vec<TimerEntry>>,
    /// Planned effort or deadline, as written by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Tags attached to the card, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// ISO-8601 due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// ISO-8601 timestamp of the last change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date_time: Option<String>,
}

impl Task {
    /// Creates a task with only its title set.
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: None,
            timer_entries: None,
            target_time: None,
            tags: None,
            due_date: None,
            update_date_time: None,
        }
    }

    /// Sets the status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the timer entries. An empty iterator still emits `timerEntries: []`.
    #[must_use]
    pub fn with_timer_entries(mut self, entries: impl IntoIterator<Item = TimerEntry>) -> Self {
        self.timer_entries = Some(entries.into_iter().collect());
        self
    }

    /// Sets the target time.
    #[must_use]
    pub fn with_target_time(mut self, target_time: impl Into<String>) -> Self {
        self.target_time = Some(target_time.into());
        self
    }

    /// Sets the tags, keeping their order.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the last-update timestamp.
    #[must_use]
    pub fn with_update_date_time(mut self, update_date_time: impl Into<String>) -> Self {
        self.update_date_time = Some(update_date_time.into());
        self
    }

    /// Returns `true` if any of the task's timers is still running.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_md_protocol::{Task, TimerEntry};
    ///
    /// let task = Task::new("Review PR")
    ///     .with_timer_entries([TimerEntry::running("2025-01-01T09:00:00Z")]);
    /// assert!(task.has_running_timer());
    /// assert!(!Task::new("Idle").has_running_timer());
    /// ```
    #[must_use]
    pub fn has_running_timer(&self) -> bool {
        self.timer_entries
            .iter()
            .flatten()
            .any(TimerEntry::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .expect("task encodes to an object")
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn title_only_task() {
        let value = serde_json::to_value(Task::new("Ship it")).unwrap();
        assert_eq!(value, json!({ "task": "Ship it" }));
    }

    #[test]
    fn keys_follow_field_order() {
        let task = Task::new("Everything")
            .with_update_date_time("2025-01-02T00:00:00Z")
            .with_due_date("2025-01-03T00:00:00Z")
            .with_tags(["#a"])
            .with_target_time("2h")
            .with_timer_entries([TimerEntry::running("2025-01-01T00:00:00Z")])
            .with_status("Done");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            keys(&value),
            [
                "task",
                "status",
                "timerEntries",
                "targetTime",
                "tags",
                "dueDate",
                "updateDateTime"
            ]
        );
    }

    #[test]
    fn empty_sequences_are_emitted() {
        let task = Task::new("Blank")
            .with_tags(Vec::<String>::new())
            .with_timer_entries(Vec::new());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, json!({ "task": "Blank", "timerEntries": [], "tags": [] }));
    }

    #[test]
    fn running_timer_detection_ignores_stopped_entries() {
        let task = Task::new("Tracked").with_timer_entries([TimerEntry::stopped(
            "2025-01-01T00:00:00Z",
            "2025-01-01T01:00:00Z",
        )]);
        assert!(!task.has_running_timer());
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_timer()(
            start in "2025-0[1-9]-[12][0-9]T[01][0-9]:00:00Z",
            end in proptest::option::of("2025-1[0-2]-[12][0-9]T[01][0-9]:00:00Z"),
        ) -> TimerEntry {
            TimerEntry { start_time: start, end_time: end }
        }
    }

    prop_compose! {
        fn arb_task()(
            task in "[a-zA-Z][a-zA-Z0-9 ]{0,40}",
            status in proptest::option::of("(To Do|In Progress|Done|Review)"),
            timer_entries in proptest::option::of(proptest::collection::vec(arb_timer(), 0..3)),
            target_time in proptest::option::of("[1-9][hd]"),
            tags in proptest::option::of(proptest::collection::vec("#[a-z]{1,8}", 0..4)),
            due_date in proptest::option::of("2026-0[1-9]-0[1-9]"),
            update_date_time in proptest::option::of("2025-0[1-9]-0[1-9]T12:00:00Z"),
        ) -> Task {
            Task { task, status, timer_entries, target_time, tags, due_date, update_date_time }
        }
    }

    proptest! {
        /// A wire key is present exactly when its field is set.
        #[test]
        fn key_presence_matches_field_presence(task in arb_task()) {
            let value = serde_json::to_value(&task).expect("serialize");
            let object = value.as_object().expect("object");

            prop_assert_eq!(object.contains_key("status"), task.status.is_some());
            prop_assert_eq!(object.contains_key("timerEntries"), task.timer_entries.is_some());
            prop_assert_eq!(object.contains_key("targetTime"), task.target_time.is_some());
            prop_assert_eq!(object.contains_key("tags"), task.tags.is_some());
            prop_assert_eq!(object.contains_key("dueDate"), task.due_date.is_some());
            prop_assert_eq!(object.contains_key("updateDateTime"), task.update_date_time.is_some());
            prop_assert!(object.values().all(|v| !v.is_null()));
        }

        /// Tags keep their input order.
        #[test]
        fn tag_order_is_preserved(tags in proptest::collection::vec("#[a-z]{1,8}", 0..6)) {
            let value = serde_json::to_value(Task::new("t").with_tags(tags.clone())).expect("serialize");
            let emitted: Vec<String> = serde_json::from_value(value["tags"].clone()).expect("tags array");
            prop_assert_eq!(emitted, tags);
        }

        /// Running timers never carry an `endTime` key.
        #[test]
        fn running_timers_omit_end_time(entry in arb_timer()) {
            let value = serde_json::to_value(&entry).expect("serialize");
            prop_assert_eq!(value.get("endTime").is_some(), !entry.is_running());
        }
    }
}
