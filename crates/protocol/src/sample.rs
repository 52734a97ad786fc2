//! Sample data for demonstration and testing.
//!
//! Builds a realistic board covering every kind of field: running and
//! stopped timers, due dates, tags, emoji column icons and view settings.
//!
//! # Examples
//!
//! ```
//! use kanban_md_protocol::sample::sample_board;
//!
//! let board = sample_board();
//! assert_eq!(board.task_count(), 4);
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::board::{BoardDocument, KanbanView};
use crate::column::{ColumnMetadata, ColumnState};
use crate::task::Task;
use crate::timer::{TimerEntry, format_timestamp};

/// Column names of the sample board, in display order.
pub const SAMPLE_COLUMNS: [&str; 5] = ["Backlog", "To Do", "In Progress", "Review", "Done"];

/// Generates the sample board with timestamps relative to the current time.
#[must_use]
pub fn sample_board() -> BoardDocument {
    sample_board_at(Utc::now())
}

/// Generates the sample board with timestamps relative to `now`.
///
/// - one task with a timer still running, due in three days
/// - one finished task with a stopped timer from yesterday
/// - one task with only a due date
/// - one task with neither timers nor dates
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use kanban_md_protocol::sample::sample_board_at;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
/// let board = sample_board_at(now);
/// let first = &board.tasks.as_ref().unwrap()[0];
/// assert!(first.has_running_timer());
/// assert_eq!(first.update_date_time.as_deref(), Some("2025-06-15T12:00:00.000Z"));
/// ```
#[must_use]
pub fn sample_board_at(now: DateTime<Utc>) -> BoardDocument {
    let yesterday = now - Duration::days(1);

    let tasks = [
        Task::new("Implement user authentication")
            .with_status("In Progress")
            .with_timer_entries([TimerEntry::from_datetimes(now - Duration::hours(2), None)])
            .with_target_time("8h")
            .with_tags(["#backend", "#security"])
            .with_due_date(format_timestamp(now + Duration::days(3)))
            .with_update_date_time(format_timestamp(now)),
        Task::new("Design database schema")
            .with_status("Done")
            .with_timer_entries([TimerEntry::from_datetimes(
                yesterday - Duration::hours(4),
                Some(yesterday),
            )])
            .with_target_time("4h")
            .with_tags(["#database", "#design"])
            .with_update_date_time(format_timestamp(yesterday)),
        Task::new("Write API documentation")
            .with_status("To Do")
            .with_target_time("2h")
            .with_tags(["#documentation"])
            .with_due_date(format_timestamp(now + Duration::days(5))),
        Task::new("Code review for PR #42")
            .with_status("Review")
            .with_target_time("1h")
            .with_tags(["#review"]),
    ];

    let column_metadata = [
        ColumnMetadata::new("Backlog", ColumnState::Todo).with_icon("📋"),
        ColumnMetadata::new("To Do", ColumnState::Todo).with_icon("⏳"),
        ColumnMetadata::new("In Progress", ColumnState::InProgress).with_icon("🔄"),
        ColumnMetadata::new("Review", ColumnState::Pending).with_icon("👀"),
        ColumnMetadata::new("Done", ColumnState::Done).with_icon("✅"),
    ];

    BoardDocument::new()
        .with_tasks(tasks)
        .with_columns(SAMPLE_COLUMNS)
        .with_column_metadata(column_metadata)
        .with_view(KanbanView::Table)
        .with_slim_mode(false)
}

/// Generates three tasks with only a title and status, for the simple
/// (bare array) format.
#[must_use]
pub fn simple_tasks() -> Vec<Task> {
    vec![
        Task::new("Task 1").with_status("todo"),
        Task::new("Task 2").with_status("in progress"),
        Task::new("Task 3").with_status("done"),
    ]
}
