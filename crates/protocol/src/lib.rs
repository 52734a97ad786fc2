//! Board document types for kanban-md.
//!
//! This crate models the JSON document a markdown kanban plugin keeps inside
//! a ```` ```kanban ```` fenced block, and encodes it to text.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`timer`]: Timer entries tracking time spent on a task
//! - [`task`]: The `Task` card
//! - [`column`]: Column metadata and the column state / sort enumerations
//! - [`board`]: The top-level `BoardDocument` and its view setting
//! - [`json`]: JSON value and text encoding, and the markdown fence
//! - [`sample`]: A realistic sample board
//! - [`error`]: Error types for protocol operations
//!
//! # Encoding Rule
//!
//! Optional fields that are unset are omitted from the output, never written
//! as `null`. Fields that are set, even to an empty list, are written under
//! their camelCase wire key (`due_date` becomes `dueDate`).
//!
//! # Examples
//!
//! ```
//! use kanban_md_protocol::{
//!     BoardDocument, ColumnMetadata, ColumnState, KanbanJson, KanbanView, Task, TimerEntry,
//! };
//!
//! let board = BoardDocument::new()
//!     .with_columns(["To Do", "Done"])
//!     .with_column_metadata([
//!         ColumnMetadata::new("To Do", ColumnState::Todo).with_icon("⏳"),
//!         ColumnMetadata::new("Done", ColumnState::Done).with_icon("✅"),
//!     ])
//!     .with_tasks([Task::new("Write docs")
//!         .with_status("To Do")
//!         .with_timer_entries([TimerEntry::running("2025-01-01T09:00:00Z")])])
//!     .with_view(KanbanView::Horizontal);
//!
//! let block = board.to_kanban_block(2).unwrap();
//! assert!(block.starts_with("```kanban\n{"));
//! assert!(block.contains("\"timerEntries\""));
//! assert!(block.contains("✅"));
//! ```

pub mod board;
pub mod column;
pub mod error;
pub mod json;
pub mod sample;
pub mod task;
pub mod timer;

// Re-export primary types at crate root for convenience
pub use board::{BoardDocument, KanbanView};
pub use column::{ColumnMetadata, ColumnState, SortField, SortOrder};
pub use error::{ProtocolError, Result};
pub use json::{DEFAULT_INDENT, KANBAN_FENCE_INFO, KanbanJson, kanban_block};
pub use task::Task;
pub use timer::TimerEntry;
