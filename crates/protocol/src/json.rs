//! JSON encoding of board documents.
//!
//! Every record in this crate encodes through serde with the same rule: an
//! unset optional field is left out, a set field (even an empty list) is
//! written under its camelCase wire key. The [`KanbanJson`] trait adds the
//! conversions the kanban plugin format needs on top of that.
//!
//! # Examples
//!
//! ```
//! use kanban_md_protocol::{KanbanJson, Task};
//!
//! let task = Task::new("Write docs")
//!     .with_status("To Do")
//!     .with_due_date("2025-01-01T00:00:00Z");
//!
//! let text = task.to_json_text(2).unwrap();
//! assert_eq!(
//!     text,
//!     "{\n  \"task\": \"Write docs\",\n  \"status\": \"To Do\",\n  \"dueDate\": \"2025-01-01T00:00:00Z\"\n}"
//! );
//! ```

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::board::BoardDocument;
use crate::column::ColumnMetadata;
use crate::error::{ProtocolError, Result};
use crate::task::Task;
use crate::timer::TimerEntry;

/// Indentation used when none is configured.
pub const DEFAULT_INDENT: usize = 2;

/// Info string of the fenced code block the plugin reads.
pub const KANBAN_FENCE_INFO: &str = "kanban";

/// Conversions shared by every encodable kanban record.
///
/// Implemented for [`TimerEntry`], [`Task`], [`ColumnMetadata`],
/// [`BoardDocument`], and `[Task]`. A task slice encodes as a bare JSON
/// array, which the plugin accepts as the simple format.
pub trait KanbanJson: Serialize {
    /// Converts the record into a JSON value.
    ///
    /// Object keys keep field declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if serde_json rejects
    /// the value, which does not happen for the types in this crate.
    fn to_json_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Encodes the record as pretty-printed JSON text.
    ///
    /// Each nesting level is indented by `indent` spaces; `0` still puts
    /// every element on its own line. Non-ASCII characters are written as
    /// is, never as `\u` escapes.
    ///
    /// # Errors
    ///
    /// See [`KanbanJson::to_json_value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_md_protocol::{ColumnMetadata, KanbanJson};
    ///
    /// let meta = ColumnMetadata::named("Backlog").with_icon("📋");
    /// let text = meta.to_json_text(4).unwrap();
    /// assert!(text.contains("    \"icon\": \"📋\""));
    /// ```
    fn to_json_text(&self, indent: usize) -> Result<String> {
        let indent_bytes = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent_bytes.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(ProtocolError::SerializationFailed)?;

        debug!(indent, bytes = buf.len(), "encoded kanban JSON");
        String::from_utf8(buf)
            .map_err(|e| ProtocolError::SerializationFailed(serde_json::Error::custom(e)))
    }

    /// Encodes with [`DEFAULT_INDENT`].
    ///
    /// # Errors
    ///
    /// See [`KanbanJson::to_json_value`].
    fn to_json_text_default(&self) -> Result<String> {
        self.to_json_text(DEFAULT_INDENT)
    }

    /// Encodes the record and wraps it in a `kanban` fenced code block,
    /// ready to paste into a markdown note.
    ///
    /// # Errors
    ///
    /// See [`KanbanJson::to_json_value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_md_protocol::{BoardDocument, KanbanJson};
    ///
    /// let block = BoardDocument::new().with_columns(["A"]).to_kanban_block(2).unwrap();
    /// assert_eq!(block, "```kanban\n{\n  \"columns\": [\n    \"A\"\n  ]\n}\n```");
    /// ```
    fn to_kanban_block(&self, indent: usize) -> Result<String> {
        Ok(kanban_block(&self.to_json_text(indent)?))
    }
}

impl KanbanJson for TimerEntry {}
impl KanbanJson for Task {}
impl KanbanJson for ColumnMetadata {}
impl KanbanJson for BoardDocument {}
impl KanbanJson for [Task] {}
impl KanbanJson for Vec<Task> {}

/// Wraps already encoded JSON text in a `kanban` fenced code block.
#[must_use]
pub fn kanban_block(json: &str) -> String {
    format!("```{KANBAN_FENCE_INFO}\n{json}\n```")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::KanbanView;
    use crate::column::{ColumnState, SortField, SortOrder};
    use serde_json::json;

    #[test]
    fn task_example_keeps_emission_order() {
        let task = Task::new("Write docs")
            .with_status("To Do")
            .with_due_date("2025-01-01T00:00:00Z");
        let value = task.to_json_value().unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"task":"Write docs","status":"To Do","dueDate":"2025-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn columns_only_board_text() {
        let board = BoardDocument::new().with_columns(["A", "B"]);
        let value = board.to_json_value().unwrap();
        assert_eq!(value, json!({ "columns": ["A", "B"] }));
        assert_eq!(
            board.to_json_text(2).unwrap(),
            "{\n  \"columns\": [\n    \"A\",\n    \"B\"\n  ]\n}"
        );
    }

    #[test]
    fn simple_format_is_bare_array() {
        let tasks = vec![
            Task::new("Task 1").with_status("todo"),
            Task::new("Task 2").with_status("in progress"),
            Task::new("Task 3").with_status("done"),
        ];
        let value = tasks.to_json_value().unwrap();
        let items = value.as_array().expect("bare array");
        assert_eq!(items.len(), 3);
        for item in items {
            let keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys, ["task", "status"]);
        }
    }

    #[test]
    fn owned_task_list_satisfies_generic_bound() {
        fn encode<T: KanbanJson>(value: &T) -> String {
            value.to_json_text(2).unwrap()
        }

        let tasks = vec![Task::new("a"), Task::new("b").with_status("done")];
        assert_eq!(encode(&tasks), tasks.as_slice().to_json_text(2).unwrap());
        assert!(encode(&tasks).starts_with("[\n  {"));
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let meta = ColumnMetadata::new("Prüfung", ColumnState::Pending).with_icon("📋");
        let text = meta.to_json_text_default().unwrap();
        assert!(text.contains("📋"));
        assert!(text.contains("Prüfung"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn zero_indent_still_breaks_lines() {
        let text = Task::new("a").with_tags(["#x"]).to_json_text(0).unwrap();
        assert_eq!(text, "{\n\"task\": \"a\",\n\"tags\": [\n\"#x\"\n]\n}");
    }

    #[test]
    fn empty_containers_print_compactly() {
        let text = BoardDocument::new().with_tasks(Vec::new()).to_json_text(2).unwrap();
        assert_eq!(text, "{\n  \"tasks\": []\n}");
    }

    #[test]
    fn nested_records_convert_recursively() {
        let board = BoardDocument::new()
            .with_tasks([Task::new("t").with_timer_entries([TimerEntry::running("s")])])
            .with_column_metadata([ColumnMetadata::new("c", ColumnState::Done)
                .with_sort(SortField::TimeSpent, SortOrder::Desc)])
            .with_view(KanbanView::Vertical);
        assert_eq!(
            board.to_json_value().unwrap(),
            json!({
                "tasks": [{ "task": "t", "timerEntries": [{ "startTime": "s" }] }],
                "columnMetadata": [{
                    "name": "c",
                    "state": "done",
                    "sortField": "timeSpent",
                    "sortOrder": "desc",
                }],
                "view": "vertical",
            })
        );
    }

    #[test]
    fn fence_wraps_text() {
        assert_eq!(kanban_block("[]"), "```kanban\n[]\n```");
    }

    #[test]
    fn fence_is_a_kanban_code_block() {
        use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

        let tasks = [Task::new("Task 1").with_status("todo")];
        let block = tasks.to_kanban_block(2).unwrap();
        let markdown = format!("# Board\n\n{block}\n");

        let mut info = None;
        let mut body = String::new();
        let mut inside = false;
        for event in Parser::new(&markdown) {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                    info = Some(lang.to_string());
                    inside = true;
                }
                Event::Text(text) if inside => body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => inside = false,
                _ => {}
            }
        }

        assert_eq!(info.as_deref(), Some(KANBAN_FENCE_INFO));
        assert_eq!(body.trim_end(), tasks.to_json_text(2).unwrap());
    }
}
