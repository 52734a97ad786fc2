//! The top-level board document.
//!
//! A [`BoardDocument`] is what the kanban plugin stores inside a
//! ```` ```kanban ```` block: the tasks, the ordered column list, per-column
//! metadata and a few view settings. Every part is optional.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::column::{ColumnMetadata, string_tag};
use crate::task::Task;

/// How the board is laid out.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::KanbanView;
///
/// assert_eq!(KanbanView::Table.as_str(), "table");
/// assert_eq!("vertical".parse::<KanbanView>().unwrap(), KanbanView::Vertical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KanbanView {
    /// Columns side by side.
    Horizontal,
    /// Columns stacked.
    Vertical,
    /// One row per task.
    Table,
}

impl KanbanView {
    /// Returns every layout.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Horizontal, Self::Vertical, Self::Table]
    }

    /// Returns the wire tag for this layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Table => "table",
        }
    }
}

string_tag!(KanbanView, "kanban view");

/// A whole kanban board.
///
/// `columns` defines which columns exist and in what order.
/// `column_metadata` is a separate ordered list matched to columns by name,
/// not by position. `collapsed_columns` is a set; its order carries no
/// meaning but is kept as given.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::{BoardDocument, ColumnMetadata, ColumnState, KanbanView, Task};
///
/// let board = BoardDocument::new()
///     .with_columns(["To Do", "Done"])
///     .with_column_metadata([ColumnMetadata::new("Done", ColumnState::Done)])
///     .with_tasks([Task::new("Write docs").with_status("To Do")])
///     .with_view(KanbanView::Horizontal);
///
/// assert_eq!(board.task_count(), 1);
/// assert_eq!(
///     board.column_metadata_for("Done").map(|m| m.state),
///     Some(ColumnState::Done)
/// );
/// assert!(board.column_metadata_for("To Do").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    /// Cards on the board, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    /// Column names in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Per-column settings, matched to `columns` by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_metadata: Option<Vec<ColumnMetadata>>,
    /// Names of columns shown collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_columns: Option<Vec<String>>,
    /// Board layout direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<KanbanView>,
    /// Compact card rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slim_mode: Option<bool>,
    /// Width per column name, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<BTreeMap<String, u32>>,
}

impl BoardDocument {
    /// Creates a board with nothing set. It encodes to `{}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tasks, replacing any set before.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks = Some(tasks.into_iter().collect());
        self
    }

    /// Sets the column names in display order.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the per-column metadata list.
    #[must_use]
    pub fn with_column_metadata(
        mut self,
        metadata: impl IntoIterator<Item = ColumnMetadata>,
    ) -> Self {
        self.column_metadata = Some(metadata.into_iter().collect());
        self
    }

    /// Sets which columns are shown collapsed.
    #[must_use]
    pub fn with_collapsed_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collapsed_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the layout direction.
    #[must_use]
    pub fn with_view(mut self, view: KanbanView) -> Self {
        self.view = Some(view);
        self
    }

    /// Turns compact card rendering on or off.
    #[must_use]
    pub fn with_slim_mode(mut self, slim_mode: bool) -> Self {
        self.slim_mode = Some(slim_mode);
        self
    }

    /// Sets the column widths, replacing any set before.
    #[must_use]
    pub fn with_column_widths<I, S>(mut self, widths: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.column_widths = Some(
            widths
                .into_iter()
                .map(|(name, width)| (name.into(), width))
                .collect(),
        );
        self
    }

    /// Returns the metadata whose name matches `name`, if any.
    ///
    /// When several entries share a name the first one wins.
    #[must_use]
    pub fn column_metadata_for(&self, name: &str) -> Option<&ColumnMetadata> {
        self.column_metadata
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|meta| meta.name == name)
    }

    /// Returns `true` if `name` is listed as collapsed.
    #[must_use]
    pub fn is_collapsed(&self, name: &str) -> bool {
        self.collapsed_columns
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|column| column == name)
    }

    /// Returns the number of tasks, treating an unset list as empty.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, Vec::len)
    }
}
