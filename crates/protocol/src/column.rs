//! Column metadata and the closed sets it draws from.
//!
//! Columns themselves are just names listed on the
//! [`BoardDocument`](crate::BoardDocument); [`ColumnMetadata`] attaches a
//! workflow state, an icon and sorting preferences to one of those names.

use serde::Serialize;

/// The workflow state a column represents.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::ColumnState;
///
/// assert_eq!(ColumnState::default(), ColumnState::Todo);
/// assert_eq!(ColumnState::InProgress.as_str(), "in-progress");
/// assert_eq!("done".parse::<ColumnState>().unwrap(), ColumnState::Done);
/// assert!("finished".parse::<ColumnState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnState {
    /// Work not started yet.
    #[default]
    Todo,
    /// Work under way.
    InProgress,
    /// Waiting on someone else (review, approval).
    Pending,
    /// Finished work.
    Done,
}

impl ColumnState {
    /// Returns every state in workflow order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Todo, Self::InProgress, Self::Pending, Self::Done]
    }

    /// Returns the wire tag for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

/// The task attribute a column sorts its cards by.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::SortField;
///
/// assert_eq!(SortField::UpdateDateTime.as_str(), "updateDateTime");
/// assert_eq!("timeSpent".parse::<SortField>().unwrap(), SortField::TimeSpent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Last modification time.
    UpdateDateTime,
    /// Due date.
    DueDate,
    /// Card title.
    Title,
    /// Total tracked time.
    TimeSpent,
}

impl SortField {
    /// Returns every sort field.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::UpdateDateTime,
            Self::DueDate,
            Self::Title,
            Self::TimeSpent,
        ]
    }

    /// Returns the wire tag for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateDateTime => "updateDateTime",
            Self::DueDate => "dueDate",
            Self::Title => "title",
            Self::TimeSpent => "timeSpent",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Returns both directions.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Asc, Self::Desc]
    }

    /// Returns the wire tag for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Implements `Display` and `FromStr` for a closed enumeration through its
/// `all()` and `as_str()` tables.
macro_rules! string_tag {
    ($ty:ty, $kind:literal) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ProtocolError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::all()
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| {
                        let expected = Self::all().map(Self::as_str);
                        $crate::error::ProtocolError::unknown_variant($kind, s, &expected)
                    })
            }
        }
    };
}

pub(crate) use string_tag;

string_tag!(ColumnState, "column state");
string_tag!(SortField, "sort field");
string_tag!(SortOrder, "sort order");

/// Display settings for one named column.
///
/// The name is matched against the board's column list by convention only;
/// nothing checks that it appears there.
///
/// # Examples
///
/// ```
/// use kanban_md_protocol::{ColumnMetadata, ColumnState, SortField, SortOrder};
///
/// let meta = ColumnMetadata::new("Done", ColumnState::Done)
///     .with_icon("✅")
///     .with_sort(SortField::UpdateDateTime, SortOrder::Desc);
/// assert_eq!(meta.state, ColumnState::Done);
/// assert_eq!(meta.sort_order, Some(SortOrder::Desc));
/// assert!(meta.manual_sort.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    /// Name of the column this metadata applies to.
    pub name: String,
    /// Workflow state of the column.
    pub state: ColumnState,
    /// Emoji or icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Task field cards are ordered by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<SortField>,
    /// Direction applied to `sort_field`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Whether cards keep a hand-arranged order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_sort: Option<bool>,
}

impl ColumnMetadata {
    /// Creates metadata for a column with the given state.
    #[must_use]
    pub fn new(name: impl Into<String>, state: ColumnState) -> Self {
        Self {
            name: name.into(),
            state,
            icon: None,
            sort_field: None,
            sort_order: None,
            manual_sort: None,
        }
    }

    /// Creates metadata for a column in the default `todo` state.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, ColumnState::default())
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the sort field only.
    #[must_use]
    pub fn with_sort_field(mut self, field: SortField) -> Self {
        self.sort_field = Some(field);
        self
    }

    /// Sets the sort order only.
    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Sets both the sort field and order.
    #[must_use]
    pub fn with_sort(self, field: SortField, order: SortOrder) -> Self {
        self.with_sort_field(field).with_sort_order(order)
    }

    /// Sets the manual sort flag.
    #[must_use]
    pub fn with_manual_sort(mut self, manual_sort: bool) -> Self {
        self.manual_sort = Some(manual_sort);
        self
    }
}
