use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for one of the three fixed board columns.
/// The set is closed — columns are never added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Pending,
    Process,
    Complete,
}

impl ColumnId {
    /// All column identifiers in display order.
    pub const ALL: [ColumnId; 3] = [ColumnId::Pending, ColumnId::Process, ColumnId::Complete];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Pending => "pending",
            ColumnId::Process => "process",
            ColumnId::Complete => "complete",
        }
    }

    /// Human-readable title shown above the column's card list.
    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Pending => "Pending",
            ColumnId::Process => "In Process",
            ColumnId::Complete => "Complete",
        }
    }

    /// Position of this column in display order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown column id: {0}")]
pub struct UnknownColumn(pub String);

/// Parse a column identifier from the raw droppable id string a drag-drop
/// library reports.
impl FromStr for ColumnId {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ColumnId::Pending),
            "process" => Ok(ColumnId::Process),
            "complete" => Ok(ColumnId::Complete),
            other => Err(UnknownColumn(other.to_string())),
        }
    }
}

/// A single to-do card.
/// `id` and `created_at` are fixed at creation; only `content` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// An ordered bucket of tasks. Task order is meaningful — it is the display
/// and drag-drop order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            tasks: Vec::new(),
        }
    }

    /// Position of a task within this column, by id.
    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

/// An immutable view of the whole board at one instant.
///
/// Columns are `Arc`-shared: a mutation allocates new sequences only for the
/// touched column(s) and republishes the rest by reference, so a renderer
/// relying on reference identity sees exactly which columns changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Always exactly three columns, in `ColumnId::ALL` order.
    pub columns: Vec<Arc<Column>>,
}

impl BoardSnapshot {
    pub fn new() -> Self {
        Self {
            columns: ColumnId::ALL
                .iter()
                .map(|&id| Arc::new(Column::empty(id)))
                .collect(),
        }
    }

    pub fn column(&self, id: ColumnId) -> &Arc<Column> {
        &self.columns[id.index()]
    }

    /// Locate a task anywhere on the board.
    pub fn find_task(&self, task_id: &str) -> Option<(ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|c| c.position_of(task_id).map(|i| (c.id, i)))
    }

    /// Total number of tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
