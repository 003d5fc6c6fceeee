//! Board state store.
//!
//! Owns the board and the transient edit draft, and provides the
//! add/delete/edit/move transitions. Every transition computes its result
//! from the current snapshot and publishes a fresh one atomically; invalid
//! input is a silent no-op that leaves the published snapshot untouched.

use std::sync::Arc;

use chrono::Utc;

use crate::ident::generate_task_id;
use crate::types::{BoardSnapshot, Column, ColumnId, Task};

/// Transient edit state: at most one task is being edited at a time,
/// holding a draft buffer seeded from the task's current content.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub task_id: String,
    pub buffer: String,
}

/// Single owner of the board and the edit draft.
///
/// Readers hold `Arc<BoardSnapshot>` clones and never observe a partial
/// update; a no-op transition leaves the snapshot reference unchanged, so
/// reference-identity change detection sees no update either.
#[derive(Debug)]
pub struct BoardStore {
    snapshot: Arc<BoardSnapshot>,
    draft: Option<EditDraft>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(BoardSnapshot::new()),
            draft: None,
        }
    }

    /// The current immutable snapshot, for rendering and change detection.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// The edit draft currently in progress, if any.
    pub fn editing(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Owned copy of one column's current state, ready to mutate.
    fn detach(&self, id: ColumnId) -> Column {
        self.snapshot.column(id).as_ref().clone()
    }

    /// Publish a new snapshot with the touched columns replaced.
    /// Untouched columns are carried over by reference.
    fn publish(&mut self, touched: Vec<Column>) {
        let mut columns = self.snapshot.columns.clone();
        for column in touched {
            let index = column.id.index();
            columns[index] = Arc::new(column);
        }
        self.snapshot = Arc::new(BoardSnapshot { columns });
    }

    /// Create a task from raw input text and prepend it to `pending`
    /// (most-recent-first). Blank input is silently ignored.
    pub fn add_task(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            log::debug!("[taskboard.store.add] Ignoring blank task text");
            return;
        }

        let task = Task {
            id: generate_task_id(),
            content: trimmed.to_string(),
            created_at: Utc::now(),
        };

        let mut pending = self.detach(ColumnId::Pending);
        pending.tasks.insert(0, task);
        self.publish(vec![pending]);
    }

    /// Remove the task with `task_id` from `column_id`, if present.
    /// An unknown id is a no-op.
    pub fn delete_task(&mut self, column_id: ColumnId, task_id: &str) {
        let index = match self.snapshot.column(column_id).position_of(task_id) {
            Some(index) => index,
            None => {
                log::debug!(
                    "[taskboard.store.delete] No task {} in column {}",
                    task_id,
                    column_id
                );
                return;
            }
        };

        let mut column = self.detach(column_id);
        column.tasks.remove(index);
        self.publish(vec![column]);
    }

    /// Begin editing a task, seeding the draft buffer from its current
    /// content. A draft already in progress is silently replaced.
    pub fn start_edit(&mut self, task_id: &str, current_content: &str) {
        self.draft = Some(EditDraft {
            task_id: task_id.to_string(),
            buffer: current_content.to_string(),
        });
    }

    /// Replace the draft buffer of the edit in progress. No-op without one.
    pub fn update_edit_buffer(&mut self, text: &str) {
        match self.draft.as_mut() {
            Some(draft) => draft.buffer = text.to_string(),
            None => {
                log::debug!("[taskboard.store.edit] Buffer change with no edit in progress");
            }
        }
    }

    /// Write the draft buffer into the identified task's content and clear
    /// the draft. Only `content` changes; id and creation time are kept.
    /// An empty buffer is written as-is (add validates, edit does not).
    pub fn commit_edit(&mut self, column_id: ColumnId, task_id: &str) {
        let draft = match self.draft.take() {
            Some(draft) => draft,
            None => {
                log::debug!("[taskboard.store.edit] Commit with no edit in progress");
                return;
            }
        };

        let index = match self.snapshot.column(column_id).position_of(task_id) {
            Some(index) => index,
            None => {
                log::debug!(
                    "[taskboard.store.edit] No task {} in column {}",
                    task_id,
                    column_id
                );
                return;
            }
        };

        let mut column = self.detach(column_id);
        column.tasks[index].content = draft.buffer;
        self.publish(vec![column]);
    }

    /// Relocate the task at `src_index` of `src` to `dst_index` of `dst`.
    ///
    /// Same-column reorder and cross-column move share the one
    /// remove-then-insert path; removing first keeps same-column indices
    /// valid. A `dst_index` past the end appends. An out-of-range
    /// `src_index` is a no-op.
    pub fn move_task(&mut self, src: ColumnId, src_index: usize, dst: ColumnId, dst_index: usize) {
        if src_index >= self.snapshot.column(src).tasks.len() {
            log::debug!(
                "[taskboard.store.move] Source index {} out of range in column {}",
                src_index,
                src
            );
            return;
        }

        if src == dst {
            let mut column = self.detach(src);
            let task = column.tasks.remove(src_index);
            let at = dst_index.min(column.tasks.len());
            column.tasks.insert(at, task);
            self.publish(vec![column]);
        } else {
            let mut source = self.detach(src);
            let mut dest = self.detach(dst);
            let task = source.tasks.remove(src_index);
            let at = dst_index.min(dest.tasks.len());
            dest.tasks.insert(at, task);
            self.publish(vec![source, dest]);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
