//! UI event surface.
//!
//! Everything the presentation layer or the drag-drop adapter can report:
//! the new-task form, the per-card buttons, and the drag-complete callback.
//! Events route through [`BoardStore::apply`].
//!
//! The drag-drop adapter reports positions relative to each column's current
//! rendered order and must not emit a drag-complete with a destination when
//! no valid drop target was found.

use serde::{Deserialize, Serialize};

use crate::store::BoardStore;
use crate::types::ColumnId;

/// A card position as reported by the drag-drop adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column_id: ColumnId,
    pub index: usize,
}

/// Discrete UI events, one per user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// The new-task form was submitted with free-form text.
    SubmitTask { text: String },
    /// A card's delete button was clicked.
    DeleteTask {
        column_id: ColumnId,
        task_id: String,
    },
    /// A card's edit button was clicked; carries the card's current content.
    StartEdit { task_id: String, content: String },
    /// The edit input changed.
    EditBufferChanged { text: String },
    /// A card's save button was clicked.
    SaveEdit {
        column_id: ColumnId,
        task_id: String,
    },
    /// A drag gesture finished. A missing destination means the card was
    /// dropped outside every column and the gesture is discarded.
    DragComplete {
        source: DragLocation,
        destination: Option<DragLocation>,
    },
}

impl BoardStore {
    /// Route one UI event to the matching store transition.
    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::SubmitTask { text } => self.add_task(&text),
            BoardEvent::DeleteTask { column_id, task_id } => {
                self.delete_task(column_id, &task_id)
            }
            BoardEvent::StartEdit { task_id, content } => self.start_edit(&task_id, &content),
            BoardEvent::EditBufferChanged { text } => self.update_edit_buffer(&text),
            BoardEvent::SaveEdit { column_id, task_id } => self.commit_edit(column_id, &task_id),
            BoardEvent::DragComplete {
                source,
                destination,
            } => match destination {
                Some(dest) => {
                    self.move_task(source.column_id, source.index, dest.column_id, dest.index)
                }
                None => {
                    log::debug!("[taskboard.events] Drag ended without a drop target, discarding");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn column_contents(store: &BoardStore, id: ColumnId) -> Vec<String> {
        store
            .snapshot()
            .column(id)
            .tasks
            .iter()
            .map(|t| t.content.clone())
            .collect()
    }

    #[test]
    fn test_event_sequence_drives_board() {
        let mut store = BoardStore::new();

        store.apply(BoardEvent::SubmitTask {
            text: "Write report".to_string(),
        });
        store.apply(BoardEvent::SubmitTask {
            text: "Review PR".to_string(),
        });
        // pending = [Review PR, Write report]

        store.apply(BoardEvent::DragComplete {
            source: DragLocation {
                column_id: ColumnId::Pending,
                index: 1,
            },
            destination: Some(DragLocation {
                column_id: ColumnId::Process,
                index: 0,
            }),
        });

        let report_id = store.snapshot().column(ColumnId::Process).tasks[0].id.clone();
        store.apply(BoardEvent::StartEdit {
            task_id: report_id.clone(),
            content: "Write report".to_string(),
        });
        store.apply(BoardEvent::EditBufferChanged {
            text: "Write Q3 report".to_string(),
        });
        store.apply(BoardEvent::SaveEdit {
            column_id: ColumnId::Process,
            task_id: report_id,
        });

        assert_eq!(column_contents(&store, ColumnId::Pending), vec!["Review PR"]);
        assert_eq!(
            column_contents(&store, ColumnId::Process),
            vec!["Write Q3 report"]
        );
    }

    #[test]
    fn test_drag_without_destination_is_discarded() {
        let mut store = BoardStore::new();
        store.apply(BoardEvent::SubmitTask {
            text: "Keep me".to_string(),
        });
        let before = store.snapshot();

        store.apply(BoardEvent::DragComplete {
            source: DragLocation {
                column_id: ColumnId::Pending,
                index: 0,
            },
            destination: None,
        });

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_event_removes_card() {
        let mut store = BoardStore::new();
        store.apply(BoardEvent::SubmitTask {
            text: "Doomed".to_string(),
        });
        let id = store.snapshot().column(ColumnId::Pending).tasks[0].id.clone();

        store.apply(BoardEvent::DeleteTask {
            column_id: ColumnId::Pending,
            task_id: id,
        });

        assert_eq!(store.snapshot().task_count(), 0);
    }

    #[test]
    fn test_drag_complete_event_json_shape() {
        let event: BoardEvent = serde_json::from_str(
            r#"{
                "type": "DragComplete",
                "source": { "column_id": "pending", "index": 0 },
                "destination": null
            }"#,
        )
        .unwrap();

        match event {
            BoardEvent::DragComplete {
                source,
                destination,
            } => {
                assert_eq!(source.column_id, ColumnId::Pending);
                assert_eq!(source.index, 0);
                assert!(destination.is_none());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
