//! In-memory kanban board core: three fixed columns of task cards with
//! add, delete, in-place edit, and drag-drop move transitions.
//!
//! State lives for the session only; there is no persistence. The store
//! publishes immutable [`BoardSnapshot`]s, and a presentation layer renders
//! snapshots and feeds discrete [`BoardEvent`]s back through
//! [`BoardStore::apply`].

pub mod events;
pub mod ident;
pub mod store;
pub mod types;

pub use events::{BoardEvent, DragLocation};
pub use store::{BoardStore, EditDraft};
pub use types::{BoardSnapshot, Column, ColumnId, Task, UnknownColumn};
