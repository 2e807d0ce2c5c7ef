//! Text documents, edits and the undo/redo history that records them.

/// Rope-backed document storage.
mod buffer;
/// Atomic document edits.
mod edit;
/// Batching undo/redo history.
pub mod history;

pub use buffer::{Document, Location};
pub use edit::{Edit, EditResult};
pub use history::EditHistory;
