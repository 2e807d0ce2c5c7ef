//! Widgets built on the dispatch, history and rendering layers.

/// Scrollable option lists.
pub mod option_list;
/// Undoable text editing.
pub mod text_editor;

pub use option_list::{OptionItem, OptionKey, OptionList, OptionListMessage, OptionMessage};
pub use text_editor::TextEditor;
