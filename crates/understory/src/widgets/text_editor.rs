//! A minimal multi-line text editor.
//!
//! The editor owns a [`Document`], a cursor and an [`EditHistory`]. Every
//! change goes through an [`Edit`] so that it can be undone. Moving the
//! cursor or losing focus closes the open undo batch.

use crate::{
    bindings::Bindings,
    config::Config,
    dispatch::{self, KeyTarget},
    document::{Document, Edit, EditHistory, Location},
    error::Result,
    event::{Event, key::KeyEvent},
    key_handlers,
};

/// A text editor with undo and redo.
#[derive(Debug)]
pub struct TextEditor {
    /// Document being edited.
    document: Document,
    /// Undo history.
    history: EditHistory,
    /// Cursor position.
    cursor: Location,
    /// Key bindings.
    bindings: Bindings,
}

#[key_handlers]
impl TextEditor {
    /// Construct an editor with default configuration.
    pub fn new(text: &str) -> Result<Self> {
        Self::from_config(text, &Config::default())
    }

    /// Construct an editor from configuration.
    pub fn from_config(text: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            document: Document::new(text),
            history: EditHistory::from_config(&cfg.history),
            cursor: Location::default(),
            bindings: Bindings::new([("ctrl+z", "undo", "Undo"), ("ctrl+y", "redo", "Redo")])?,
        })
    }

    /// The document text.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The edit history.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Mutable access to the edit history, e.g. to adjust checkpointing.
    pub fn history_mut(&mut self) -> &mut EditHistory {
        &mut self.history
    }

    /// The cursor position.
    pub fn cursor(&self) -> Location {
        self.cursor
    }

    /// Key bindings.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    /// Perform an edit, move the cursor and record the edit.
    pub fn edit(&mut self, mut edit: Edit) -> Result<()> {
        edit.perform(&mut self.document);
        self.cursor = edit.after_location(self.cursor);
        self.history.record_edit(edit)
    }

    /// Insert text at the cursor.
    pub fn insert(&mut self, text: &str) -> Result<()> {
        self.edit(Edit::insert(text, self.cursor))
    }

    /// Replace the text between two locations.
    pub fn replace(&mut self, text: &str, from: Location, to: Location) -> Result<()> {
        self.edit(Edit::new(text, from, to, true))
    }

    /// The location one character before `loc`, if there is one.
    fn previous(&self, loc: Location) -> Option<Location> {
        if loc.column > 0 {
            Some(Location::new(loc.row, loc.column - 1))
        } else if loc.row > 0 {
            Some(Location::new(loc.row - 1, self.document.line_len(loc.row - 1)))
        } else {
            None
        }
    }

    /// The location one character after `loc`, if there is one.
    fn next(&self, loc: Location) -> Option<Location> {
        if loc.column < self.document.line_len(loc.row) {
            Some(Location::new(loc.row, loc.column + 1))
        } else if loc.row + 1 < self.document.line_count() {
            Some(Location::new(loc.row + 1, 0))
        } else {
            None
        }
    }

    /// Delete the character before the cursor. Returns false at the start
    /// of the document.
    pub fn delete_backward(&mut self) -> Result<bool> {
        let Some(from) = self.previous(self.cursor) else {
            return Ok(false);
        };
        self.edit(Edit::delete(from, self.cursor))?;
        Ok(true)
    }

    /// Move the cursor, clamped into the document. Closes the open undo
    /// batch.
    pub fn move_cursor(&mut self, loc: Location) {
        self.cursor = self.document.clamp(loc);
        self.history.force_end_batch();
    }

    /// The editor lost focus. Closes the open undo batch.
    pub fn blur(&mut self) {
        self.history.force_end_batch();
    }

    /// Undo the most recent batch. Returns false if there was nothing to
    /// undo.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(batch) = self.history.pop_undo() else {
            return Ok(false);
        };
        for edit in batch.iter().rev() {
            self.cursor = edit.undo(&mut self.document)?;
        }
        Ok(true)
    }

    /// Redo the most recently undone batch. Returns false if there was
    /// nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(batch) = self.history.pop_redo() else {
            return Ok(false);
        };
        for edit in batch {
            self.cursor = edit.redo(&mut self.document)?;
        }
        Ok(true)
    }

    /// Offer a key to the editor. Keys that no binding or handler claims
    /// are inserted if they are printable.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<bool> {
        if dispatch::handle_key(self, event)? {
            return Ok(true);
        }
        match event.character() {
            Some(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Offer an input event. Pastes are inserted at the cursor and losing
    /// focus closes the open undo batch. Returns true if the event was
    /// consumed.
    pub fn on_event(&mut self, event: &Event) -> Result<bool> {
        match event {
            Event::Key(k) => self.handle_key(&KeyEvent::from(*k)),
            Event::Paste(text) => {
                self.insert(text)?;
                Ok(true)
            }
            Event::FocusLost => {
                self.blur();
                Ok(true)
            }
            Event::Mouse(_) | Event::Resize(_) | Event::FocusGained => Ok(false),
        }
    }

    /// Undo.
    pub fn action_undo(&mut self) -> Result<bool> {
        self.undo()
    }

    /// Redo.
    pub fn action_redo(&mut self) -> Result<bool> {
        self.redo()
    }

    /// Insert a newline.
    fn key_enter(&mut self) -> Result<()> {
        self.insert("\n")
    }

    /// Delete backwards.
    fn key_backspace(&mut self) -> Result<bool> {
        self.delete_backward()
    }

    /// Move left one character.
    fn key_left(&mut self) -> bool {
        match self.previous(self.cursor) {
            Some(loc) => {
                self.move_cursor(loc);
                true
            }
            None => false,
        }
    }

    /// Move right one character.
    fn key_right(&mut self) -> bool {
        match self.next(self.cursor) {
            Some(loc) => {
                self.move_cursor(loc);
                true
            }
            None => false,
        }
    }
}

impl KeyTarget for TextEditor {
    fn bindings(&self) -> Option<&Bindings> {
        Some(&self.bindings)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::event::key::{Ctrl, Key, KeyCode};

    fn editor(text: &str) -> Result<TextEditor> {
        let mut e = TextEditor::new(text)?;
        e.history_mut().checkpoint_timer = Duration::from_secs(60);
        Ok(e)
    }

    #[test]
    fn typing_batches() -> Result<()> {
        let mut e = editor("")?;
        for c in "abc".chars() {
            e.handle_key(&KeyEvent::from(c))?;
        }
        assert_eq!(e.text(), "abc");
        assert_eq!(e.cursor(), Location::new(0, 3));
        assert_eq!(e.history().undo_stack().len(), 1);

        assert!(e.undo()?);
        assert_eq!(e.text(), "");
        assert_eq!(e.cursor(), Location::new(0, 0));
        assert!(e.redo()?);
        assert_eq!(e.text(), "abc");
        assert!(!e.redo()?);
        Ok(())
    }

    #[test]
    fn cursor_moves_checkpoint() -> Result<()> {
        let mut e = editor("")?;
        e.insert("ab")?;
        e.move_cursor(Location::new(0, 1));
        e.insert("X")?;
        assert_eq!(e.text(), "aXb");
        assert_eq!(e.history().undo_stack().len(), 2);
        e.blur();
        e.insert("Y")?;
        assert_eq!(e.history().undo_stack().len(), 3);

        e.undo()?;
        e.undo()?;
        assert_eq!(e.text(), "ab");
        Ok(())
    }

    #[test]
    fn keys() -> Result<()> {
        let mut e = editor("ab")?;
        e.move_cursor(Location::new(0, 2));
        assert!(e.handle_key(&KeyEvent::from(KeyCode::Enter))?);
        e.handle_key(&KeyEvent::from('c'))?;
        assert_eq!(e.text(), "ab\nc");
        assert!(e.handle_key(&KeyEvent::from(KeyCode::Left))?);
        assert!(e.handle_key(&KeyEvent::from(KeyCode::Left))?);
        assert_eq!(e.cursor(), Location::new(0, 2));
        assert!(e.handle_key(&KeyEvent::from(KeyCode::Right))?);
        assert_eq!(e.cursor(), Location::new(1, 0));
        assert!(e.handle_key(&KeyEvent::from(KeyCode::Backspace))?);
        assert_eq!(e.text(), "abc");

        assert!(e.handle_key(&KeyEvent::from(Ctrl + 'z'))?);
        assert_eq!(e.text(), "ab\nc");
        assert!(e.handle_key(&KeyEvent::from(Ctrl + 'y'))?);
        assert_eq!(e.text(), "abc");
        assert!(!e.handle_key(&KeyEvent::from(KeyCode::F(1)))?);

        e.move_cursor(Location::new(0, 0));
        assert!(!e.delete_backward()?);
        assert!(!e.handle_key(&KeyEvent::from(KeyCode::Left))?);
        Ok(())
    }

    #[test]
    fn events() -> Result<()> {
        let mut e = editor("")?;
        assert!(e.on_event(&Event::Key(Key::from('a')))?);
        assert!(e.on_event(&Event::Paste("bc".into()))?);
        assert_eq!(e.text(), "abc");
        assert_eq!(e.cursor(), Location::new(0, 3));
        assert_eq!(e.history().undo_stack().len(), 1);

        assert!(e.on_event(&Event::FocusLost)?);
        e.insert("d")?;
        assert_eq!(e.history().undo_stack().len(), 2);
        assert!(!e.on_event(&Event::FocusGained)?);
        assert!(!e.on_event(&Event::Resize((10, 2).into()))?);
        Ok(())
    }

    #[test]
    fn replace_keeps_cursor_offset() -> Result<()> {
        let mut e = editor("hello world")?;
        e.move_cursor(Location::new(0, 11));
        e.replace("there", Location::new(0, 6), Location::new(0, 11))?;
        assert_eq!(e.text(), "hello there");
        e.replace("hi", Location::new(0, 0), Location::new(0, 5))?;
        assert_eq!(e.text(), "hi there");
        assert_eq!(e.cursor(), Location::new(0, 8));
        e.undo()?;
        assert_eq!(e.text(), "hello world");
        Ok(())
    }
}
