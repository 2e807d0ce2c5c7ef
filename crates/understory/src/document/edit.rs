use super::buffer::{Document, Location};
use crate::error::{Error, Result};

/// What performing an edit did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// Where the inserted text ends.
    pub end_location: Location,
    /// The text that the edit removed.
    pub replaced_text: String,
}

/// A single replacement of the text between two locations.
///
/// An edit must be performed before it can be recorded in a history or
/// undone. Performing it captures the replaced text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Text to insert.
    pub text: String,
    /// Start of the replaced range.
    pub from: Location,
    /// End of the replaced range.
    pub to: Location,
    /// Keep the cursor's offset from the edit rather than moving it to the
    /// end of the inserted text.
    pub maintain_selection_offset: bool,
    /// Set once the edit has been performed.
    result: Option<EditResult>,
}

impl Edit {
    /// Construct an edit that has not yet been performed.
    pub fn new(text: impl Into<String>, from: Location, to: Location, maintain_selection_offset: bool) -> Self {
        Self {
            text: text.into(),
            from,
            to,
            maintain_selection_offset,
            result: None,
        }
    }

    /// An insertion at a single location.
    pub fn insert(text: impl Into<String>, at: Location) -> Self {
        Self::new(text, at, at, false)
    }

    /// A deletion of a range.
    pub fn delete(from: Location, to: Location) -> Self {
        Self::new("", from, to, false)
    }

    /// The earlier of the two range endpoints.
    fn top(&self) -> Location {
        self.from.min(self.to)
    }

    /// The later of the two range endpoints.
    fn bottom(&self) -> Location {
        self.from.max(self.to)
    }

    /// Apply the edit to a document.
    pub fn perform(&mut self, doc: &mut Document) -> &EditResult {
        let r = doc.replace_range(self.top(), self.bottom(), &self.text);
        self.result.insert(r)
    }

    /// The result of performing this edit, if it has been performed.
    pub fn result(&self) -> Option<&EditResult> {
        self.result.as_ref()
    }

    /// The recorded result, or an error if the edit was never performed.
    fn performed(&self) -> Result<&EditResult> {
        self.result
            .as_ref()
            .ok_or_else(|| Error::History("edit has not been performed".into()))
    }

    /// Reverse the edit, restoring the replaced text. Returns the location
    /// where the restored text ends.
    pub fn undo(&self, doc: &mut Document) -> Result<Location> {
        let r = self.performed()?;
        Ok(doc
            .replace_range(self.top(), r.end_location, &r.replaced_text)
            .end_location)
    }

    /// Reapply an undone edit.
    pub fn redo(&self, doc: &mut Document) -> Result<Location> {
        self.performed()?;
        Ok(doc
            .replace_range(self.top(), self.bottom(), &self.text)
            .end_location)
    }

    /// Did performing the edit remove any text? Unperformed edits are not
    /// replacements.
    pub fn is_replacement(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| !r.replaced_text.is_empty())
    }

    /// Chars inserted plus chars replaced.
    pub fn character_count(&self) -> usize {
        let replaced = self
            .result
            .as_ref()
            .map_or(0, |r| r.replaced_text.chars().count());
        self.text.chars().count() + replaced
    }

    /// Where a cursor at `cursor` should sit after this edit.
    ///
    /// Without `maintain_selection_offset` the cursor moves to the end of the
    /// inserted text. Otherwise a cursor before the edit stays put, one after
    /// it shifts with the text, and one inside the replaced range moves to
    /// the end of the insertion.
    pub fn after_location(&self, cursor: Location) -> Location {
        let Some(r) = &self.result else {
            return cursor;
        };
        if !self.maintain_selection_offset {
            return r.end_location;
        }
        let (top, bottom) = (self.top(), self.bottom());
        if cursor < top {
            cursor
        } else if cursor <= bottom {
            r.end_location
        } else if cursor.row == bottom.row {
            Location::new(
                r.end_location.row,
                r.end_location.column + (cursor.column - bottom.column),
            )
        } else {
            let row = cursor.row + r.end_location.row - bottom.row;
            Location::new(row, cursor.column)
        }
    }
}
