//! A batching undo/redo history.
//!
//! Edits are grouped into batches, and undo or redo applies a whole batch at
//! once. A recorded edit starts a new batch (a *checkpoint*) when any of these
//! hold:
//!
//! - the undo stack is empty
//! - a checkpoint was forced, e.g. because the cursor moved or the editor lost
//!   focus, or because the last operation was a redo
//! - the edit is a replacement and the previous one was a pure insertion, or
//!   the other way around
//! - more than `checkpoint_timer` has passed since the previous edit
//! - the batch would grow past `checkpoint_max_characters`
//! - the edit inserts a newline

use std::time::{Duration, Instant};

use super::edit::Edit;
use crate::{
    config::HistoryConfig,
    error::{Error, Result},
};

/// Undo and redo stacks of edit batches.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Maximum gap between edits in the same batch.
    pub checkpoint_timer: Duration,
    /// Maximum chars (inserted plus replaced) in a batch.
    pub checkpoint_max_characters: usize,
    /// Batches that can be undone, oldest first.
    undo_stack: Vec<Vec<Edit>>,
    /// Batches that have been undone and can be redone.
    redo_stack: Vec<Vec<Edit>>,
    /// Time of the most recent edit.
    last_edit_time: Instant,
    /// Chars in the open batch.
    character_count: usize,
    /// Start a new batch on the next edit.
    force_end_batch: bool,
    /// Was the last edit a replacement?
    previously_replaced: bool,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::from_config(&HistoryConfig::default())
    }
}

impl EditHistory {
    /// Construct an empty history.
    pub fn new(checkpoint_timer: Duration, checkpoint_max_characters: usize) -> Self {
        Self {
            checkpoint_timer,
            checkpoint_max_characters,
            undo_stack: vec![],
            redo_stack: vec![],
            last_edit_time: Instant::now(),
            character_count: 0,
            force_end_batch: false,
            previously_replaced: false,
        }
    }

    /// Construct an empty history from configuration. A negative or
    /// non-finite timer is treated as zero.
    pub fn from_config(cfg: &HistoryConfig) -> Self {
        Self::new(
            Duration::try_from_secs_f64(cfg.checkpoint_timer).unwrap_or(Duration::ZERO),
            cfg.checkpoint_max_characters,
        )
    }

    /// Record a performed edit.
    pub fn record_edit(&mut self, edit: Edit) -> Result<()> {
        self.record_edit_at(edit, Instant::now())
    }

    /// Record a performed edit made at time `now`.
    pub fn record_edit_at(&mut self, edit: Edit, now: Instant) -> Result<()> {
        if edit.result().is_none() {
            return Err(Error::History(
                "cannot record an edit before it has been performed".into(),
            ));
        }
        let is_replacement = edit.is_replacement();
        let chars = edit.character_count();

        let new_batch = self.undo_stack.is_empty()
            || self.force_end_batch
            || is_replacement != self.previously_replaced
            || now.saturating_duration_since(self.last_edit_time) > self.checkpoint_timer
            || self.character_count + chars > self.checkpoint_max_characters
            || edit.text.contains('\n');

        match self.undo_stack.last_mut() {
            Some(batch) if !new_batch => {
                batch.push(edit);
                self.character_count += chars;
            }
            _ => {
                tracing::trace!("history checkpoint at batch {}", self.undo_stack.len());
                self.undo_stack.push(vec![edit]);
                self.character_count = chars;
                self.force_end_batch = false;
            }
        }
        self.last_edit_time = now;
        self.previously_replaced = is_replacement;
        self.redo_stack.clear();
        Ok(())
    }

    /// Move the newest batch to the redo stack and return it.
    pub fn pop_undo(&mut self) -> Option<&[Edit]> {
        let batch = self.undo_stack.pop()?;
        self.redo_stack.push(batch);
        self.redo_stack.last().map(Vec::as_slice)
    }

    /// Move the newest undone batch back to the undo stack and return it. The
    /// next recorded edit starts a new batch.
    pub fn pop_redo(&mut self) -> Option<&[Edit]> {
        let batch = self.redo_stack.pop()?;
        self.undo_stack.push(batch);
        self.force_end_batch();
        self.undo_stack.last().map(Vec::as_slice)
    }

    /// Make the next recorded edit start a new batch.
    pub fn force_end_batch(&mut self) {
        self.force_end_batch = true;
    }

    /// Clear both stacks and all batching state.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_edit_time = Instant::now();
        self.character_count = 0;
        self.force_end_batch = false;
        self.previously_replaced = false;
    }

    /// Batches that can be undone, oldest first.
    pub fn undo_stack(&self) -> &[Vec<Edit>] {
        &self.undo_stack
    }

    /// Batches that can be redone, oldest first.
    pub fn redo_stack(&self) -> &[Vec<Edit>] {
        &self.redo_stack
    }
}
