//! Edit history batching against a real document.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use understory::{
        Error, Result,
        config::HistoryConfig,
        document::{Document, Edit, EditHistory, Location},
    };

    fn history() -> EditHistory {
        EditHistory::new(Duration::from_secs(2), 100)
    }

    fn performed(doc: &mut Document, text: &str, from: (usize, usize), to: (usize, usize)) -> Edit {
        let mut edit = Edit::new(text, from.into(), to.into(), false);
        edit.perform(doc);
        edit
    }

    #[test]
    fn small_insertions_share_a_batch() -> Result<()> {
        let mut doc = Document::new("");
        let mut h = history();
        let now = Instant::now();
        for (i, c) in ["a", "b", "c"].into_iter().enumerate() {
            let edit = performed(&mut doc, c, (0, i), (0, i));
            h.record_edit_at(edit, now + Duration::from_millis(100 * i as u64))?;
        }
        assert_eq!(h.undo_stack().len(), 1);
        let batch = h.pop_undo().map(<[Edit]>::to_vec).unwrap_or_default();
        assert_eq!(batch.len(), 3);
        for edit in batch.iter().rev() {
            edit.undo(&mut doc)?;
        }
        assert_eq!(doc.text(), "");
        assert_eq!(h.redo_stack().len(), 1);
        Ok(())
    }

    #[test]
    fn replacement_after_insertion_splits() -> Result<()> {
        let mut doc = Document::new("hello");
        let mut h = history();
        let now = Instant::now();
        h.record_edit_at(performed(&mut doc, "!", (0, 5), (0, 5)), now)?;
        h.record_edit_at(performed(&mut doc, "J", (0, 0), (0, 1)), now)?;
        assert_eq!(doc.text(), "Jello!");
        assert_eq!(h.undo_stack().len(), 2);
        Ok(())
    }

    #[test]
    fn timer_newline_and_size_split() -> Result<()> {
        let mut doc = Document::new("");
        let mut h = EditHistory::new(Duration::from_secs(2), 5);
        let t0 = Instant::now();
        h.record_edit_at(performed(&mut doc, "ab", (0, 0), (0, 0)), t0)?;
        h.record_edit_at(performed(&mut doc, "cd", (0, 2), (0, 2)), t0 + Duration::from_secs(3))?;
        assert_eq!(h.undo_stack().len(), 2);
        h.record_edit_at(performed(&mut doc, "efgh", (0, 4), (0, 4)), t0 + Duration::from_secs(3))?;
        assert_eq!(h.undo_stack().len(), 3);
        h.record_edit_at(performed(&mut doc, "\n", (0, 8), (0, 8)), t0 + Duration::from_secs(3))?;
        assert_eq!(h.undo_stack().len(), 4);
        assert_eq!(doc.text(), "abcdefgh\n");
        assert_eq!(doc.end(), Location::new(1, 0));
        Ok(())
    }

    #[test]
    fn redo_then_edit_starts_fresh_batch() -> Result<()> {
        let mut doc = Document::new("");
        let mut h = history();
        let now = Instant::now();
        h.record_edit_at(performed(&mut doc, "a", (0, 0), (0, 0)), now)?;
        h.record_edit_at(performed(&mut doc, "b", (0, 1), (0, 1)), now)?;
        assert!(h.pop_undo().is_some());
        assert!(h.pop_redo().is_some());
        assert!(h.pop_redo().is_none());
        h.record_edit_at(performed(&mut doc, "c", (0, 2), (0, 2)), now)?;
        assert_eq!(h.undo_stack().len(), 2);
        assert_eq!(h.undo_stack()[1].len(), 1);
        assert!(h.redo_stack().is_empty());
        Ok(())
    }

    #[test]
    fn unperformed_edits_are_rejected() {
        let mut h = EditHistory::from_config(&HistoryConfig::default());
        let edit = Edit::insert("x", Location::default());
        assert!(matches!(h.record_edit(edit), Err(Error::History(_))));
        assert!(h.undo_stack().is_empty());
        assert!(h.pop_undo().is_none());
    }
}
