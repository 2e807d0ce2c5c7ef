//! Option list behaviour through the public API.

#[cfg(test)]
mod tests {
    use understory::{
        Error, Result,
        config::OptionListConfig,
        event::MouseEvent,
        geom::Expanse,
        style::OptionListStyles,
        widgets::{OptionItem, OptionList, OptionListMessage},
    };

    fn numbered(n: usize) -> Result<OptionList> {
        let mut list = OptionList::new()?;
        list.add_options(
            (0..n).map(|i| Some(OptionItem::new(format!("option {i}")).with_id(format!("o{i}")))),
        )?;
        list.resize(Expanse::new(20, 4));
        Ok(list)
    }

    #[test]
    fn divider_marks_previous_option() -> Result<()> {
        let mut list = OptionList::new()?;
        list.resize(Expanse::new(8, 4));
        list.add_options([Some("A".into()), None, Some("B".into())])?;
        assert_eq!(list.option_count(), 2);
        assert!(list.get_option_at_index(0)?.has_divider());
        assert!(!list.get_option_at_index(1)?.has_divider());
        assert_eq!(list.virtual_height(), 3);

        // A leading divider has nothing to attach to.
        let mut empty = OptionList::new()?;
        empty.add_options([None])?;
        assert_eq!(empty.option_count(), 0);
        assert_eq!(empty.virtual_height(), 0);
        Ok(())
    }

    #[test]
    fn removal_shifts_indices() -> Result<()> {
        let mut list = numbered(5)?;
        list.remove_option("o1")?;
        assert_eq!(list.get_option_index("o0")?, 0);
        assert_eq!(list.get_option_index("o2")?, 1);
        assert_eq!(list.get_option_index("o4")?, 3);
        for (i, option) in list.options().iter().enumerate() {
            assert_eq!(list.index_of(option.key()), Some(i));
        }
        assert!(matches!(list.remove_option("o1"), Err(Error::OptionDoesNotExist(_))));
        assert_eq!(list.lines().len(), 4);
        Ok(())
    }

    #[test]
    fn removal_clamps_highlight() -> Result<()> {
        let mut list = numbered(3)?;
        list.set_highlighted(Some(2));
        list.remove_option_at_index(2)?;
        assert_eq!(list.highlighted(), Some(1));
        Ok(())
    }

    #[test]
    fn disabled_highlight_moves_forward() -> Result<()> {
        let mut list = numbered(4)?;
        list.set_highlighted(Some(1));
        list.disable_option("o1")?;
        assert_eq!(list.highlighted(), Some(2));
        list.disable_option("o3")?;
        list.disable_option("o2")?;
        assert_eq!(list.highlighted(), Some(0));
        list.disable_option("o0")?;
        assert_eq!(list.highlighted(), None);

        // Cursor movement over an entirely disabled list keeps the highlight.
        list.action_cursor_down();
        assert_eq!(list.highlighted(), None);
        list.enable_option("o2")?;
        list.action_cursor_down();
        assert_eq!(list.highlighted(), Some(2));
        Ok(())
    }

    #[test]
    fn messages_carry_option_details() -> Result<()> {
        let mut list = numbered(3)?;
        list.action_cursor_down();
        list.action_cursor_down();
        list.action_select();
        let msgs = list.take_messages();
        assert_eq!(msgs.len(), 3);
        let OptionListMessage::Selected(m) = &msgs[2] else {
            panic!("expected a selection, got {:?}", msgs[2]);
        };
        assert_eq!(m.index, 1);
        assert_eq!(m.option_id.as_deref(), Some("o1"));
        assert_eq!(m.list, list.id());
        assert_eq!(Some(m.option), list.highlighted_option().map(|o| o.key()));
        assert!(list.take_messages().is_empty());
        Ok(())
    }

    #[test]
    fn wrapped_options_page_by_rows() -> Result<()> {
        let mut list = OptionList::new()?;
        list.resize(Expanse::new(10, 3));
        list.add_options([
            Some("one".into()),
            Some("two words and more".into()),
            Some("three".into()),
            Some("four".into()),
            Some("five".into()),
        ])?;
        // "two words and more" takes two rows at width 10.
        assert_eq!(list.lines()[1..3], [(1, 0), (1, 1)]);
        list.action_page_down();
        assert_eq!(list.highlighted(), Some(2));
        list.action_page_down();
        assert_eq!(list.highlighted(), Some(4));
        // Row 2 is the second row of option 1.
        list.action_page_up();
        assert_eq!(list.highlighted(), Some(1));
        Ok(())
    }

    #[test]
    fn unwrapped_options_truncate() -> Result<()> {
        let mut list = OptionList::from_config(&OptionListConfig {
            wrap: false,
            render_cache_size: 4,
        })?;
        list.resize(Expanse::new(6, 2));
        list.add_option("a long prompt")?;
        assert_eq!(list.virtual_height(), 1);
        assert_eq!(list.render_line(0).text(), "a long");
        list.set_wrap(true);
        assert_eq!(list.virtual_height(), 2);
        assert_eq!(list.render_line(1).text(), "prompt");
        Ok(())
    }

    #[test]
    fn style_changes_rerender() -> Result<()> {
        let mut list = numbered(2)?;
        let before = list.render_line(0);
        let mut styles = OptionListStyles::default();
        styles.option = styles.hover;
        list.set_styles(styles.clone());
        let after = list.render_line(0);
        assert_eq!(before.text(), after.text());
        assert_eq!(after.segments()[0].style, styles.hover);
        Ok(())
    }

    #[test]
    fn mouse_scroll_is_clamped() -> Result<()> {
        let mut list = numbered(6)?;
        for _ in 0..10 {
            list.on_mouse(&MouseEvent::scroll((0, 0), true));
        }
        assert_eq!(list.scroll_offset(), 2);
        assert_eq!(list.render_line(0).option(), Some(2));
        Ok(())
    }
}
