//! Key dispatch through generated handler tables.

#[cfg(test)]
mod tests {
    use understory::{
        Bindings, Error, KeyTarget, Result,
        dispatch::{dispatch_key, handle_key},
        event::key::{Ctrl, KeyCode, KeyEvent},
        key_handlers,
    };

    /// Records which handlers ran.
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        inactive: bool,
        bindings: Bindings,
    }

    #[key_handlers]
    impl Recorder {
        fn key_enter(&mut self) {
            self.log.push("key_enter".into());
        }

        fn _key_enter(&mut self) {
            self.log.push("_key_enter".into());
        }

        fn key_ctrl_i(&mut self) {
            self.log.push("key_ctrl_i".into());
        }

        fn key_tab(&mut self) {
            self.log.push("key_tab".into());
        }

        fn _key_escape(&mut self, event: &KeyEvent) -> bool {
            self.log.push(format!("_key_escape {}", event.name()));
            false
        }

        fn key_upper_a(&mut self) -> Result<()> {
            Err(Error::Internal("boom".into()))
        }

        fn action_greet(&mut self) {
            self.log.push("greet".into());
        }
    }

    impl KeyTarget for Recorder {
        fn screen_active(&self) -> bool {
            !self.inactive
        }

        fn bindings(&self) -> Option<&Bindings> {
            Some(&self.bindings)
        }
    }

    #[test]
    fn public_handler_wins_over_private() -> Result<()> {
        let mut r = Recorder::default();
        assert!(dispatch_key(&mut r, &KeyEvent::with_aliases("enter", ["enter"]))?);
        assert_eq!(r.log, vec!["key_enter"]);
        Ok(())
    }

    #[test]
    fn conflicting_aliases_fail_before_invocation() {
        let mut r = Recorder::default();
        let err = dispatch_key(&mut r, &KeyEvent::with_aliases("tab", ["ctrl+i", "tab"]));
        assert_eq!(
            err,
            Err(Error::DuplicateKeyHandlers {
                key: "tab".into(),
                first: "key_ctrl_i".into(),
                second: "key_tab".into(),
            })
        );
        assert!(r.log.is_empty());

        // The built-in alias table produces the same conflict.
        assert!(matches!(
            dispatch_key(&mut r, &KeyEvent::from(KeyCode::Tab)),
            Err(Error::DuplicateKeyHandlers { .. })
        ));
        assert!(r.log.is_empty());
    }

    #[test]
    fn single_alias_has_no_conflict() -> Result<()> {
        let mut r = Recorder::default();
        assert!(dispatch_key(&mut r, &KeyEvent::with_aliases("tab", ["tab"]))?);
        assert_eq!(r.log, vec!["key_tab"]);
        Ok(())
    }

    #[test]
    fn declined_and_failing_handlers() {
        let mut r = Recorder::default();
        assert_eq!(dispatch_key(&mut r, &KeyEvent::from(KeyCode::Esc)), Ok(false));
        assert_eq!(r.log, vec!["_key_escape escape"]);
        assert_eq!(
            dispatch_key(&mut r, &KeyEvent::from('A')),
            Err(Error::Internal("boom".into()))
        );
        assert_eq!(dispatch_key(&mut r, &KeyEvent::from('z')), Ok(false));
    }

    #[test]
    fn inactive_screens_ignore_keys() -> Result<()> {
        let mut r = Recorder {
            inactive: true,
            ..Default::default()
        };
        assert!(!dispatch_key(&mut r, &KeyEvent::from(KeyCode::Enter))?);
        assert!(r.log.is_empty());
        Ok(())
    }

    #[test]
    fn bindings_take_precedence() -> Result<()> {
        let mut r = Recorder::default();
        r.bindings = Bindings::new([("enter,ctrl+g", "greet", "Greet")])?;
        assert!(handle_key(&mut r, &KeyEvent::from(KeyCode::Enter))?);
        assert!(handle_key(&mut r, &KeyEvent::from(Ctrl + 'g'))?);
        assert_eq!(r.log, vec!["greet", "greet"]);
        Ok(())
    }
}
