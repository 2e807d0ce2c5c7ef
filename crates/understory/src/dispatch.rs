//! Key dispatch.
//!
//! Each node type carries a static table of key handlers and actions, usually
//! generated by the [`key_handlers`](crate::key_handlers) attribute. Methods
//! named `key_<name>` are public handlers, `_key_<name>` private fallbacks and
//! `action_<name>` actions that bindings can run. A key press is resolved by
//! walking its alias list and converting each alias into a handler name.

use crate::{
    bindings::Bindings,
    error::{Error, Result},
    event::key::{KeyEvent, key_to_identifier},
};

/// The result of offering a key to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed.
    Handled,
    /// The handler looked at the key and chose not to consume it.
    Declined,
    /// No handler was found.
    Unhandled,
}

impl KeyOutcome {
    /// Was the key consumed?
    pub fn is_handled(&self) -> bool {
        *self == Self::Handled
    }
}

/// Conversion from handler return values into a [`KeyOutcome`].
///
/// Handlers returning `()` always handle the key. A `bool` return declines
/// the key when false.
pub trait IntoKeyOutcome {
    /// Convert into an outcome.
    fn into_key_outcome(self) -> Result<KeyOutcome>;
}

impl IntoKeyOutcome for () {
    fn into_key_outcome(self) -> Result<KeyOutcome> {
        Ok(KeyOutcome::Handled)
    }
}

impl IntoKeyOutcome for bool {
    fn into_key_outcome(self) -> Result<KeyOutcome> {
        Ok(if self {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Declined
        })
    }
}

impl IntoKeyOutcome for KeyOutcome {
    fn into_key_outcome(self) -> Result<KeyOutcome> {
        Ok(self)
    }
}

impl<T: IntoKeyOutcome> IntoKeyOutcome for Result<T> {
    fn into_key_outcome(self) -> Result<KeyOutcome> {
        self?.into_key_outcome()
    }
}

/// Whether a key handler uses the public or private naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `key_<name>`
    Public,
    /// `_key_<name>`
    Private,
}

/// Signature of a generated key handler shim.
pub type KeyHandlerFn<N> = fn(&mut N, &KeyEvent) -> Result<KeyOutcome>;

/// Signature of a generated action shim.
pub type ActionFn<N> = fn(&mut N) -> Result<KeyOutcome>;

/// A registered key handler.
pub struct HandlerEntry<N: 'static> {
    /// Method identifier, e.g. `key_ctrl_i`.
    pub ident: &'static str,
    /// Key identifier the handler responds to, e.g. `ctrl_i`.
    pub key: &'static str,
    /// Naming convention the handler was registered under.
    pub visibility: Visibility,
    /// Invocation shim.
    pub handler: KeyHandlerFn<N>,
}

/// A registered action.
pub struct ActionEntry<N: 'static> {
    /// Action name without the `action_` prefix.
    pub name: &'static str,
    /// Invocation shim.
    pub action: ActionFn<N>,
}

/// Static handler tables for a node type.
pub trait Handlers: Sized + 'static {
    /// Key handlers for this type.
    fn key_handlers() -> &'static [HandlerEntry<Self>] {
        &[]
    }

    /// Actions for this type.
    fn actions() -> &'static [ActionEntry<Self>] {
        &[]
    }
}

/// A node that can receive key presses.
pub trait KeyTarget: Handlers {
    /// Is the screen governing this node the active one? Key handlers are not
    /// run for nodes on inactive screens.
    fn screen_active(&self) -> bool {
        true
    }

    /// Key bindings for this node.
    fn bindings(&self) -> Option<&Bindings> {
        None
    }
}

/// Find the handler for a key identifier, preferring the public convention.
pub fn find_key_handler<N: Handlers>(key: &str) -> Option<&'static HandlerEntry<N>> {
    let handlers = N::key_handlers();
    handlers
        .iter()
        .find(|h| h.visibility == Visibility::Public && h.key == key)
        .or_else(|| {
            handlers
                .iter()
                .find(|h| h.visibility == Visibility::Private && h.key == key)
        })
}

/// Find an action by name.
pub fn find_action<N: Handlers>(name: &str) -> Option<&'static ActionEntry<N>> {
    N::actions().iter().find(|a| a.name == name)
}

/// Dispatch a key press to a handler on `node`.
///
/// Every alias of the key is checked. The first alias with a handler selects
/// it, and a handler with a different identifier on any later alias is an
/// error. No handler runs in that case. Returns true if a handler consumed
/// the key.
pub fn dispatch_key<N: KeyTarget>(node: &mut N, event: &KeyEvent) -> Result<bool> {
    if event.name().is_empty() {
        return Ok(false);
    }
    let mut found: Option<&'static HandlerEntry<N>> = None;
    for alias in event.aliases() {
        let Some(entry) = find_key_handler::<N>(&key_to_identifier(alias)) else {
            continue;
        };
        match found {
            None => {
                if !node.screen_active() {
                    tracing::trace!("screen inactive, not dispatching {}", event.name());
                    return Ok(false);
                }
                found = Some(entry);
            }
            Some(first) if first.ident != entry.ident => {
                tracing::error!(
                    "duplicate key handlers for {}: {} and {}",
                    event.name(),
                    first.ident,
                    entry.ident
                );
                return Err(Error::DuplicateKeyHandlers {
                    key: event.name().to_string(),
                    first: first.ident.to_string(),
                    second: entry.ident.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    let Some(entry) = found else {
        return Ok(false);
    };
    tracing::trace!("dispatching {} to {}", event.name(), entry.ident);
    match (entry.handler)(node, event)? {
        KeyOutcome::Handled => Ok(true),
        outcome => {
            tracing::debug!("{} did not handle {}: {:?}", entry.ident, event.name(), outcome);
            Ok(false)
        }
    }
}

/// Run a named action on `node`. Unknown actions are not errors.
pub fn run_action<N: Handlers>(node: &mut N, action: &str) -> Result<bool> {
    match find_action::<N>(action) {
        Some(entry) => Ok((entry.action)(node)?.is_handled()),
        None => {
            tracing::warn!("unknown action: {}", action);
            Ok(false)
        }
    }
}

/// Run the action bound to a key press, if any. Universal bindings are
/// consulted first, then the remaining bindings, each in alias order.
pub fn check_bindings<N: KeyTarget>(node: &mut N, event: &KeyEvent) -> Result<bool> {
    for universal in [true, false] {
        for alias in event.aliases() {
            let action = match node.bindings().and_then(|b| b.get(alias)) {
                Some(b) if b.universal == universal => b.action.clone(),
                _ => continue,
            };
            tracing::trace!("binding {} -> {}", alias, action);
            if run_action(node, &action)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Offer a key press to `node`: bindings first, then key handlers.
pub fn handle_key<N: KeyTarget>(node: &mut N, event: &KeyEvent) -> Result<bool> {
    if check_bindings(node, event)? {
        return Ok(true);
    }
    dispatch_key(node, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::key::{Ctrl, KeyCode};

    #[derive(Default)]
    struct Manual {
        log: Vec<&'static str>,
        active: bool,
        bindings: Bindings,
    }

    impl Manual {
        fn new() -> Self {
            Self {
                active: true,
                ..Default::default()
            }
        }

        fn shim_tab(n: &mut Self, _: &KeyEvent) -> Result<KeyOutcome> {
            n.log.push("key_tab");
            Ok(KeyOutcome::Handled)
        }

        fn shim_private_tab(n: &mut Self, _: &KeyEvent) -> Result<KeyOutcome> {
            n.log.push("_key_tab");
            Ok(KeyOutcome::Handled)
        }

        fn shim_x(n: &mut Self, _: &KeyEvent) -> Result<KeyOutcome> {
            n.log.push("key_x");
            Ok(KeyOutcome::Declined)
        }

        fn shim_bell(n: &mut Self) -> Result<KeyOutcome> {
            n.log.push("action_bell");
            Ok(KeyOutcome::Handled)
        }

        const KEYS: &'static [HandlerEntry<Self>] = &[
            HandlerEntry {
                ident: "_key_tab",
                key: "tab",
                visibility: Visibility::Private,
                handler: Self::shim_private_tab,
            },
            HandlerEntry {
                ident: "key_tab",
                key: "tab",
                visibility: Visibility::Public,
                handler: Self::shim_tab,
            },
            HandlerEntry {
                ident: "key_x",
                key: "x",
                visibility: Visibility::Public,
                handler: Self::shim_x,
            },
        ];

        const ACTIONS: &'static [ActionEntry<Self>] = &[ActionEntry {
            name: "bell",
            action: Self::shim_bell,
        }];
    }

    impl Handlers for Manual {
        fn key_handlers() -> &'static [HandlerEntry<Self>] {
            Self::KEYS
        }

        fn actions() -> &'static [ActionEntry<Self>] {
            Self::ACTIONS
        }
    }

    impl KeyTarget for Manual {
        fn screen_active(&self) -> bool {
            self.active
        }

        fn bindings(&self) -> Option<&Bindings> {
            Some(&self.bindings)
        }
    }

    #[test]
    fn public_before_private() -> Result<()> {
        let mut n = Manual::new();
        assert!(dispatch_key(&mut n, &KeyEvent::with_aliases("tab", ["tab"]))?);
        assert_eq!(n.log, vec!["key_tab"]);
        Ok(())
    }

    #[test]
    fn aliases_without_handlers() -> Result<()> {
        let mut n = Manual::new();
        assert!(dispatch_key(&mut n, &KeyEvent::from(KeyCode::Tab))?);
        assert!(!dispatch_key(&mut n, &KeyEvent::from(Ctrl + 'q'))?);
        assert_eq!(n.log, vec!["key_tab"]);
        Ok(())
    }

    #[test]
    fn declined_and_inactive() -> Result<()> {
        let mut n = Manual::new();
        assert!(!dispatch_key(&mut n, &KeyEvent::from('x'))?);
        assert_eq!(n.log, vec!["key_x"]);

        n.active = false;
        assert!(!dispatch_key(&mut n, &KeyEvent::from(KeyCode::Tab))?);
        assert_eq!(n.log, vec!["key_x"]);

        assert!(!dispatch_key(&mut n, &KeyEvent::with_aliases("", Vec::<String>::new()))?);
        Ok(())
    }

    #[test]
    fn bindings_run_actions() -> Result<()> {
        let mut n = Manual::new();
        n.bindings = Bindings::new([("b", "bell", ""), ("n", "nonexistent", "")])?;
        assert!(handle_key(&mut n, &KeyEvent::from('b'))?);
        assert!(!handle_key(&mut n, &KeyEvent::from('n'))?);
        assert!(run_action(&mut n, "bell")?);
        assert!(!run_action(&mut n, "missing")?);
        assert_eq!(n.log, vec!["action_bell", "action_bell"]);
        Ok(())
    }
}
