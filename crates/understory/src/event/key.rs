//! This module contains the core primitives to represent keyboard input.
//!
//! Every key press has a canonical *name* (`a`, `upper_a`, `ctrl+i`,
//! `pagedown`, `exclamation_mark`) and an ordered list of *aliases*: names
//! that a terminal cannot distinguish from the canonical one. Handlers and
//! bindings are looked up by these names.
use std::{fmt, ops::Add, str::FromStr};

use convert_case::{Case, Casing};

use crate::error::{Error, Result};

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Physical modifier key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum ModifierKeyCode {
    /// Left Shift key.
    LeftShift,
    /// Left Control key.
    LeftControl,
    /// Left Alt key.
    LeftAlt,
    /// Left Super key.
    LeftSuper,
    /// Left Hyper key.
    LeftHyper,
    /// Left Meta key.
    LeftMeta,
    /// Right Shift key.
    RightShift,
    /// Right Control key.
    RightControl,
    /// Right Alt key.
    RightAlt,
    /// Right Super key.
    RightSuper,
    /// Right Hyper key.
    RightHyper,
    /// Right Meta key.
    RightMeta,
    /// Iso Level3 Shift key.
    IsoLevel3Shift,
    /// Iso Level5 Shift key.
    IsoLevel5Shift,
}

/// Media key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum MediaKeyCode {
    /// Play media key.
    Play,
    /// Pause media key.
    Pause,
    /// Play/Pause media key.
    PlayPause,
    /// Reverse media key.
    Reverse,
    /// Stop media key.
    Stop,
    /// Fast-forward media key.
    FastForward,
    /// Rewind media key.
    Rewind,
    /// Next-track media key.
    TrackNext,
    /// Previous-track media key.
    TrackPrevious,
    /// Record media key.
    Record,
    /// Lower-volume media key.
    LowerVolume,
    /// Raise-volume media key.
    RaiseVolume,
    /// Mute media key.
    MuteVolume,
}

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Null key code.
    Null,
    /// Escape key.
    Esc,
    /// Caps lock key.
    CapsLock,
    /// Scroll lock key.
    ScrollLock,
    /// Num lock key.
    NumLock,
    /// Print screen key.
    PrintScreen,
    /// Pause key.
    Pause,
    /// Menu key.
    Menu,
    /// Keypad "begin" key.
    KeypadBegin,
    /// F key.
    ///
    /// `KeyCode::F(1)` represents F1 key, etc.
    F(u8),
    /// A character.
    Char(char),
    /// Media key code.
    Media(MediaKeyCode),
    /// Modifier key code.
    Modifier(ModifierKeyCode),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Named keys and their canonical names.
const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::Backspace, "backspace"),
    (KeyCode::Enter, "enter"),
    (KeyCode::Left, "left"),
    (KeyCode::Right, "right"),
    (KeyCode::Up, "up"),
    (KeyCode::Down, "down"),
    (KeyCode::Home, "home"),
    (KeyCode::End, "end"),
    (KeyCode::PageUp, "pageup"),
    (KeyCode::PageDown, "pagedown"),
    (KeyCode::Tab, "tab"),
    (KeyCode::Delete, "delete"),
    (KeyCode::Insert, "insert"),
    (KeyCode::Null, "null"),
    (KeyCode::Esc, "escape"),
    (KeyCode::CapsLock, "caps_lock"),
    (KeyCode::ScrollLock, "scroll_lock"),
    (KeyCode::NumLock, "num_lock"),
    (KeyCode::PrintScreen, "print_screen"),
    (KeyCode::Pause, "pause"),
    (KeyCode::Menu, "menu"),
    (KeyCode::KeypadBegin, "keypad_begin"),
];

/// Punctuation characters and the names used for them in bindings.
const CHARACTER_NAMES: &[(char, &str)] = &[
    (' ', "space"),
    ('!', "exclamation_mark"),
    ('"', "quotation_mark"),
    ('#', "number_sign"),
    ('$', "dollar_sign"),
    ('%', "percent_sign"),
    ('&', "ampersand"),
    ('\'', "apostrophe"),
    ('(', "left_parenthesis"),
    (')', "right_parenthesis"),
    ('*', "asterisk"),
    ('+', "plus"),
    (',', "comma"),
    ('-', "minus"),
    ('.', "full_stop"),
    ('/', "slash"),
    (':', "colon"),
    (';', "semicolon"),
    ('<', "less_than_sign"),
    ('=', "equals_sign"),
    ('>', "greater_than_sign"),
    ('?', "question_mark"),
    ('@', "at"),
    ('[', "left_square_bracket"),
    ('\\', "backslash"),
    (']', "right_square_bracket"),
    ('^', "circumflex_accent"),
    ('_', "underscore"),
    ('`', "grave_accent"),
    ('{', "left_curly_bracket"),
    ('|', "vertical_line"),
    ('}', "right_curly_bracket"),
    ('~', "tilde"),
];

/// Groups of names a terminal reports identically. The first entry of each
/// group is the name produced for the physical key.
const ALIAS_GROUPS: &[&[&str]] = &[
    &["tab", "ctrl+i"],
    &["enter", "ctrl+m"],
    &["escape", "ctrl+left_square_bracket"],
    &["backspace", "ctrl+h"],
    &["ctrl+space", "ctrl+at"],
    &["ctrl+j", "newline"],
];

/// Keys that should be preserved verbatim in text input.
const LEAVE_INTACT: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];

/// Return the binding name for a single character.
fn character_name(c: char) -> String {
    if let Some((_, name)) = CHARACTER_NAMES.iter().find(|(ch, _)| *ch == c) {
        return (*name).to_string();
    }
    if c.is_ascii_uppercase() {
        return format!("upper_{}", c.to_ascii_lowercase());
    }
    c.to_string()
}

/// Suggest a valid binding key for a key string that failed validation.
///
/// Returns `None` when no substitution is known.
pub fn suggest_binding_key(key: &str) -> Option<String> {
    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    CHARACTER_NAMES
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, name)| (*name).to_string())
}

/// Convert a key name into the identifier fragment used for handler lookup.
///
/// `ctrl+i` becomes `ctrl_i`, so its handler is `key_ctrl_i`.
pub fn key_to_identifier(name: &str) -> String {
    name.replace('+', "_").to_lowercase()
}

/// Return the ordered alias list for a key name, starting with the name itself.
pub fn name_aliases(name: &str) -> Vec<String> {
    let mut out = vec![name.to_string()];
    for group in ALIAS_GROUPS {
        if group.contains(&name) {
            out.extend(
                group
                    .iter()
                    .filter(|alias| **alias != name)
                    .map(|alias| (*alias).to_string()),
            );
        }
    }
    out
}

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Handling of the shift key is the most intricate part of this module.
    /// When we receive an event, it includes the shift modifier and also the
    /// modified character - e.g. "shift + A" or "shift + (". However, when
    /// users bind keys, it's more intuitive to bind just "A" or "(". We don't
    /// know what the keyboard mapping or input method is for the user, so it's
    /// not possible in a general way to map between an input like "shift + 0"
    /// and the shifted key "(".
    ///
    /// We therefore apply a lossy normalisation before naming a key:
    ///
    /// - If shift is present:
    ///     - If the key is ascii lowercase, convert it to uppercase and remove
    ///       shift
    ///     - If the key is one of a special class of characters that commonly
    ///       don't have a shift conversion (space, enter), leave shift intact
    ///     - in all other cases, just remove shift
    ///
    /// | input             | normalization    |
    /// |-------------------|------------------|
    /// | shift + A         | A                |
    /// | shift + a         | A                |
    /// | shift + )         | )                |
    /// | shift + enter     | shift + enter    |
    /// | shift + ctrl + A  | ctrl + A         |
    pub fn normalize(&self) -> Self {
        if !self.mods.shift {
            return *self;
        }
        let unshifted = Mods {
            shift: false,
            ..self.mods
        };
        match self.key {
            KeyCode::Char(c) if c.is_ascii_lowercase() => Self {
                mods: unshifted,
                key: KeyCode::Char(c.to_ascii_uppercase()),
            },
            _ if LEAVE_INTACT.contains(&self.key) => *self,
            KeyCode::Char(_) => Self {
                mods: unshifted,
                key: self.key,
            },
            _ => *self,
        }
    }

    /// The canonical name of this key, after normalization.
    pub fn name(&self) -> String {
        let k = self.normalize();
        let mut mods = k.mods;
        let base = match k.key {
            KeyCode::BackTab => {
                mods.shift = true;
                "tab".to_string()
            }
            KeyCode::F(n) => format!("f{n}"),
            KeyCode::Char(c) => character_name(c),
            KeyCode::Media(m) => format!("media_{}", format!("{m:?}").to_case(Case::Snake)),
            KeyCode::Modifier(m) => format!("{m:?}").to_case(Case::Snake),
            code => NAMED_KEYS
                .iter()
                .find(|(kc, _)| *kc == code)
                .map(|(_, name)| (*name).to_string())
                .unwrap_or_default(),
        };
        let mut parts = Vec::new();
        if mods.ctrl {
            parts.push("ctrl".to_string());
        }
        if mods.alt {
            parts.push("alt".to_string());
        }
        if mods.shift {
            parts.push("shift".to_string());
        }
        parts.push(base);
        parts.join("+")
    }

    /// The printable character produced by this key, if any.
    pub fn character(&self) -> Option<char> {
        match self.normalize() {
            Key {
                mods: Mods {
                    ctrl: false,
                    alt: false,
                    ..
                },
                key: KeyCode::Char(c),
            } if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// A human-readable label for help displays, e.g. `Ctrl+Z` or `!`.
    pub fn display(&self) -> String {
        let k = self.normalize();
        let mut parts = Vec::new();
        if k.mods.ctrl {
            parts.push("Ctrl".to_string());
        }
        if k.mods.alt {
            parts.push("Alt".to_string());
        }
        if k.mods.shift {
            parts.push("Shift".to_string());
        }
        let base = match k.key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if k.mods.ctrl || k.mods.alt => c.to_uppercase().to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => Self::from(k.key).name().to_case(Case::Title),
        };
        parts.push(base);
        parts.join("+")
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse a single base key name (no modifiers) into a key code.
fn parse_base(name: &str) -> Option<KeyCode> {
    if let Some((code, _)) = NAMED_KEYS.iter().find(|(_, n)| *n == name) {
        return Some(*code);
    }
    if let Some((c, _)) = CHARACTER_NAMES.iter().find(|(_, n)| *n == name) {
        return Some(KeyCode::Char(*c));
    }
    if let Some(rest) = name.strip_prefix("upper_") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_lowercase()
        {
            return Some(KeyCode::Char(c.to_ascii_uppercase()));
        }
    }
    if let Some(n) = name.strip_prefix('f')
        && let Ok(n) = n.parse::<u8>()
    {
        return Some(KeyCode::F(n));
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeyCode::Char(c)),
        _ => None,
    }
}

impl FromStr for Key {
    type Err = Error;

    /// Parse a key name such as `ctrl+z`, `pagedown` or `upper_a`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidBinding("empty key".into()));
        }
        let parts: Vec<&str> = s.split('+').collect();
        let (base, modifiers) = match parts.split_last() {
            // "+" and "ctrl++" name the plus character itself.
            Some((&"", rest)) => match rest.split_last() {
                Some((&"", modifiers)) => ("plus", modifiers),
                _ => return Err(Error::InvalidBinding(format!("dangling modifier in {s:?}"))),
            },
            Some((base, rest)) => (*base, rest),
            None => return Err(Error::InvalidBinding(s.into())),
        };
        let mut mods = Empty;
        for m in modifiers {
            match m.to_lowercase().as_str() {
                "ctrl" | "control" => mods.ctrl = true,
                "alt" | "meta" => mods.alt = true,
                "shift" => mods.shift = true,
                _ => return Err(Error::InvalidBinding(format!("unknown modifier {m:?} in {s:?}"))),
            }
        }
        let key = parse_base(base)
            .ok_or_else(|| Error::InvalidBinding(format!("unknown key {base:?}")))?;
        let key = if mods.shift && key == KeyCode::Tab {
            mods.shift = false;
            KeyCode::BackTab
        } else {
            key
        };
        Ok(Self { mods, key })
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // If there are modifiers, we never match.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}

/// A key press as seen by the dispatcher: a canonical name plus the ordered
/// names it may also be known by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Canonical key name. Empty when the input layer could not name the key.
    name: String,
    /// Alias names in priority order. The canonical name comes first.
    aliases: Vec<String>,
    /// Printable character for this key, if any.
    character: Option<char>,
}

impl KeyEvent {
    /// Construct an event with an explicit alias list.
    pub fn with_aliases<S: Into<String>>(
        name: impl Into<String>,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            character: None,
        }
    }

    /// Construct an event for a key name, deriving aliases from the built-in
    /// alias table.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let aliases = name_aliases(&name);
        Self {
            name,
            aliases,
            character: None,
        }
    }

    /// The canonical key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias names in priority order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The printable character for this key, if any.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Is this key printable?
    pub fn is_printable(&self) -> bool {
        self.character.is_some()
    }
}

impl From<Key> for KeyEvent {
    fn from(k: Key) -> Self {
        let name = k.name();
        let aliases = name_aliases(&name);
        Self {
            name,
            aliases,
            character: k.character(),
        }
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Key::from(c).into()
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(c: KeyCode) -> Self {
        Key::from(c).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() -> Result<()> {
        assert_eq!((Shift + 'A').normalize(), 'A',);
        assert_eq!((Shift + 'a').normalize(), 'A',);
        assert_eq!((Shift + ')').normalize(), ')',);
        assert_eq!((Shift + ' ').normalize(), Shift + ' ');
        assert_eq!((Shift + KeyCode::Enter).normalize(), Shift + KeyCode::Enter);
        assert_eq!((Shift + Alt + 'A').normalize(), Alt + 'A',);
        Ok(())
    }

    #[test]
    fn names() {
        assert_eq!(Key::from('a').name(), "a");
        assert_eq!((Shift + 'a').name(), "upper_a");
        assert_eq!(Key::from('!').name(), "exclamation_mark");
        assert_eq!(Key::from(' ').name(), "space");
        assert_eq!((Ctrl + 'i').name(), "ctrl+i");
        assert_eq!(Key::from(KeyCode::PageDown).name(), "pagedown");
        assert_eq!(Key::from(KeyCode::BackTab).name(), "shift+tab");
        assert_eq!(Key::from(KeyCode::F(5)).name(), "f5");
        assert_eq!(Key::from(KeyCode::Esc).name(), "escape");
        assert_eq!(
            Key::from(KeyCode::Media(MediaKeyCode::PlayPause)).name(),
            "media_play_pause"
        );
        assert_eq!((Ctrl + Alt + KeyCode::Up).name(), "ctrl+alt+up");
    }

    #[test]
    fn aliases() {
        let ev = KeyEvent::from(KeyCode::Tab);
        assert_eq!(ev.aliases(), &["tab".to_string(), "ctrl+i".to_string()]);
        let ev = KeyEvent::from(Ctrl + 'i');
        assert_eq!(ev.aliases(), &["ctrl+i".to_string(), "tab".to_string()]);
        let ev = KeyEvent::from('x');
        assert_eq!(ev.aliases(), &["x".to_string()]);
        assert_eq!(ev.character(), Some('x'));
        assert_eq!(KeyEvent::from(Ctrl + 'x').character(), None);
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("ctrl+z".parse::<Key>()?, Ctrl + 'z');
        assert_eq!("pagedown".parse::<Key>()?, Key::from(KeyCode::PageDown));
        assert_eq!("upper_a".parse::<Key>()?, Key::from('A'));
        assert_eq!("exclamation_mark".parse::<Key>()?, Key::from('!'));
        assert_eq!("shift+tab".parse::<Key>()?, Key::from(KeyCode::BackTab));
        assert_eq!("f12".parse::<Key>()?, Key::from(KeyCode::F(12)));
        assert_eq!("ctrl++".parse::<Key>()?, Ctrl + '+');
        assert!("hyper+a".parse::<Key>().is_err());
        assert!("nosuchkey".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        Ok(())
    }

    #[test]
    fn parse_roundtrips_names() -> Result<()> {
        for k in [
            Key::from('a'),
            Key::from('A'),
            Key::from('?'),
            Ctrl + 'c',
            Alt + KeyCode::Left,
            Key::from(KeyCode::BackTab),
        ] {
            assert_eq!(k.name().parse::<Key>()?, k);
        }
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!((Ctrl + 'z').display(), "Ctrl+Z");
        assert_eq!(Key::from('!').display(), "!");
        assert_eq!(Key::from(KeyCode::PageUp).display(), "Pageup");
        assert_eq!(Key::from(' ').display(), "Space");
    }

    #[test]
    fn suggestions() {
        assert_eq!(suggest_binding_key("!").as_deref(), Some("exclamation_mark"));
        assert_eq!(suggest_binding_key("ab"), None);
        assert_eq!(key_to_identifier("ctrl+i"), "ctrl_i");
    }
}
