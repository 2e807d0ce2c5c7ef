//! Input events and their translation from the terminal backend.

/// Keyboard input.
pub mod key;
/// Mouse input.
pub mod mouse;

use crossterm::event as cevent;

pub use key::{Key, KeyEvent};
pub use mouse::MouseEvent;

use crate::geom::{Expanse, Point};

/// This enum represents all the event types that drive a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keystroke.
    Key(Key),
    /// A mouse action.
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize(Expanse),
    /// Terminal has gained focus.
    FocusGained,
    /// Terminal has lost focus.
    FocusLost,
    /// Cut and paste.
    Paste(String),
}

impl From<cevent::Event> for Event {
    fn from(e: cevent::Event) -> Self {
        translate_event(e)
    }
}

impl From<cevent::KeyEvent> for Key {
    fn from(k: cevent::KeyEvent) -> Self {
        translate_key(k)
    }
}

/// Translate crossterm key modifiers into our modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a crossterm mouse button.
fn translate_button(b: cevent::MouseButton) -> mouse::Button {
    match b {
        cevent::MouseButton::Left => mouse::Button::Left,
        cevent::MouseButton::Right => mouse::Button::Right,
        cevent::MouseButton::Middle => mouse::Button::Middle,
    }
}

/// Translate a crossterm media key.
fn translate_media(k: cevent::MediaKeyCode) -> key::MediaKeyCode {
    match k {
        cevent::MediaKeyCode::Play => key::MediaKeyCode::Play,
        cevent::MediaKeyCode::Pause => key::MediaKeyCode::Pause,
        cevent::MediaKeyCode::PlayPause => key::MediaKeyCode::PlayPause,
        cevent::MediaKeyCode::Reverse => key::MediaKeyCode::Reverse,
        cevent::MediaKeyCode::Stop => key::MediaKeyCode::Stop,
        cevent::MediaKeyCode::FastForward => key::MediaKeyCode::FastForward,
        cevent::MediaKeyCode::Rewind => key::MediaKeyCode::Rewind,
        cevent::MediaKeyCode::TrackNext => key::MediaKeyCode::TrackNext,
        cevent::MediaKeyCode::TrackPrevious => key::MediaKeyCode::TrackPrevious,
        cevent::MediaKeyCode::Record => key::MediaKeyCode::Record,
        cevent::MediaKeyCode::LowerVolume => key::MediaKeyCode::LowerVolume,
        cevent::MediaKeyCode::RaiseVolume => key::MediaKeyCode::RaiseVolume,
        cevent::MediaKeyCode::MuteVolume => key::MediaKeyCode::MuteVolume,
    }
}

/// Translate a crossterm modifier key.
fn translate_modifier(m: cevent::ModifierKeyCode) -> key::ModifierKeyCode {
    match m {
        cevent::ModifierKeyCode::LeftShift => key::ModifierKeyCode::LeftShift,
        cevent::ModifierKeyCode::LeftControl => key::ModifierKeyCode::LeftControl,
        cevent::ModifierKeyCode::LeftAlt => key::ModifierKeyCode::LeftAlt,
        cevent::ModifierKeyCode::LeftSuper => key::ModifierKeyCode::LeftSuper,
        cevent::ModifierKeyCode::LeftHyper => key::ModifierKeyCode::LeftHyper,
        cevent::ModifierKeyCode::LeftMeta => key::ModifierKeyCode::LeftMeta,
        cevent::ModifierKeyCode::RightShift => key::ModifierKeyCode::RightShift,
        cevent::ModifierKeyCode::RightControl => key::ModifierKeyCode::RightControl,
        cevent::ModifierKeyCode::RightAlt => key::ModifierKeyCode::RightAlt,
        cevent::ModifierKeyCode::RightSuper => key::ModifierKeyCode::RightSuper,
        cevent::ModifierKeyCode::RightHyper => key::ModifierKeyCode::RightHyper,
        cevent::ModifierKeyCode::RightMeta => key::ModifierKeyCode::RightMeta,
        cevent::ModifierKeyCode::IsoLevel3Shift => key::ModifierKeyCode::IsoLevel3Shift,
        cevent::ModifierKeyCode::IsoLevel5Shift => key::ModifierKeyCode::IsoLevel5Shift,
    }
}

/// Translate a crossterm key event.
fn translate_key(k: cevent::KeyEvent) -> Key {
    Key {
        mods: translate_key_modifiers(k.modifiers),
        key: match k.code {
            cevent::KeyCode::Backspace => key::KeyCode::Backspace,
            cevent::KeyCode::Enter => key::KeyCode::Enter,
            cevent::KeyCode::Left => key::KeyCode::Left,
            cevent::KeyCode::Right => key::KeyCode::Right,
            cevent::KeyCode::Up => key::KeyCode::Up,
            cevent::KeyCode::Down => key::KeyCode::Down,
            cevent::KeyCode::Home => key::KeyCode::Home,
            cevent::KeyCode::End => key::KeyCode::End,
            cevent::KeyCode::PageUp => key::KeyCode::PageUp,
            cevent::KeyCode::PageDown => key::KeyCode::PageDown,
            cevent::KeyCode::Tab => key::KeyCode::Tab,
            cevent::KeyCode::BackTab => key::KeyCode::BackTab,
            cevent::KeyCode::Delete => key::KeyCode::Delete,
            cevent::KeyCode::Insert => key::KeyCode::Insert,
            cevent::KeyCode::F(x) => key::KeyCode::F(x),
            cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
            cevent::KeyCode::Null => key::KeyCode::Null,
            cevent::KeyCode::Esc => key::KeyCode::Esc,
            cevent::KeyCode::CapsLock => key::KeyCode::CapsLock,
            cevent::KeyCode::ScrollLock => key::KeyCode::ScrollLock,
            cevent::KeyCode::NumLock => key::KeyCode::NumLock,
            cevent::KeyCode::PrintScreen => key::KeyCode::PrintScreen,
            cevent::KeyCode::Pause => key::KeyCode::Pause,
            cevent::KeyCode::Menu => key::KeyCode::Menu,
            cevent::KeyCode::KeypadBegin => key::KeyCode::KeypadBegin,
            cevent::KeyCode::Media(k) => key::KeyCode::Media(translate_media(k)),
            cevent::KeyCode::Modifier(m) => key::KeyCode::Modifier(translate_modifier(m)),
        },
    }
}

/// Translate a crossterm mouse event.
fn translate_mouse(m: cevent::MouseEvent) -> MouseEvent {
    use cevent::MouseEventKind as K;
    use mouse::{Action, Button};

    let (action, button) = match m.kind {
        K::Down(b) => (Action::Down, translate_button(b)),
        K::Up(b) => (Action::Up, translate_button(b)),
        K::Drag(b) => (Action::Drag, translate_button(b)),
        K::Moved => (Action::Moved, Button::None),
        K::ScrollDown => (Action::ScrollDown, Button::None),
        K::ScrollUp => (Action::ScrollUp, Button::None),
        K::ScrollLeft => (Action::ScrollLeft, Button::None),
        K::ScrollRight => (Action::ScrollRight, Button::None),
    };
    MouseEvent {
        action,
        button,
        modifiers: translate_key_modifiers(m.modifiers),
        location: Point {
            x: m.column.into(),
            y: m.row.into(),
        },
    }
}

/// Translate a crossterm event.
fn translate_event(e: cevent::Event) -> Event {
    match e {
        cevent::Event::Key(k) => Event::Key(translate_key(k)),
        cevent::Event::Mouse(m) => Event::Mouse(translate_mouse(m)),
        cevent::Event::Resize(x, y) => Event::Resize(Expanse::new(x.into(), y.into())),
        cevent::Event::FocusGained => Event::FocusGained,
        cevent::Event::FocusLost => Event::FocusLost,
        cevent::Event::Paste(s) => Event::Paste(s),
    }
}
