use crate::{event::key, geom::Point};

/// Which button an event concerns.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// Moves and scrolls carry no button.
    None,
}

/// What the mouse did.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Pressed.
    Down,
    /// Released.
    Up,
    /// Moved while pressed.
    Drag,
    /// Moved with nothing pressed.
    Moved,
    /// Wheel towards the user.
    ScrollDown,
    /// Wheel away from the user.
    ScrollUp,
    /// Horizontal wheel left.
    ScrollLeft,
    /// Horizontal wheel right.
    ScrollRight,
}

/// A mouse event. The location is relative to the widget receiving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// What happened.
    pub action: Action,
    /// Button involved.
    pub button: Button,
    /// Modifier keys held at the time.
    pub modifiers: key::Mods,
    /// Where it happened.
    pub location: Point,
}

impl MouseEvent {
    /// An event with no modifiers.
    fn plain(action: Action, button: Button, location: Point) -> Self {
        Self {
            action,
            button,
            modifiers: key::Empty,
            location,
        }
    }

    /// A left-button press.
    pub fn click(location: impl Into<Point>) -> Self {
        Self::plain(Action::Down, Button::Left, location.into())
    }

    /// A move with no button held.
    pub fn moved(location: impl Into<Point>) -> Self {
        Self::plain(Action::Moved, Button::None, location.into())
    }

    /// A vertical wheel step.
    pub fn scroll(location: impl Into<Point>, down: bool) -> Self {
        let action = if down {
            Action::ScrollDown
        } else {
            Action::ScrollUp
        };
        Self::plain(action, Button::None, location.into())
    }
}
