//! Core pieces for keyboard-driven terminal widgets: key bindings, key
//! dispatch, an undo history for text edits, and a virtualized option list.

// Generated handler tables refer to this crate by name.
extern crate self as understory;

pub use understory_derive::key_handlers;

pub mod bindings;
pub mod cache;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod event;
pub mod geom;
pub mod logging;
pub mod navigation;
pub mod render;
pub mod style;
pub mod visual;
pub mod widgets;

pub use bindings::{BindOptions, Binding, Bindings};
pub use config::Config;
pub use dispatch::{KeyOutcome, KeyTarget, dispatch_key, handle_key, run_action};
pub use error::{Error, Result};
pub use event::{Event, Key, KeyEvent, MouseEvent};
