//! Error types shared across the crate.

use std::result::Result as StdResult;

use thiserror::Error;

/// Result type for understory operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A binding key could not be parsed or validated.
    #[error("invalid binding: {0}")]
    InvalidBinding(String),

    /// No binding exists for a key.
    #[error("no binding for {0}")]
    NoBinding(String),

    /// More than one handler matched a single key press.
    #[error(
        "multiple handlers for key press {key:?}: found both {first:?} and {second:?}, \
         and didn't know which to call; consider combining them into a single handler"
    )]
    DuplicateKeyHandlers {
        /// Canonical name of the key that was pressed.
        key: String,
        /// Identifier of the handler that was found first.
        first: String,
        /// Identifier of the conflicting handler.
        second: String,
    },

    /// The edit history was used out of order.
    #[error("history: {0}")]
    History(String),

    /// An option ID is already in use within an option list.
    #[error("duplicate option id: {0}")]
    DuplicateId(String),

    /// A requested option does not exist.
    #[error("option does not exist: {0}")]
    OptionDoesNotExist(String),

    /// Configuration could not be loaded.
    #[error("config: {0}")]
    Config(String),

    /// Internal error.
    #[error("internal: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl Error {
    /// Is this a lookup failure that callers may recover from?
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoBinding(_) | Self::OptionDoesNotExist(_))
    }
}
