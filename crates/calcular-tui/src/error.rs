//! Error types for the shell
//!
//! Engine faults never surface here: the engine folds them into its display
//! sentinel. These errors cover the shell's own edges, terminal plumbing,
//! script files, and logging setup.

use thiserror::Error;

/// Result type for shell operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the shell
#[derive(Debug, Error)]
pub enum CliError {
    /// A replay script contained a byte outside the key alphabet
    #[error("Invalid script character: {character:?}")]
    Script {
        /// The offending character
        character: char,
    },

    /// Logging setup error
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a script error
    #[must_use]
    pub const fn script(character: char) -> Self {
        Self::Script { character }
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
