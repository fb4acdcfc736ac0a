//! Error types for chess engine
//!
//! Illegal moves are not errors: [`Position::apply_move`](crate::Position::apply_move)
//! answers them with `false`. The variants here cover notation parsing,
//! configuration loading, player input and broken undo bookkeeping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug)]
pub enum ChessEngineError {
    /// Undo requested with no move on the history stack
    #[error("Cannot undo: move history is empty")]
    EmptyHistory,

    /// Move or tile notation could not be parsed
    #[error("Invalid notation {input:?}: {reason}")]
    InvalidNotation { input: String, reason: &'static str },

    /// Configuration file could not be read or written
    #[error("Config file I/O failed for {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for [`EngineConfig`](crate::EngineConfig)
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds a value the engine cannot use
    #[error("Invalid config value for {field}: {reason}")]
    ConfigValue { field: &'static str, reason: String },

    /// A player's input stream failed
    #[error("Failed to read player input: {0}")]
    Input(#[from] std::io::Error),
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
