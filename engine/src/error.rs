//! Error types for the roster engine.
//!
//! Decoding, deriving and validating never fail. Errors only describe
//! caller misuse: bad defaults handed to the codec, or a row action that
//! the row's current state does not support.

use thiserror::Error;

/// All possible errors from the roster engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Codec configuration errors
    #[error("unknown view-state field: {0}")]
    UnknownField(String),

    #[error("invalid default for field '{field}': {value:?}")]
    InvalidDefault { field: String, value: String },

    // Row state errors
    #[error("cannot {action} a row that is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
