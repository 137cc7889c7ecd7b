//! The single error type for the wordhuff library.
//!
//! Every stage of the pipeline is a deterministic in-memory computation, so errors are never
//! retried. They are handed straight back to the caller, which decides whether to abort or report.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// Malformed arguments, such as a BWT key outside the block or a character with no code.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Tokenizing or tree building was asked to work on nothing.
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// The bitstream could not be resolved back into symbols.
    #[error("Decode error at bit {position}: {reason}")]
    Decode { position: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, HuffError>;
