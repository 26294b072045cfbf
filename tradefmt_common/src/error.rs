//! Error types shared by the formatting library and the command-line front end.
//!
//! Formatters never fail: they degrade to placeholder values. `FormatError` only
//! covers the fallible edges around them, such as loading instrument, position or
//! settings documents from JSON.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error while reading a document from a file or stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding a JSON document via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Instrument descriptor is present but unusable (e.g. unknown type on the command line).
    #[error("Invalid instrument: {0}")]
    InvalidInstrument(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
