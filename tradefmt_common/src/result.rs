//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `FormatError`, so fallible helpers can simply
//! return `Result<T>`.
use crate::error::FormatError;

/// Workspace-wide `Result` alias with `FormatError` as the default error.
pub type Result<T, E = FormatError> = std::result::Result<T, E>;
