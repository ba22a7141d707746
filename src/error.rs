//! Error types and exit codes for treescope.
//!
//! A run either renders the full report or fails before printing anything
//! past the header, so every failure maps to a single [`LocateError`] and a
//! stable process exit code:
//! - `3`: the source file could not be read
//! - `4`: the parser rejected the source
//! - `10`: internal inconsistency (a match's line number falls outside the
//!   source file)
//!
//! Missing command-line arguments are not an error — the binary prints its
//! help text and exits 0.

use std::io;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Stable exit codes for failed queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Source file missing or unreadable.
    FileAccess = 3,
    /// Parser could not produce a usable tree.
    Parse = 4,
    /// Internal errors (parser/line-number inconsistency).
    Internal = 10,
}

impl ErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Unified error type for a locate query.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Source file could not be read.
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The parser rejected the source text.
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A match carried a line number outside the source file. The parser
    /// is trusted for line numbers, so this is an internal inconsistency
    /// and fatal for the query.
    #[error("line {line} out of range: file has {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },
}

impl LocateError {
    /// Create a file access error.
    pub fn file_access(path: impl Into<String>, source: io::Error) -> Self {
        LocateError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        LocateError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LocateError::FileAccess { .. } => ErrorCode::FileAccess,
            LocateError::Parse { .. } => ErrorCode::Parse,
            LocateError::LineOutOfRange { .. } => ErrorCode::Internal,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
