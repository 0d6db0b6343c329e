//! Error types for the splitter.
//!
//! Engine failures carry the piece path or input offset that failed so the
//! caller can report exactly where a split stopped. Already written pieces
//! are never rolled back.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Reading the input failed (end-of-input is not an error).
    #[error("Cannot read input at byte offset {offset}: {source}")]
    InputRead {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// The input length could not be determined (chunk-count policy only).
    #[error("Cannot determine input size: {source}")]
    InputStat {
        #[source]
        source: std::io::Error,
    },

    /// An output piece could not be created.
    #[error("Cannot create file {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to (or flushing) an output piece failed.
    #[error("Cannot write file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A policy count was zero.
    #[error("Invalid {0} count: must be a positive integer")]
    InvalidCount(&'static str),

    /// The filename prefix cannot be used to name files in one directory.
    #[error("Invalid prefix: '{0}'. Expected a non-empty name without path separators")]
    InvalidPrefix(String),

    /// The output directory is missing or not a directory.
    #[error("Output directory {}: {reason}", .path.display())]
    OutputDirectory { path: PathBuf, reason: String },

    /// The input file could not be opened.
    #[error("Cannot open input {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More than one splitting policy was requested.
    #[error("Cannot split in more than one way")]
    ConflictingPolicies,
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
