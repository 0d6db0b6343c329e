//! Splitter - split a file or standard input into pieces.
//!
//! This crate partitions one input stream into an ordered sequence of
//! output files, either by a fixed number of lines per piece, a fixed
//! number of pieces, or a fixed number of bytes per piece. Concatenating
//! the pieces in filename order reproduces the input exactly.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use splitter::{SplitPolicy, Splitter};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let splitter = Splitter::new(dir.path(), "x");
//!
//! let mut input = Cursor::new(b"a\nb".to_vec());
//! let summary = splitter
//!     .split(&mut input, SplitPolicy::line_count(1).unwrap())
//!     .unwrap();
//!
//! assert_eq!(summary.piece_count(), 2);
//! assert_eq!(std::fs::read(dir.path().join("xaa")).unwrap(), b"a\n");
//! assert_eq!(std::fs::read(dir.path().join("xab")).unwrap(), b"b");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`naming`]: Output filename sequence (`xaa`, `xab`, ...)
//! - [`input`]: Input sources and length queries
//! - [`splitting`]: Split policies and the split engine
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod naming;
pub mod splitting;

// Re-export commonly used items
pub use error::{Result, SplitError};
pub use input::{InputSource, SplitInput};
pub use naming::{next_suffix, FileNameSequence};
pub use splitting::{Piece, PolicySelection, SplitPolicy, SplitSummary, Splitter};
