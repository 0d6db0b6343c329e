//! Splitting engine.
//!
//! Partitions one input into pieces under one of three policies: a fixed
//! number of lines per piece, a fixed number of pieces, or a fixed number
//! of bytes per piece.

mod engine;
mod policy;
mod stream;
mod types;

pub use engine::Splitter;
pub use policy::{PolicySelection, SplitPolicy};
pub use types::{Piece, SplitSummary};
