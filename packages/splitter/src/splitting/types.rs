//! Types describing the outcome of a split.

use std::path::PathBuf;

/// One output file written by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Full path of the created file.
    pub path: PathBuf,

    /// Number of bytes written into it.
    pub bytes: u64,
}

impl Piece {
    /// Create a new piece record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, bytes: u64) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// The file name without the output directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Pieces created by one split, in filename order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub pieces: Vec<Piece>,
}

impl SplitSummary {
    /// Number of files created.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Total bytes written across all pieces.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.pieces.iter().map(|piece| piece.bytes).sum()
    }

    pub(crate) fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }
}
