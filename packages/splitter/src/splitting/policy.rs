//! Splitting policies.

use std::fmt;
use std::num::NonZeroU64;

use crate::config::DEFAULT_LINE_COUNT;
use crate::error::{Result, SplitError};

/// How the input is partitioned into pieces.
///
/// Counts are always positive; a zero count cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Each piece holds this many lines (the last may hold fewer).
    ByLineCount(NonZeroU64),
    /// Exactly this many pieces; the last absorbs the division remainder.
    ByChunkCount(NonZeroU64),
    /// Each piece holds this many bytes (the last may hold fewer).
    ByByteCount(NonZeroU64),
}

impl SplitPolicy {
    /// Split by line count, rejecting zero.
    pub fn line_count(lines: u64) -> Result<Self> {
        NonZeroU64::new(lines)
            .map(Self::ByLineCount)
            .ok_or(SplitError::InvalidCount("line"))
    }

    /// Split into a fixed number of chunks, rejecting zero.
    pub fn chunk_count(chunks: u64) -> Result<Self> {
        NonZeroU64::new(chunks)
            .map(Self::ByChunkCount)
            .ok_or(SplitError::InvalidCount("chunk"))
    }

    /// Split by byte count, rejecting zero.
    pub fn byte_count(bytes: u64) -> Result<Self> {
        NonZeroU64::new(bytes)
            .map(Self::ByByteCount)
            .ok_or(SplitError::InvalidCount("byte"))
    }

    /// The numeric parameter of the policy.
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            Self::ByLineCount(n) | Self::ByChunkCount(n) | Self::ByByteCount(n) => n.get(),
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByLineCount(n) => write!(f, "lines={n}"),
            Self::ByChunkCount(n) => write!(f, "chunks={n}"),
            Self::ByByteCount(n) => write!(f, "bytes={n}"),
        }
    }
}

/// The policy as selected by a caller.
///
/// Keeps "nothing requested" distinct from an explicit policy so the
/// command-line layer can apply its default without guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicySelection {
    /// No policy was requested.
    #[default]
    Default,
    /// A policy was explicitly requested.
    Explicit(SplitPolicy),
}

impl PolicySelection {
    /// Resolve to a concrete policy, falling back to
    /// [`DEFAULT_LINE_COUNT`] lines per piece.
    #[must_use]
    pub fn resolve(self) -> SplitPolicy {
        match self {
            Self::Explicit(policy) => policy,
            Self::Default => SplitPolicy::ByLineCount(
                NonZeroU64::new(DEFAULT_LINE_COUNT).unwrap_or(NonZeroU64::MIN),
            ),
        }
    }

    /// Whether a policy was explicitly requested.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl From<SplitPolicy> for PolicySelection {
    fn from(policy: SplitPolicy) -> Self {
        Self::Explicit(policy)
    }
}
