//! Split engine that partitions one input into a sequence of output files.

use std::io;
use std::path::{Path, PathBuf};

use super::policy::SplitPolicy;
use super::stream::{OutputPiece, TrackedReader};
use super::types::SplitSummary;
use crate::config::DEFAULT_PREFIX;
use crate::error::{Result, SplitError};
use crate::input::SplitInput;
use crate::naming::FileNameSequence;

/// Engine for splitting an input into pieces named `<prefix><suffix>`.
///
/// Concatenating the pieces in the order they are reported reproduces the
/// input byte for byte. Pieces are written one at a time; each is closed
/// before the next name is drawn. Existing files with a colliding name are
/// overwritten, other files in the directory are left alone.
#[derive(Debug, Clone)]
pub struct Splitter {
    output_dir: PathBuf,
    prefix: String,
}

impl Splitter {
    /// Create an engine writing into `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Create an engine using the default `x` prefix.
    #[must_use]
    pub fn with_default_prefix(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir, DEFAULT_PREFIX)
    }

    /// Directory pieces are written into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Filename prefix of every piece.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split `input` according to `policy`.
    ///
    /// Every call starts a fresh filename sequence at `aa`. On failure the
    /// pieces written so far stay on disk.
    pub fn split<R: SplitInput>(&self, input: &mut R, policy: SplitPolicy) -> Result<SplitSummary> {
        let span = tracing::debug_span!(
            "split",
            %policy,
            dir = %self.output_dir.display(),
            prefix = %self.prefix
        );
        let _guard = span.enter();

        let mut names = FileNameSequence::new(self.prefix.as_str());
        let summary = match policy {
            SplitPolicy::ByLineCount(lines) => self.split_by_lines(input, &mut names, lines.get()),
            SplitPolicy::ByChunkCount(chunks) => {
                self.split_by_chunks(input, &mut names, chunks.get())
            }
            SplitPolicy::ByByteCount(bytes) => self.split_by_bytes(input, &mut names, bytes.get()),
        }?;

        tracing::debug!(
            pieces = summary.piece_count(),
            bytes = summary.total_bytes(),
            "Split complete"
        );
        Ok(summary)
    }

    /// Pieces of `lines` lines each; the last piece holds the remainder.
    ///
    /// A piece is only created once there is data for it, so empty input
    /// yields no files and an exact multiple leaves no trailing empty piece.
    fn split_by_lines<R: SplitInput>(
        &self,
        input: &mut R,
        names: &mut FileNameSequence,
        lines: u64,
    ) -> Result<SplitSummary> {
        let mut reader = TrackedReader::new(input);
        let mut summary = SplitSummary::default();

        while !reader.at_end()? {
            let mut piece = self.create_piece(names)?;
            for _ in 0..lines {
                if reader.copy_line(&mut piece)? == 0 {
                    break;
                }
            }
            summary.push(piece.finish()?);
        }

        Ok(summary)
    }

    /// Exactly `chunks` pieces; the last absorbs the division remainder.
    ///
    /// All pieces are created even when the input is shorter than the
    /// chunk count, in which case the leading pieces are empty.
    fn split_by_chunks<R: SplitInput>(
        &self,
        input: &mut R,
        names: &mut FileNameSequence,
        chunks: u64,
    ) -> Result<SplitSummary> {
        let total = input
            .byte_len()
            .map_err(|source| SplitError::InputStat { source })?;
        let base = total / chunks;
        let last = total - base * (chunks - 1);
        tracing::debug!(total, base, last, "Computed chunk sizes");

        let mut reader = TrackedReader::new(input);
        let mut summary = SplitSummary::default();

        for index in 0..chunks {
            let size = if index == chunks - 1 { last } else { base };

            let mut piece = self.create_piece(names)?;
            let copied = reader.copy_into(&mut piece, size)?;
            if copied < size {
                return Err(SplitError::InputRead {
                    offset: reader.offset(),
                    source: io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("input ended before its reported size of {total} bytes"),
                    ),
                });
            }
            summary.push(piece.finish()?);
        }

        Ok(summary)
    }

    /// Pieces of `bytes` bytes each; the last piece holds the remainder.
    fn split_by_bytes<R: SplitInput>(
        &self,
        input: &mut R,
        names: &mut FileNameSequence,
        bytes: u64,
    ) -> Result<SplitSummary> {
        let mut reader = TrackedReader::new(input);
        let mut summary = SplitSummary::default();

        while !reader.at_end()? {
            let mut piece = self.create_piece(names)?;
            reader.copy_into(&mut piece, bytes)?;
            summary.push(piece.finish()?);
        }

        Ok(summary)
    }

    fn create_piece(&self, names: &mut FileNameSequence) -> Result<OutputPiece> {
        OutputPiece::create(names.next_path_in(&self.output_dir))
    }
}
