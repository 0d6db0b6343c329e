//! Buffered input tracking and scoped output pieces.
//!
//! Every read error is tagged with the input offset and every write error
//! with the piece path, so a failed split says exactly where it stopped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use super::types::Piece;
use crate::config::COPY_BUFFER_SIZE;
use crate::error::{Result, SplitError};

/// Forward-only reader that counts consumed bytes.
pub(crate) struct TrackedReader<R> {
    inner: BufReader<R>,
    offset: u64,
}

impl<R: Read> TrackedReader<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            inner: BufReader::with_capacity(COPY_BUFFER_SIZE, input),
            offset: 0,
        }
    }

    /// Bytes consumed so far.
    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    /// Buffer more input if needed; returns the number of buffered bytes,
    /// 0 at end of input.
    fn fill(&mut self) -> Result<usize> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.len()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(SplitError::InputRead {
                        offset: self.offset,
                        source,
                    })
                }
            }
        }
    }

    fn consume(&mut self, amount: usize) {
        self.inner.consume(amount);
        self.offset += amount as u64;
    }

    /// Whether the input is exhausted. Never consumes data.
    pub(crate) fn at_end(&mut self) -> Result<bool> {
        Ok(self.fill()? == 0)
    }

    /// Copy up to `limit` bytes into `piece`, stopping early at end of input.
    ///
    /// Returns the number of bytes copied.
    pub(crate) fn copy_into(&mut self, piece: &mut OutputPiece, limit: u64) -> Result<u64> {
        let mut remaining = limit;

        while remaining > 0 {
            let available = self.fill()?;
            if available == 0 {
                break;
            }

            let take = usize::try_from(remaining).map_or(available, |r| r.min(available));
            piece.write_all(&self.inner.buffer()[..take])?;
            self.consume(take);
            remaining -= take as u64;
        }

        Ok(limit - remaining)
    }

    /// Copy one line, including its `\n` if present, into `piece`.
    ///
    /// Returns the number of bytes copied; 0 means end of input. A final
    /// line without a newline is copied as-is.
    pub(crate) fn copy_line(&mut self, piece: &mut OutputPiece) -> Result<u64> {
        let mut copied = 0;

        loop {
            if self.fill()? == 0 {
                return Ok(copied);
            }

            let buf = self.inner.buffer();
            match buf.iter().position(|&b| b == b'\n') {
                Some(newline) => {
                    let len = newline + 1;
                    piece.write_all(&buf[..len])?;
                    self.consume(len);
                    return Ok(copied + len as u64);
                }
                None => {
                    let len = buf.len();
                    piece.write_all(buf)?;
                    self.consume(len);
                    copied += len as u64;
                }
            }
        }
    }
}

/// An output file that is open for writing.
///
/// Created fresh, written front to back, then closed by [`finish`]. Dropping
/// it without finishing still closes the handle; already written bytes stay
/// on disk.
///
/// [`finish`]: OutputPiece::finish
pub(crate) struct OutputPiece {
    path: PathBuf,
    writer: BufWriter<File>,
    written: u64,
}

impl OutputPiece {
    /// Create (or truncate) the file at `path`.
    pub(crate) fn create(path: PathBuf) -> Result<Self> {
        let file = File::create(&path).map_err(|source| SplitError::OutputCreate {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            writer: BufWriter::with_capacity(COPY_BUFFER_SIZE, file),
            written: 0,
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|source| SplitError::OutputWrite {
                path: self.path.clone(),
                source,
            })?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    /// Flush and close the file.
    pub(crate) fn finish(self) -> Result<Piece> {
        let Self {
            path,
            writer,
            written,
        } = self;

        match writer.into_inner() {
            Ok(file) => drop(file),
            Err(e) => {
                return Err(SplitError::OutputWrite {
                    path,
                    source: e.into_error(),
                })
            }
        }

        tracing::debug!(path = %path.display(), bytes = written, "Wrote piece");
        Ok(Piece::new(path, written))
    }
}
