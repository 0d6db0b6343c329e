//! Input sources for the splitter.
//!
//! The engine only needs a forward reader. The chunk-count policy also needs
//! the total length up front, which [`SplitInput::byte_len`] provides.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, Stdin};
use std::path::Path;

use crate::error::{Result, SplitError};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A readable input whose length may be queried.
pub trait SplitInput: Read {
    /// Number of bytes the input will still yield from its current position.
    ///
    /// Sources that cannot know their length return an error; callers must
    /// not fall back to reading until end-of-input.
    fn byte_len(&mut self) -> io::Result<u64>;
}

impl SplitInput for File {
    fn byte_len(&mut self) -> io::Result<u64> {
        let metadata = self.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "input is not a regular file",
            ));
        }
        Ok(metadata.len().saturating_sub(self.stream_position()?))
    }
}

impl<T: AsRef<[u8]>> SplitInput for Cursor<T> {
    fn byte_len(&mut self) -> io::Result<u64> {
        let total = self.get_ref().as_ref().len() as u64;
        Ok(total.saturating_sub(self.position()))
    }
}

impl SplitInput for &[u8] {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

impl SplitInput for Stdin {
    #[cfg(unix)]
    fn byte_len(&mut self) -> io::Result<u64> {
        use std::os::fd::AsFd;

        // Redirected regular files can be stat'ed; pipes and terminals cannot.
        let fd = self.as_fd().try_clone_to_owned()?;
        File::from(fd).byte_len()
    }

    #[cfg(not(unix))]
    fn byte_len(&mut self) -> io::Result<u64> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "size of standard input cannot be determined",
        ))
    }
}

/// An opened input: a file or standard input.
#[derive(Debug)]
pub enum InputSource {
    File(File),
    Stdin(Stdin),
}

impl InputSource {
    /// Open `path`, or standard input when `path` is `-`.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            return Ok(Self::Stdin(io::stdin()));
        }

        File::open(path)
            .map(Self::File)
            .map_err(|source| SplitError::InputOpen {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Short description for log messages.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Stdin(_) => "stdin",
        }
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Stdin(stdin) => stdin.read(buf),
        }
    }
}

impl SplitInput for InputSource {
    fn byte_len(&mut self) -> io::Result<u64> {
        match self {
            Self::File(file) => file.byte_len(),
            Self::Stdin(stdin) => stdin.byte_len(),
        }
    }
}
