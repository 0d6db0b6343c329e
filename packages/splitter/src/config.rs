//! Configuration constants and validation functions for the splitter.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SplitError};

/// Prefix used for output names when none is given.
pub const DEFAULT_PREFIX: &str = "x";

/// First suffix of every filename sequence.
pub const INITIAL_SUFFIX: &str = "aa";

/// Lines per piece when no policy is selected.
pub const DEFAULT_LINE_COUNT: u64 = 1000;

/// Size of the buffer used when copying byte ranges into a piece.
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Prefix pattern: at least one character, no path separators or NUL.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00]+$").expect("valid regex"));

/// Validate a filename prefix.
///
/// Pieces are always created directly inside the output directory, so the
/// prefix may not contain path separators.
///
/// # Examples
/// ```
/// use splitter::config::validate_prefix;
///
/// assert!(validate_prefix("x").is_ok());
/// assert!(validate_prefix("part-").is_ok());
/// assert!(validate_prefix("").is_err());
/// assert!(validate_prefix("../x").is_err());
/// ```
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if PREFIX_PATTERN.is_match(prefix) {
        Ok(())
    } else {
        Err(SplitError::InvalidPrefix(prefix.to_string()))
    }
}

/// Validate that the output directory exists and is a directory.
pub fn validate_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(SplitError::OutputDirectory {
            path: dir.to_path_buf(),
            reason: "does not exist".to_string(),
        });
    }
    if !dir.is_dir() {
        return Err(SplitError::OutputDirectory {
            path: dir.to_path_buf(),
            reason: "is not a directory".to_string(),
        });
    }
    Ok(())
}
