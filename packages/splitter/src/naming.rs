//! Output filename sequence: a fixed prefix followed by an alphabetic suffix.
//!
//! Suffixes count like base-26 numbers with digits `a`..`z`, starting at
//! `"aa"`. When every letter is `z` the suffix grows by one letter instead
//! of wrapping, so names stay in concatenation order.

use std::path::{Path, PathBuf};

use crate::config::INITIAL_SUFFIX;

/// Compute the successor of an alphabetic suffix.
///
/// `suffix` must consist of lowercase ASCII letters `a`..`z`.
///
/// # Examples
/// ```
/// use splitter::naming::next_suffix;
///
/// assert_eq!(next_suffix("aa"), "ab");
/// assert_eq!(next_suffix("az"), "ba");
/// assert_eq!(next_suffix("zz"), "aaa");
/// ```
#[must_use]
pub fn next_suffix(suffix: &str) -> String {
    debug_assert!(
        suffix.bytes().all(|b| b.is_ascii_lowercase()),
        "suffix must be lowercase ASCII letters: {suffix:?}"
    );
    let mut letters: Vec<char> = suffix.chars().collect();

    for letter in letters.iter_mut().rev() {
        if *letter < 'z' {
            *letter = char::from(*letter as u8 + 1);
            return letters.into_iter().collect();
        }
        *letter = 'a';
    }

    // Full carry-out: every letter was 'z'.
    letters.insert(0, 'a');
    letters.into_iter().collect()
}

/// Lazily advancing, restartable sequence of output filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameSequence {
    prefix: String,
    suffix: String,
}

impl FileNameSequence {
    /// Create a sequence positioned at `<prefix>aa`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: INITIAL_SUFFIX.to_string(),
        }
    }

    /// The fixed prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The current suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The current full filename, without advancing.
    #[must_use]
    pub fn current(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }

    /// Return the current filename and move to the next one.
    pub fn advance(&mut self) -> String {
        let name = self.current();
        self.suffix = next_suffix(&self.suffix);
        name
    }

    /// Restart the sequence at the initial suffix.
    pub fn reset(&mut self) {
        self.suffix = INITIAL_SUFFIX.to_string();
    }

    /// Return the path of the current filename inside `dir` and advance.
    pub fn next_path_in(&mut self, dir: &Path) -> PathBuf {
        dir.join(self.advance())
    }
}

impl Iterator for FileNameSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_suffix_simple_increment() {
        assert_eq!(next_suffix("aa"), "ab");
        assert_eq!(next_suffix("ay"), "az");
        assert_eq!(next_suffix("zy"), "zz");
    }

    #[test]
    fn test_next_suffix_carry() {
        assert_eq!(next_suffix("az"), "ba");
        assert_eq!(next_suffix("bzz"), "caa");
        assert_eq!(next_suffix("azz"), "baa");
    }

    #[test]
    fn test_next_suffix_grows_on_overflow() {
        assert_eq!(next_suffix("z"), "aa");
        assert_eq!(next_suffix("zz"), "aaa");
        assert_eq!(next_suffix("zzz"), "aaaa");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "lowercase ASCII letters")]
    fn test_next_suffix_rejects_non_letters() {
        let _ = next_suffix("a1");
    }

    #[test]
    fn test_sequence_boundary_names() {
        let names: Vec<String> = FileNameSequence::new("x").take(26 * 26 + 1).collect();
        let successor = |name: &str| {
            let idx = names.iter().position(|n| n == name).unwrap();
            names[idx + 1].clone()
        };

        assert_eq!(successor("xaa"), "xab");
        assert_eq!(successor("xaz"), "xba");
        assert_eq!(successor("xzy"), "xzz");
        assert_eq!(successor("xzz"), "xaaa");
    }

    #[test]
    fn test_sequence_starts_at_aa() {
        let seq = FileNameSequence::new("x");
        assert_eq!(seq.current(), "xaa");
        assert_eq!(seq.prefix(), "x");
        assert_eq!(seq.suffix(), "aa");
    }

    #[test]
    fn test_sequence_grows_past_zz() {
        let mut seq = FileNameSequence::new("x");
        let names: Vec<String> = seq.by_ref().take(26 * 26 + 1).collect();
        assert_eq!(names[0], "xaa");
        assert_eq!(names[25], "xaz");
        assert_eq!(names[26], "xba");
        assert_eq!(names[26 * 26 - 1], "xzz");
        assert_eq!(names[26 * 26], "xaaa");
    }

    #[test]
    fn test_sequence_names_sort_in_generation_order_within_width() {
        let names: Vec<String> = FileNameSequence::new("part-").take(26 * 26).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_sequence_reset() {
        let mut seq = FileNameSequence::new("x");
        seq.advance();
        seq.advance();
        assert_eq!(seq.current(), "xac");

        seq.reset();
        assert_eq!(seq.current(), "xaa");
    }

    #[test]
    fn test_next_path_in() {
        let mut seq = FileNameSequence::new("x");
        let dir = Path::new("/tmp/out");
        assert_eq!(seq.next_path_in(dir), dir.join("xaa"));
        assert_eq!(seq.next_path_in(dir), dir.join("xab"));
    }
}
