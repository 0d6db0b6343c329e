//! End-to-end tests for the split engine.
//!
//! Splits real files into a scratch directory and checks the properties
//! every policy must keep: piece counts, piece sizes and lossless
//! reconstruction when the pieces are concatenated in filename order.

use std::fs::{self, File};
use std::path::Path;

use pretty_assertions::assert_eq;
use splitter::{FileNameSequence, SplitPolicy, SplitSummary, Splitter};

/// Deterministic, newline-rich content of the given length.
fn sample(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % 7 == 6 { b'\n' } else { b'a' + (i % 26) as u8 })
        .collect()
}

/// Write `data` to a file and split it into `out`.
fn split_file(data: &[u8], out: &Path, policy: SplitPolicy) -> SplitSummary {
    let input_path = out.join("input.bin");
    fs::write(&input_path, data).unwrap();

    let pieces_dir = out.join("pieces");
    fs::create_dir_all(&pieces_dir).unwrap();

    let mut input = File::open(&input_path).unwrap();
    Splitter::new(&pieces_dir, "x")
        .split(&mut input, policy)
        .unwrap()
}

/// Concatenate pieces by walking the filename sequence until a name is missing.
fn reassemble(dir: &Path) -> Vec<u8> {
    let mut joined = Vec::new();
    for name in FileNameSequence::new("x") {
        match fs::read(dir.join(name)) {
            Ok(bytes) => joined.extend(bytes),
            Err(_) => break,
        }
    }
    joined
}

fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_reconstruction_for_every_policy() {
    let lengths = [0, 1, 6, 7, 8, 49, 50, 1000];
    let policies = [
        SplitPolicy::line_count(1).unwrap(),
        SplitPolicy::line_count(3).unwrap(),
        SplitPolicy::chunk_count(1).unwrap(),
        SplitPolicy::chunk_count(7).unwrap(),
        SplitPolicy::byte_count(1).unwrap(),
        SplitPolicy::byte_count(7).unwrap(),
    ];

    for len in lengths {
        for policy in policies {
            let dir = tempfile::tempdir().unwrap();
            let data = sample(len);
            let summary = split_file(&data, dir.path(), policy);

            let pieces = dir.path().join("pieces");
            assert_eq!(reassemble(&pieces), data, "len={len} policy={policy}");
            assert_eq!(summary.total_bytes(), len as u64, "len={len} policy={policy}");
            assert_eq!(file_count(&pieces), summary.piece_count());
        }
    }
}

#[test]
fn test_line_count_exact_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let data: String = (1..=30).map(|i| format!("Line {i}\n")).collect();

    let summary = split_file(data.as_bytes(), dir.path(), SplitPolicy::line_count(10).unwrap());

    assert_eq!(summary.piece_count(), 3);
    for piece in &summary.pieces {
        let content = fs::read_to_string(&piece.path).unwrap();
        assert_eq!(content.lines().count(), 10);
        assert!(content.ends_with('\n'));
    }
}

#[test]
fn test_line_count_remainder() {
    let dir = tempfile::tempdir().unwrap();
    let data: String = (1..=23).map(|i| format!("Line {i}\n")).collect();

    let summary = split_file(data.as_bytes(), dir.path(), SplitPolicy::line_count(10).unwrap());

    assert_eq!(summary.piece_count(), 3);
    let last = fs::read_to_string(&summary.pieces[2].path).unwrap();
    assert_eq!(last, "Line 21\nLine 22\nLine 23\n");
}

#[test]
fn test_line_count_default_policy_thousand_lines() {
    let dir = tempfile::tempdir().unwrap();
    let data: String = (0..2500).map(|i| format!("{i}\n")).collect();
    let policy = splitter::PolicySelection::Default.resolve();

    let summary = split_file(data.as_bytes(), dir.path(), policy);

    let line_counts: Vec<usize> = summary
        .pieces
        .iter()
        .map(|piece| fs::read_to_string(&piece.path).unwrap().lines().count())
        .collect();
    assert_eq!(line_counts, vec![1000, 1000, 500]);
}

#[test]
fn test_chunk_count_sizes() {
    for (size, chunks) in [(0u64, 3u64), (2, 5), (10, 3), (100, 7), (64, 8)] {
        let dir = tempfile::tempdir().unwrap();
        let data = sample(size as usize);

        let summary = split_file(&data, dir.path(), SplitPolicy::chunk_count(chunks).unwrap());

        let base = size / chunks;
        let mut expected = vec![base; chunks as usize - 1];
        expected.push(size - base * (chunks - 1));
        let sizes: Vec<u64> = summary
            .pieces
            .iter()
            .map(|piece| fs::metadata(&piece.path).unwrap().len())
            .collect();
        assert_eq!(sizes, expected, "size={size} chunks={chunks}");
    }
}

#[test]
fn test_byte_count_sizes() {
    for (size, bytes) in [(0u64, 4u64), (8, 4), (9, 4), (3, 10)] {
        let dir = tempfile::tempdir().unwrap();
        let data = sample(size as usize);

        let summary = split_file(&data, dir.path(), SplitPolicy::byte_count(bytes).unwrap());

        let expected_count = size.div_ceil(bytes);
        assert_eq!(summary.piece_count() as u64, expected_count);
        for (index, piece) in summary.pieces.iter().enumerate() {
            let is_last = index as u64 == expected_count - 1;
            let expected = if is_last && size % bytes != 0 {
                size % bytes
            } else {
                bytes
            };
            assert_eq!(piece.bytes, expected, "size={size} bytes={bytes}");
        }
    }
}

#[test]
fn test_more_than_676_pieces_get_longer_names() {
    let dir = tempfile::tempdir().unwrap();
    let data = vec![b'.'; 26 * 26 + 2];

    let summary = split_file(&data, dir.path(), SplitPolicy::byte_count(1).unwrap());

    let names: Vec<String> = summary.pieces.iter().map(|p| p.file_name()).collect();
    assert_eq!(names[26 * 26 - 1], "xzz");
    assert_eq!(names[26 * 26], "xaaa");
    assert_eq!(names[26 * 26 + 1], "xaab");
    assert_eq!(reassemble(&dir.path().join("pieces")), data);
}

#[test]
fn test_existing_piece_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let pieces = dir.path().join("pieces");
    fs::create_dir_all(&pieces).unwrap();
    fs::write(pieces.join("xaa"), b"stale content that is longer").unwrap();

    split_file(b"new", dir.path(), SplitPolicy::byte_count(100).unwrap());

    assert_eq!(fs::read(pieces.join("xaa")).unwrap(), b"new");
}
