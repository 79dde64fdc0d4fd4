//! Unit tests for bit-string ingestion.

use std::io::Cursor;
use std::num::NonZeroUsize;

use hamclust_core::{BitVectorParseError, VectorSource, VectorSourceError};
use rstest::rstest;

use super::{
    BitstringSource, BitstringSourceError, BitstringSourceErrorCode, MalformedLinePolicy,
};

fn width(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("width must be non-zero")
}

fn load(input: &str, bits: usize, policy: MalformedLinePolicy) -> BitstringSource {
    BitstringSource::try_from_reader("test", Cursor::new(input.to_owned()), width(bits), policy)
        .expect("input must load")
}

fn load_err(input: &str, bits: usize, policy: MalformedLinePolicy) -> BitstringSourceError {
    BitstringSource::try_from_reader("test", Cursor::new(input.to_owned()), width(bits), policy)
        .expect_err("input must fail to load")
}

#[test]
fn header_line_is_discarded_unread() {
    // The header need not be a bit string at all.
    let source = load("42 vectors, width 3\n000\n111\n", 3, MalformedLinePolicy::Reject);
    assert_eq!(source.len(), 2);
    assert_eq!(source.name(), "test");
    assert_eq!(source.width(), 3);
}

#[test]
fn embedded_whitespace_is_stripped() {
    let source = load("header\n0 1\t1\n", 3, MalformedLinePolicy::Reject);
    assert_eq!(source.len(), 1);
    let vector = source.vector(0).expect("vector must exist");
    assert_eq!(vector.to_string(), "011");
}

#[rstest]
#[case::header_only("header\n")]
#[case::no_trailing_newline("header")]
#[case::blank_lines("header\n\n   \n")]
#[case::empty_input("")]
fn inputs_without_vectors_load_empty(#[case] input: &str) {
    let source = load(input, 3, MalformedLinePolicy::Reject);
    assert!(source.is_empty());
}

#[test]
fn duplicate_lines_are_retained() {
    let source = load("header\n000\n000\n", 3, MalformedLinePolicy::Reject);
    assert_eq!(source.len(), 2);
}

#[test]
fn reject_policy_fails_on_short_line() {
    let err = load_err("header\n000\n01\n", 3, MalformedLinePolicy::Reject);
    assert_eq!(err.code(), BitstringSourceErrorCode::MalformedLine);
    assert_eq!(err.code().as_str(), "BITSTRING_MALFORMED_LINE");
    match err {
        BitstringSourceError::MalformedLine { line, reason } => {
            assert_eq!(line, 3);
            assert_eq!(
                reason,
                BitVectorParseError::BadLength {
                    expected: 3,
                    got: 2
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reject_policy_fails_on_foreign_character() {
    let err = load_err("header\n0x0\n", 3, MalformedLinePolicy::Reject);
    match err {
        BitstringSourceError::MalformedLine { line, reason } => {
            assert_eq!(line, 2);
            assert_eq!(
                reason,
                BitVectorParseError::BadChar {
                    ch: 'x',
                    position: 1
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn skip_policy_drops_malformed_lines() {
    let source = load("header\n000\n0x0\n111\n", 3, MalformedLinePolicy::Skip);
    assert_eq!(source.len(), 2);
    let labels: Vec<String> = (0..source.len())
        .map(|index| {
            source
                .vector(index)
                .expect("vector must exist")
                .to_string()
        })
        .collect();
    assert_eq!(labels, ["000", "111"]);
}

#[test]
fn io_failures_carry_the_io_code() {
    let err: BitstringSourceError = std::io::Error::other("reader failed").into();
    assert_eq!(err.code(), BitstringSourceErrorCode::Io);
    assert_eq!(err.code().as_str(), "BITSTRING_IO");
}

#[test]
fn vector_rejects_out_of_bounds_indices() {
    let source = load("header\n000\n", 3, MalformedLinePolicy::Reject);
    let err = source.vector(7).expect_err("index must be out of bounds");
    assert!(matches!(err, VectorSourceError::OutOfBounds { index: 7 }));
}
