//! Error reporting: every rejected call leaves the cursor untouched.

use crate::common::{dna_index, GENOME};
use bifm::{AminoAcid, BiFmIndex, BuildError, Dna5, SearchError};

#[test]
fn failed_batch_restores_snapshot() {
    let index = dna_index(GENOME);
    let mut cursor = index.cursor();
    cursor.extend_left(b'T').unwrap();
    let snapshot = cursor.clone();

    // "TA", "TAA", "TAAT" occur; "TAATC" does not
    assert_eq!(cursor.extend_right_seq(b"AATC"), Err(SearchError::EmptyMatch));
    assert_eq!(cursor, snapshot);

    // "TT" occurs, "GTT" does not; the first step is rolled back too
    assert_eq!(cursor.extend_left_seq(b"CAGT"), Err(SearchError::EmptyMatch));
    assert_eq!(cursor, snapshot);
    assert_eq!(cursor.query(), b"T");
}

#[test]
fn history_queries_need_history() {
    let index = dna_index(GENOME);
    let mut cursor = index.cursor();
    assert_eq!(cursor.last_char(), Err(SearchError::InvalidOperationForState));
    assert_eq!(cursor.last_rank(), Err(SearchError::InvalidOperationForState));
    assert_eq!(cursor.retract(), Err(SearchError::InvalidOperationForState));
}

#[test]
fn unknown_symbols_are_reported() {
    let index = dna_index(GENOME);
    let mut cursor = index.cursor();
    assert_eq!(cursor.extend_right(b'N'), Err(SearchError::UnknownSymbol(b'N')));
    assert_eq!(cursor.extend_left(b'-'), Err(SearchError::UnknownSymbol(b'-')));
    assert_eq!(cursor.extend_left_seq(b"AC*"), Err(SearchError::UnknownSymbol(b'*')));
    assert_eq!(cursor, index.cursor());
}

#[test]
fn lower_case_is_folded() {
    let index = dna_index(GENOME);
    let mut cursor = index.cursor();
    cursor.extend_right_seq(b"aat").unwrap();
    assert_eq!(cursor.query(), b"AAT");
    assert_eq!(index.count(b"gaa").unwrap(), 2);
}

#[test]
fn build_errors_name_the_offender() {
    let err = BiFmIndex::<Dna5>::from_texts([&b"ACGNT"[..], b"AC-GT"]).unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidSymbol {
            text_id: 1,
            position: 2,
            symbol: b'-'
        }
    );
    assert!(err.to_string().contains("text 1"), "{}", err);

    // B is not a residue
    assert!(BiFmIndex::<AminoAcid>::new(b"MKVB").is_err());
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(SearchError::UnknownSymbol(b'Z').to_string(), "symbol 'Z' is not in the alphabet");
    let boxed: Box<dyn std::error::Error> = Box::new(SearchError::EmptyMatch);
    assert!(!boxed.to_string().is_empty());
}
