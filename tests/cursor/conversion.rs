//! Bidirectional cursors converted to one-directional ones.

use crate::common::{dna_index, GENOME_CONVERT};
use bifm::{Hit, SearchError};

#[test]
fn left_built_match_continues_forward() {
    let index = dna_index(GENOME_CONVERT);
    let mut cursor = index.cursor();
    cursor.extend_left_seq(b"AAC").unwrap();
    assert_eq!(cursor.query(), b"AAC");

    let mut fwd = cursor.to_fwd_cursor();
    // text orientation, same as the bidirectional cursor
    assert_eq!(fwd.query(), b"AAC");
    assert_eq!(fwd.interval(), cursor.fwd_interval());

    fwd.extend_right(b'G').unwrap();
    assert_eq!(fwd.query(), b"AACG");
    assert_eq!(fwd.last_char(), Ok(b'G'));
    // no "AACT" in the text
    assert_eq!(fwd.cycle_back(), Ok(false));
    assert_eq!(fwd.query(), b"AACG");
    assert_eq!(fwd.locate(), vec![Hit { text_id: 0, position: 5 }]);
}

#[test]
fn right_built_match_continues_over_reversed_text() {
    let index = dna_index(GENOME_CONVERT);
    let mut cursor = index.cursor();
    cursor.extend_right_seq(b"AAC").unwrap();

    let mut rev = cursor.to_rev_cursor();
    assert_eq!(rev.query(), b"CAA");
    assert_eq!(rev.interval(), cursor.rev_interval());

    rev.extend_right(b'G').unwrap();
    assert_eq!(rev.query(), b"CAAG");
    assert_eq!(rev.last_char(), Ok(b'G'));

    assert_eq!(rev.cycle_back(), Ok(true));
    assert_eq!(rev.query(), b"CAAT");

    // "TAAC" starts at 4 in the text, so "CAAT" starts at 12 - 4 - 4 = 4 reversed
    assert_eq!(rev.locate(), vec![Hit { text_id: 0, position: 4 }]);
    let reversed: Vec<u8> = GENOME_CONVERT.iter().rev().copied().collect();
    assert_eq!(&reversed[4..8], b"CAAT");
}

#[test]
fn conversion_leaves_source_cursor_alone() {
    let index = dna_index(GENOME_CONVERT);
    let mut cursor = index.cursor();
    cursor.extend_right_seq(b"GA").unwrap();
    let snapshot = cursor.clone();

    let mut fwd = cursor.to_fwd_cursor();
    fwd.extend_right(b'A').unwrap();
    let mut rev = cursor.to_rev_cursor();
    rev.extend_right(b'C').unwrap();
    assert_eq!(rev.query(), b"AGC");

    assert_eq!(cursor, snapshot);
    assert_eq!(cursor.query(), b"GA");
}

#[test]
fn opposite_side_history_is_frozen() {
    let index = dna_index(GENOME_CONVERT);

    let mut left = index.cursor();
    left.extend_left(b'C').unwrap();
    let mut fwd = left.to_fwd_cursor();
    assert_eq!(
        fwd.cycle_back(),
        Err(SearchError::CapabilityUnavailableAfterConversion)
    );
    assert_eq!(
        fwd.last_rank(),
        Err(SearchError::CapabilityUnavailableAfterConversion)
    );

    let mut right = index.cursor();
    right.extend_right(b'C').unwrap();
    let mut rev = right.to_rev_cursor();
    assert_eq!(
        rev.cycle_back(),
        Err(SearchError::CapabilityUnavailableAfterConversion)
    );
    assert_eq!(
        rev.retract(),
        Err(SearchError::CapabilityUnavailableAfterConversion)
    );
    assert_eq!(
        rev.last_char(),
        Err(SearchError::CapabilityUnavailableAfterConversion)
    );

    // extending is always allowed
    rev.extend_right(b'A').unwrap();
    assert_eq!(rev.query(), b"CA");
}

#[test]
fn same_side_history_stays_usable() {
    let index = dna_index(GENOME_CONVERT);
    let mut cursor = index.cursor();
    cursor.extend_right_seq(b"AA").unwrap();

    let mut fwd = cursor.to_fwd_cursor();
    assert_eq!(fwd.last_char(), Ok(b'A'));
    // "AA" -> "AC"
    assert_eq!(fwd.cycle_back(), Ok(true));
    assert_eq!(fwd.query(), b"AC");
    fwd.retract().unwrap();
    fwd.retract().unwrap();
    assert_eq!(fwd.query_len(), 0);
    assert_eq!(fwd.retract(), Err(SearchError::InvalidOperationForState));
}
