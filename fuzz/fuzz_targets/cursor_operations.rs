// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor operation sequences.
//!
//! Builds an index over arbitrary DNA texts and drives a cursor through an
//! arbitrary mix of extensions, cycles, retractions and conversions. No call
//! may panic, both intervals must stay the same size, and every reported count
//! must match a linear scan.

#![no_main]

use arbitrary::Arbitrary;
use bifm::testing::naive_count;
use bifm::{BiFmIndex, Dna4, SearchError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Operation {
    ExtendRight(u8),
    ExtendLeft(u8),
    ExtendRightSeq(Vec<u8>),
    ExtendLeftSeq(Vec<u8>),
    ExtendRightAny,
    ExtendLeftAny,
    CycleBack,
    CycleFront,
    Retract,
    ToFwd(u8),
    ToRev(u8),
}

#[derive(Debug, Arbitrary)]
struct CursorInput {
    texts: Vec<Vec<u8>>,
    operations: Vec<Operation>,
}

/// Fold arbitrary bytes onto ACGT.
fn to_dna(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| b"ACGT"[(b & 3) as usize]).collect()
}

/// Like `to_dna`, but 0xFF becomes a byte outside the alphabet.
fn symbol(byte: u8) -> u8 {
    if byte == 0xFF {
        b'N'
    } else {
        b"ACGT"[(byte & 3) as usize]
    }
}

fuzz_target!(|input: CursorInput| {
    let texts: Vec<Vec<u8>> = input.texts.iter().take(8).map(|t| to_dna(t)).collect();
    if texts.is_empty() || texts.iter().map(Vec::len).sum::<usize>() > 4096 {
        return;
    }
    let index = BiFmIndex::<Dna4>::from_texts(&texts).expect("texts are valid dna4");
    let mut cursor = index.cursor();

    for operation in input.operations.iter().take(64) {
        let before = cursor.clone();
        let result = match operation {
            Operation::ExtendRight(b) => cursor.extend_right(symbol(*b)).map(|_| true),
            Operation::ExtendLeft(b) => cursor.extend_left(symbol(*b)).map(|_| true),
            Operation::ExtendRightSeq(seq) => cursor.extend_right_seq(&to_dna(seq)).map(|_| true),
            Operation::ExtendLeftSeq(seq) => cursor.extend_left_seq(&to_dna(seq)).map(|_| true),
            Operation::ExtendRightAny => cursor.extend_right_any().map(|_| true),
            Operation::ExtendLeftAny => cursor.extend_left_any().map(|_| true),
            Operation::CycleBack => cursor.cycle_back(),
            Operation::CycleFront => cursor.cycle_front(),
            Operation::Retract => cursor.retract().map(|_| true),
            Operation::ToFwd(b) => {
                let mut fwd = cursor.to_fwd_cursor();
                let _ = fwd.extend_right(symbol(*b));
                let _ = fwd.cycle_back();
                let _ = fwd.retract();
                assert_eq!(fwd.count(), naive_count(&texts, &fwd.query()));
                Ok(true)
            }
            Operation::ToRev(b) => {
                let mut rev = cursor.to_rev_cursor();
                let _ = rev.extend_right(symbol(*b));
                let _ = rev.cycle_back();
                let mut query = rev.query();
                query.reverse();
                assert_eq!(rev.count(), naive_count(&texts, &query));
                Ok(true)
            }
        };

        // Anything that did not take effect must leave the cursor as it was
        if matches!(result, Err(_) | Ok(false)) {
            assert_eq!(cursor, before, "rejected {:?} changed the cursor", operation);
        }
        if let Err(err) = result {
            assert_ne!(err, SearchError::CapabilityUnavailableAfterConversion);
        }

        assert_eq!(cursor.fwd_interval().len(), cursor.rev_interval().len());
        assert_eq!(cursor.count(), naive_count(&texts, &cursor.query()));
    }
});
