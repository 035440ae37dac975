//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides brute-force reference answers that index results are checked
//! against.

#![doc(hidden)]

use crate::alphabet::Alphabet;
use crate::index::Hit;

/// Every occurrence of `pattern` in `texts`, ascending by `(text_id, position)`.
///
/// The empty pattern occurs at every offset including the end of each text,
/// which matches one hit per suffix array row.
pub fn naive_occurrences<T: AsRef<[u8]>>(texts: &[T], pattern: &[u8]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (text_id, text) in texts.iter().enumerate() {
        let text = text.as_ref();
        if pattern.len() > text.len() {
            continue;
        }
        for position in 0..=text.len() - pattern.len() {
            if &text[position..position + pattern.len()] == pattern {
                hits.push(Hit { text_id, position });
            }
        }
    }
    hits
}

/// Number of occurrences of `pattern` in `texts`.
pub fn naive_count<T: AsRef<[u8]>>(texts: &[T], pattern: &[u8]) -> usize {
    naive_occurrences(texts, pattern).len()
}

/// Symbols `c` such that `pattern + c` occurs, in rank order.
pub fn naive_right_extensions<A: Alphabet, T: AsRef<[u8]>>(texts: &[T], pattern: &[u8]) -> Vec<u8> {
    A::SYMBOLS
        .iter()
        .copied()
        .filter(|&symbol| {
            let mut extended = pattern.to_vec();
            extended.push(symbol);
            naive_count(texts, &extended) > 0
        })
        .collect()
}

/// Symbols `c` such that `c + pattern` occurs, in rank order.
pub fn naive_left_extensions<A: Alphabet, T: AsRef<[u8]>>(texts: &[T], pattern: &[u8]) -> Vec<u8> {
    A::SYMBOLS
        .iter()
        .copied()
        .filter(|&symbol| {
            let mut extended = Vec::with_capacity(pattern.len() + 1);
            extended.push(symbol);
            extended.extend_from_slice(pattern);
            naive_count(texts, &extended) > 0
        })
        .collect()
}

/// Reverse every text in place, keeping their order.
pub fn reversed_texts<T: AsRef<[u8]>>(texts: &[T]) -> Vec<Vec<u8>> {
    texts
        .iter()
        .map(|text| text.as_ref().iter().rev().copied().collect())
        .collect()
}
