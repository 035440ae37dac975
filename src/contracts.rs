//! Runtime contracts for the index structures and the cursor.
//!
//! Debug-mode assertions that catch construction and search bugs close to where
//! they happen. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!` or bail out early)
//! 2. Provide **early failure detection** during development and in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function               | Invariant                                        |
//! |---------------------------------|--------------------------------------------------|
//! | `check_suffix_array_sorted`     | adjacent suffixes in lexicographic order         |
//! | `check_suffix_array_permutation`| every position appears exactly once              |
//! | `check_counts_monotone`         | C table non-decreasing, ends at the BWT length   |
//! | `check_intervals_synchronized`  | forward and reverse intervals have equal size    |

use crate::index::SaInterval;

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that a suffix array is sorted lexicographically.
///
/// A suffix that is a proper prefix of another sorts first, which is what the
/// implicit sentinel guarantees.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(text: &[usize], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_suffix_array_permutation(text.len(), suffix_array);

    for i in 1..suffix_array.len() {
        let prev = &text[suffix_array[i - 1]..];
        let curr = &text[suffix_array[i]..];
        debug_assert!(
            prev < curr,
            "Contract violation: SuffixArray.Sorted - \
             suffix_array[{}] = {} not before suffix_array[{}] = {}",
            i - 1,
            suffix_array[i - 1],
            i,
            suffix_array[i]
        );
    }
}

/// Check that the suffix array is a permutation of `0..len`.
///
/// # Panics (debug builds only)
/// Panics on a missing or duplicated position.
#[inline]
pub fn check_suffix_array_permutation(len: usize, suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        suffix_array.len(),
        len,
        "Contract violation: SuffixArray.Complete - {} entries for {} positions",
        suffix_array.len(),
        len
    );

    let mut seen = vec![false; len];
    for &pos in suffix_array {
        debug_assert!(
            pos < len && !seen[pos],
            "Contract violation: SuffixArray.Complete - position {} missing or repeated",
            pos
        );
        if pos < len {
            seen[pos] = true;
        }
    }
}

// ============================================================================
// C TABLE CONTRACTS
// ============================================================================

/// Check that a C table is non-decreasing and totals `bwt_len`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_counts_monotone(counts: &[usize], bwt_len: usize) {
    debug_assert!(
        counts.windows(2).all(|pair| pair[0] <= pair[1]),
        "Contract violation: CTable.Monotone - {:?}",
        counts
    );
    debug_assert_eq!(
        counts.last().copied(),
        Some(bwt_len),
        "Contract violation: CTable.Total - expected {}",
        bwt_len
    );
}

// ============================================================================
// CURSOR CONTRACTS
// ============================================================================

/// Check that the forward and reverse intervals describe the same number of
/// occurrences.
///
/// # Panics (debug builds only)
/// Panics if the sizes differ.
#[inline]
pub fn check_intervals_synchronized(fwd: SaInterval, rev: SaInterval) {
    debug_assert_eq!(
        fwd.len(),
        rev.len(),
        "Contract violation: Cursor.Synchronized - forward {:?} vs reverse {:?}",
        fwd,
        rev
    );
}
