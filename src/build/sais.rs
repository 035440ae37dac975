// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction over an integer alphabet.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: G A A T T $    (ranks shifted above the separators, $ = 0)
//!
//! Step 1: Classify suffixes
//! ┌───┬───┬───┬───┬───┬───┐
//! │ G │ A │ A │ T │ T │ $ │
//! ├───┼───┼───┼───┼───┼───┤
//! │ L │ S │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (Leftmost S-type) positions: 1, 5
//! Step 3: Place LMS at bucket tails, induce L (left-to-right), induce S (right-to-left)
//! Step 4: Name LMS substrings; recurse if names are not unique
//! Step 5: Induce the final order from the sorted LMS suffixes
//!
//! Output: [5, 1, 2, 0, 4, 3]
//! ```
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Sentinel value (must be smaller than all input characters).
const SENTINEL: usize = 0;

const EMPTY: usize = usize::MAX;

/// Build the suffix array of `text` in O(n) time.
///
/// Every value in `text` must lie in `1..alphabet_size`; 0 is reserved for the
/// sentinel appended internally. Equal-prefix ties are broken the usual way: a
/// suffix that is a proper prefix of another sorts first.
///
/// # Returns
/// Suffix array: `sa[i]` = starting position of the i-th smallest suffix
pub(crate) fn suffix_array(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    debug_assert!(text.iter().all(|&c| c != SENTINEL && c < alphabet_size));

    let mut text_with_sentinel = Vec::with_capacity(text.len() + 1);
    text_with_sentinel.extend_from_slice(text);
    text_with_sentinel.push(SENTINEL);

    let mut sa = sais(&text_with_sentinel, alphabet_size);

    // The sentinel suffix always sorts first
    debug_assert_eq!(sa[0], text.len());
    sa.remove(0);
    sa
}

/// Core SA-IS. `text` must end with a unique smallest character.
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => {
            return if text[0] <= text[1] {
                vec![0, 1]
            } else {
                vec![1, 0]
            }
        }
        _ => {}
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();
    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // First induced sort: LMS order is arbitrary, result sorts LMS substrings
    let mut sa = vec![EMPTY; n];
    induced_sort(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Name LMS substrings
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];

    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }

        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }

        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;

    // The sentinel is the last LMS position and the only one named 0, so the
    // reduced string again ends with a unique smallest character.
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais(&reduced, unique_count)
    } else {
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_unstable_by_key(|&i| reduced[i]);
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    // Final induced sort with correctly ordered LMS suffixes
    sa.fill(EMPTY);
    induced_sort(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Place `lms` at bucket tails (keeping their relative order), then induce
/// L-type suffixes left-to-right and S-type suffixes right-to-left.
fn induced_sort(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    // Last position is always S-type (sentinel)
    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

/// Check if position i is an LMS position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings (up to and including the next LMS position).
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }

        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
