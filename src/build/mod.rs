// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: suffix array, BWT and C table, for both directions.
//!
//! The expensive part is suffix sorting, done once per direction. The two
//! directions are independent, so with the `parallel` feature they are sorted
//! concurrently via `rayon::join` and the BWT is derived with `par_iter()`.
//!
//! # Text layout
//!
//! ```text
//! forward:  t0 $0 t1 $1 ... t(m-1) $(m-1)
//! reverse:  rev(t0) $0 rev(t1) $1 ... rev(t(m-1)) $(m-1)
//! ```
//!
//! During suffix sorting separator `$k` has value `k + 1` and symbol rank `r`
//! has value `m + 1 + r`, so separators are distinct and sort before every
//! symbol. In the BWT every separator collapses to the sentinel code 0 and
//! rank `r` becomes code `r + 1`.

mod sais;

use serde::{Deserialize, Serialize};

use crate::alphabet::{to_ranks, Alphabet};
use crate::contracts;
use crate::error::BuildError;
use crate::index::Hit;
use crate::rank::RankDictionary;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest number of rows (text symbols plus separators) an index can hold.
///
/// Suffix array entries are stored as `u32`.
pub const MAX_INDEX_LEN: usize = u32::MAX as usize;

/// Largest alphabet an index can be built over.
///
/// BWT codes are `u8`, and code 0 is taken by the sentinel.
pub const MAX_ALPHABET_SIZE: usize = u8::MAX as usize;

/// Where each text lives inside the concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TextLayout {
    /// Start offset of each text in the concatenation.
    starts: Vec<usize>,
    /// Length of each text, separator excluded.
    lens: Vec<usize>,
}

impl TextLayout {
    fn new(lens: Vec<usize>) -> Self {
        let mut starts = Vec::with_capacity(lens.len());
        let mut offset = 0;
        for &len in &lens {
            starts.push(offset);
            offset += len + 1;
        }
        Self { starts, lens }
    }

    pub(crate) fn text_count(&self) -> usize {
        self.lens.len()
    }

    pub(crate) fn text_len(&self, text_id: usize) -> Option<usize> {
        self.lens.get(text_id).copied()
    }

    /// Total rows: every symbol plus one separator per text.
    pub(crate) fn total_len(&self) -> usize {
        self.lens.iter().sum::<usize>() + self.lens.len()
    }

    /// Map a position in the concatenation to `(text, offset)`.
    ///
    /// A separator position maps to the end of the text it terminates.
    pub(crate) fn hit(&self, position: usize) -> Hit {
        let text_id = self.starts.partition_point(|&start| start <= position) - 1;
        Hit {
            text_id,
            position: position - self.starts[text_id],
        }
    }

    /// The same occurrence, seen from the start of its text reversed.
    ///
    /// `hit` must start an occurrence of length `len` inside its text; a
    /// separator hit with `len == 0` maps to offset 0.
    pub(crate) fn mirror(&self, hit: Hit, len: usize) -> Hit {
        Hit {
            text_id: hit.text_id,
            position: self.lens[hit.text_id] - hit.position - len,
        }
    }
}

/// One direction of the index after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DirectionIndex {
    /// Rank dictionary over the BWT codes.
    pub(crate) bwt: RankDictionary,
    /// `counts[code]` = number of BWT codes strictly smaller than `code`.
    /// One extra trailing entry holds the total.
    pub(crate) counts: Vec<usize>,
}

/// Everything the bidirectional index is assembled from.
pub(crate) struct BuiltIndex {
    pub(crate) forward: DirectionIndex,
    pub(crate) reverse: DirectionIndex,
    pub(crate) suffix_array: Vec<u32>,
    pub(crate) layout: TextLayout,
}

/// Translate, lay out and index `texts` in both directions.
pub(crate) fn build_index<A: Alphabet, T: AsRef<[u8]>>(
    texts: impl IntoIterator<Item = T>,
) -> Result<BuiltIndex, BuildError> {
    let sigma = A::size();
    if sigma == 0 || sigma > MAX_ALPHABET_SIZE {
        return Err(BuildError::UnsupportedAlphabet { size: sigma });
    }

    let ranked: Vec<Vec<u8>> = texts
        .into_iter()
        .enumerate()
        .map(|(text_id, text)| {
            to_ranks::<A>(text.as_ref()).map_err(|(position, symbol)| BuildError::InvalidSymbol {
                text_id,
                position,
                symbol,
            })
        })
        .collect::<Result<_, _>>()?;

    let layout = TextLayout::new(ranked.iter().map(Vec::len).collect());
    let total_len = layout.total_len();
    if total_len > MAX_INDEX_LEN {
        return Err(BuildError::TextTooLong { len: total_len });
    }

    let text_count = ranked.len();
    let forward_text = concatenate(&ranked, false);
    let reverse_text = concatenate(&ranked, true);

    #[cfg(feature = "parallel")]
    let (forward, reverse) = rayon::join(
        || build_direction(&forward_text, text_count, sigma),
        || build_direction(&reverse_text, text_count, sigma),
    );
    #[cfg(not(feature = "parallel"))]
    let (forward, reverse) = (
        build_direction(&forward_text, text_count, sigma),
        build_direction(&reverse_text, text_count, sigma),
    );

    contracts::check_suffix_array_sorted(&forward_text, &forward.suffix_array);

    tracing::debug!(
        alphabet = A::NAME,
        texts = text_count,
        rows = total_len,
        "built bidirectional index"
    );

    Ok(BuiltIndex {
        forward: forward.index,
        reverse: reverse.index,
        suffix_array: forward.suffix_array.iter().map(|&pos| pos as u32).collect(),
        layout,
    })
}

/// Sorting values for the concatenation of all texts, each followed by its own
/// separator. With `reversed`, each text is reversed in place.
fn concatenate(ranked: &[Vec<u8>], reversed: bool) -> Vec<usize> {
    let text_count = ranked.len();
    let mut concat = Vec::with_capacity(ranked.iter().map(|t| t.len() + 1).sum());

    for (text_id, text) in ranked.iter().enumerate() {
        let symbol_value = |&rank: &u8| text_count + 1 + rank as usize;
        if reversed {
            concat.extend(text.iter().rev().map(symbol_value));
        } else {
            concat.extend(text.iter().map(symbol_value));
        }
        concat.push(text_id + 1);
    }

    concat
}

struct BuiltDirection {
    index: DirectionIndex,
    suffix_array: Vec<usize>,
}

fn build_direction(concat: &[usize], text_count: usize, sigma: usize) -> BuiltDirection {
    let suffix_array = sais::suffix_array(concat, text_count + 1 + sigma);
    let bwt = bwt_from_suffix_array(&suffix_array, concat, text_count);
    let counts = cumulative_counts(&bwt, sigma + 1);
    contracts::check_counts_monotone(&counts, bwt.len());
    let bwt = RankDictionary::new(&bwt, sigma + 1);

    BuiltDirection {
        index: DirectionIndex { bwt, counts },
        suffix_array,
    }
}

/// Map a sorting value to its BWT code: separators to 0, rank `r` to `r + 1`.
#[inline]
fn bwt_code(value: usize, text_count: usize) -> u8 {
    if value <= text_count {
        0
    } else {
        (value - text_count) as u8
    }
}

/// `bwt[i]` is the code preceding suffix `sa[i]`, wrapping around at position 0.
fn bwt_from_suffix_array(suffix_array: &[usize], concat: &[usize], text_count: usize) -> Vec<u8> {
    let n = concat.len();
    let preceding = |&pos: &usize| bwt_code(concat[(pos + n - 1) % n], text_count);

    #[cfg(feature = "parallel")]
    {
        suffix_array.par_iter().map(preceding).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        suffix_array.iter().map(preceding).collect()
    }
}

/// The C table: for each code, how many codes in `bwt` are strictly smaller.
fn cumulative_counts(bwt: &[u8], code_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; code_count + 1];
    for &code in bwt {
        counts[code as usize + 1] += 1;
    }
    for code in 1..counts.len() {
        counts[code] += counts[code - 1];
    }
    counts
}
