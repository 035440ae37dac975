// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank dictionary over a BWT: a wavelet matrix on rank bit vectors.
//!
//! Codes are split bit by bit, most significant first. Level `l` stores bit
//! `height - 1 - l` of every code, with the sequence stably partitioned (zeros
//! first) by the bits of all earlier levels. Following a code down the levels
//! narrows any range `[lo, hi)` to the positions holding that code, so
//!
//! - `rank(code, i)` costs `height` pairs of bit-vector ranks, and
//! - the symbols *smaller* than `code` in a range fall out of the same walk:
//!   whenever the code has a 1 bit, the zeros of the current range are exactly
//!   the smaller codes that agreed on all higher bits.
//!
//! Space is `n * ceil(log2(σ + 1))` bits plus the rank tables.
//!
//! ```text
//! codes:   2 1 1 3 3 1 1 3 2 1 1 2     (two bits per code)
//! level 0: 1 0 0 1 1 0 0 1 1 0 0 1     high bit
//!       -> 1 1 1 1 1 1 2 3 3 3 2 2     stable partition, zeros first
//! level 1: 1 1 1 1 1 1 0 1 1 1 0 0     low bit
//! ```

mod bitvec;

pub use bitvec::RankBitVector;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDictionary {
    levels: Vec<RankBitVector>,
    /// Zeros per level: where the one-partition starts on the next level.
    zeros: Vec<usize>,
    height: usize,
    len: usize,
    code_count: usize,
}

impl RankDictionary {
    /// Build over `codes`, each strictly below `code_count`.
    pub fn new(codes: &[u8], code_count: usize) -> Self {
        debug_assert!(codes.iter().all(|&c| (c as usize) < code_count));

        let height = if code_count <= 2 {
            1
        } else {
            (usize::BITS - (code_count - 1).leading_zeros()) as usize
        };

        let mut levels = Vec::with_capacity(height);
        let mut zeros = Vec::with_capacity(height);
        let mut current = codes.to_vec();

        for level in 0..height {
            let shift = height - 1 - level;
            let bit_of = |code: u8| (code >> shift) & 1 == 1;

            let bits = RankBitVector::from_bits(current.iter().map(|&c| bit_of(c)));
            zeros.push(bits.count_zeros());
            levels.push(bits);

            let (mut next, ones): (Vec<u8>, Vec<u8>) =
                current.iter().partition(|&&c| !bit_of(c));
            next.extend(ones);
            current = next;
        }

        Self {
            levels,
            zeros,
            height,
            len: codes.len(),
            code_count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct codes this dictionary was built for.
    #[inline]
    pub fn code_count(&self) -> usize {
        self.code_count
    }

    /// Occurrences of `code` in `[0, i)`.
    #[inline]
    pub fn rank(&self, code: u8, i: usize) -> usize {
        self.rank_range(code, 0, i).0
    }

    /// For the range `[lo, hi)`: occurrences of `code`, and occurrences of all
    /// codes strictly smaller than `code`.
    pub fn rank_range(&self, code: u8, mut lo: usize, mut hi: usize) -> (usize, usize) {
        debug_assert!(lo <= hi && hi <= self.len);
        debug_assert!((code as usize) < self.code_count);

        let mut smaller = 0;

        for (level, bits) in self.levels.iter().enumerate() {
            let shift = self.height - 1 - level;
            if (code >> shift) & 1 == 0 {
                lo = bits.rank0(lo);
                hi = bits.rank0(hi);
            } else {
                let lo0 = bits.rank0(lo);
                let hi0 = bits.rank0(hi);
                smaller += hi0 - lo0;
                lo = self.zeros[level] + (lo - lo0);
                hi = self.zeros[level] + (hi - hi0);
            }
        }

        (hi - lo, smaller)
    }

    /// Code at position `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn access(&self, i: usize) -> u8 {
        assert!(i < self.len, "position {} out of bounds (len={})", i, self.len);

        let mut pos = i;
        let mut code = 0u8;

        for (level, bits) in self.levels.iter().enumerate() {
            let bit = bits.get(pos);
            code = (code << 1) | u8::from(bit);
            pos = if bit {
                self.zeros[level] + bits.rank1(pos)
            } else {
                bits.rank0(pos)
            };
        }

        code
    }
}
