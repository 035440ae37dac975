// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain bit vector with constant-time rank.
//!
//! Bits are packed into `u64` words. Every block of four words stores the number
//! of ones before it, so `rank1` is one table lookup plus at most four popcounts.
//! Overhead is one `u64` per 256 bits.

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = 64;
const WORDS_PER_BLOCK: usize = 4;
const BLOCK_BITS: usize = WORD_BITS * WORDS_PER_BLOCK;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBitVector {
    words: Vec<u64>,
    /// `block_ranks[b]` = ones in `words[..b * WORDS_PER_BLOCK]`.
    block_ranks: Vec<u64>,
    len: usize,
    ones: usize,
}

impl RankBitVector {
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut words = Vec::new();
        let mut len = 0;

        for bit in bits {
            if len % WORD_BITS == 0 {
                words.push(0u64);
            }
            if bit {
                // the push above guarantees a current word
                if let Some(word) = words.last_mut() {
                    *word |= 1 << (len % WORD_BITS);
                }
            }
            len += 1;
        }

        let mut block_ranks = Vec::with_capacity(words.len() / WORDS_PER_BLOCK + 1);
        let mut total = 0u64;
        for (w, word) in words.iter().enumerate() {
            if w % WORDS_PER_BLOCK == 0 {
                block_ranks.push(total);
            }
            total += u64::from(word.count_ones());
        }
        if words.len() % WORDS_PER_BLOCK == 0 {
            block_ranks.push(total);
        }

        Self {
            words,
            block_ranks,
            len,
            ones: total as usize,
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

    #[inline]
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len - self.ones
    }

    /// Bit at position `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit {} out of bounds (len={})", i, self.len);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Number of ones in `[0, i)`.
    #[inline]
    pub fn rank1(&self, i: usize) -> usize {
        debug_assert!(i <= self.len, "rank {} out of bounds (len={})", i, self.len);

        let word = i / WORD_BITS;
        let block = i / BLOCK_BITS;
        let mut rank = self.block_ranks[block] as usize;

        for w in block * WORDS_PER_BLOCK..word {
            rank += self.words[w].count_ones() as usize;
        }

        let bit = i % WORD_BITS;
        if bit > 0 {
            rank += (self.words[word] & ((1u64 << bit) - 1)).count_ones() as usize;
        }

        rank
    }

    /// Number of zeros in `[0, i)`.
    #[inline]
    pub fn rank0(&self, i: usize) -> usize {
        i - self.rank1(i)
    }
}
