//! The bidirectional FM-index.
//!
//! Two FM-indexes, one over the texts and one over their reversal, plus the
//! forward suffix array for locating hits. Everything here is immutable after
//! construction; any number of cursors (on any number of threads) can borrow
//! the same index.
//!
//! # The extension step
//!
//! A cursor holds two synchronized half-open intervals for its query `P`:
//! `fwd` over the forward suffix array (suffixes starting with `P`) and `rev`
//! over the reverse one (suffixes starting with `rev(P)`).
//!
//! ```text
//! extend Left by c  (cP):   fwd' = [C[c] + rank_fwd(c, fwd.lb), + occ_fwd(c, fwd))
//!                           rev' = [rev.lb + smaller_fwd(c, fwd), + |fwd'|)
//! extend Right by c (Pc):   mirror image, using the reverse BWT
//! ```
//!
//! `smaller(c, I)` counts BWT codes below `c` inside `I`, the sentinel
//! included: those are exactly the occurrences of `P` preceded by something
//! that sorts before `c` (or by a text boundary), which are the rows of
//! `rev` that sort before the ones continuing with `c`. The rank dictionary
//! answers `occ` and `smaller` in the same walk, so one step costs two
//! dictionary queries on the extended side and none on the other.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::build::{build_index, DirectionIndex, TextLayout};
use crate::cursor::BiCursor;
use crate::error::{BuildError, SearchError};

/// A half-open interval `[lb, rb)` of suffix array rows.
///
/// Empty (`lb == rb`) means no occurrence; a single match is `rb == lb + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaInterval {
    pub lb: usize,
    pub rb: usize,
}

impl SaInterval {
    #[inline]
    pub const fn new(lb: usize, rb: usize) -> Self {
        Self { lb, rb }
    }

    /// Number of rows (occurrences) covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.rb - self.lb
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rb <= self.lb
    }
}

/// Which end of the query an extension touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// One occurrence: which text, and the start offset inside it.
///
/// Ordered by `(text_id, position)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hit {
    pub text_id: usize,
    pub position: usize,
}

/// Bidirectional FM-index over one or more texts of alphabet `A`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BiFmIndex<A: Alphabet> {
    fwd: DirectionIndex,
    rev: DirectionIndex,
    suffix_array: Vec<u32>,
    layout: TextLayout,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> BiFmIndex<A> {
    /// Index a single text.
    ///
    /// The empty text is legal: the index then has one (sentinel) row and every
    /// non-empty extension reports no match.
    pub fn new(text: &[u8]) -> Result<Self, BuildError> {
        Self::from_texts([text])
    }

    /// Index a collection of texts. Hits report which text they belong to.
    pub fn from_texts<T: AsRef<[u8]>>(
        texts: impl IntoIterator<Item = T>,
    ) -> Result<Self, BuildError> {
        let built = build_index::<A, T>(texts)?;
        Ok(Self {
            fwd: built.forward,
            rev: built.reverse,
            suffix_array: built.suffix_array,
            layout: built.layout,
            _alphabet: PhantomData,
        })
    }

    /// A fresh cursor: empty query, interval over all rows.
    pub fn cursor(&self) -> BiCursor<'_, A> {
        BiCursor::new(self)
    }

    /// Number of suffix array rows: all symbols plus one separator per text.
    #[inline]
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    pub fn text_count(&self) -> usize {
        self.layout.text_count()
    }

    /// Length of text `text_id`, or `None` if there is no such text.
    pub fn text_len(&self, text_id: usize) -> Option<usize> {
        self.layout.text_len(text_id)
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[u8]) -> Result<usize, SearchError> {
        let mut cursor = self.cursor();
        match cursor.extend_right_seq(pattern) {
            Ok(()) => Ok(cursor.count()),
            Err(SearchError::EmptyMatch) => Ok(0),
            Err(err) => Err(err),
        }
    }

    /// All occurrences of `pattern`, ascending by `(text_id, position)`.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<Hit>, SearchError> {
        let mut cursor = self.cursor();
        match cursor.extend_right_seq(pattern) {
            Ok(()) => Ok(cursor.locate()),
            Err(SearchError::EmptyMatch) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Interval covering every row.
    #[inline]
    pub(crate) fn full_interval(&self) -> SaInterval {
        SaInterval::new(0, self.len())
    }

    /// One bidirectional extension step by alphabet rank `rank`.
    ///
    /// Returns the new `(fwd, rev)` pair, or `None` if it would be empty. The
    /// inputs are never partially updated.
    pub(crate) fn extend(
        &self,
        side: Side,
        rank: u8,
        fwd: SaInterval,
        rev: SaInterval,
    ) -> Option<(SaInterval, SaInterval)> {
        let code = rank + 1;
        match side {
            Side::Left => {
                let (fwd, smaller) = step(&self.fwd, code, fwd);
                let rev = SaInterval::new(rev.lb + smaller, rev.lb + smaller + fwd.len());
                (!fwd.is_empty()).then_some((fwd, rev))
            }
            Side::Right => {
                let (rev, smaller) = step(&self.rev, code, rev);
                let fwd = SaInterval::new(fwd.lb + smaller, fwd.lb + smaller + rev.len());
                (!rev.is_empty()).then_some((fwd, rev))
            }
        }
    }

    /// Hit for suffix array row `row`.
    #[inline]
    pub(crate) fn hit_at(&self, row: usize) -> Hit {
        self.layout.hit(self.suffix_array[row] as usize)
    }

    /// `hit` of a query of length `query_len`, in reversed-text coordinates.
    pub(crate) fn mirror_hit(&self, hit: Hit, query_len: usize) -> Hit {
        self.layout.mirror(hit, query_len)
    }

    /// Hits for every row of `interval`, in suffix array order.
    pub(crate) fn hits(&self, interval: SaInterval) -> impl Iterator<Item = Hit> + '_ {
        self.suffix_array[interval.lb..interval.rb]
            .iter()
            .map(|&pos| self.layout.hit(pos as usize))
    }
}

/// Backward-search step on one direction, plus the count of smaller codes in
/// the old interval.
#[inline]
fn step(direction: &DirectionIndex, code: u8, interval: SaInterval) -> (SaInterval, usize) {
    let (occurrences, smaller) = direction.bwt.rank_range(code, interval.lb, interval.rb);
    let lb = direction.counts[code as usize] + direction.bwt.rank(code, interval.lb);
    (SaInterval::new(lb, lb + occurrences), smaller)
}
