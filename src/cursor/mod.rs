// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursors: incremental exact search over a [`BiFmIndex`].
//!
//! A [`BiCursor`] holds the live state of one search: the synchronized pair of
//! suffix array intervals for the current query, and the history of every
//! extension that produced it. The query grows one symbol at a time from either
//! end, and the most recent extension can be undone or swapped for the next
//! symbol in rank order ("cycling").
//!
//! # State machine
//!
//! ```text
//!   state           extend_right     extend_left     cycle_back   cycle_front
//!   Start           RightExtended    LeftExtended    error        error
//!   RightExtended   RightExtended    LeftExtended    same state   error
//!   LeftExtended    RightExtended    LeftExtended    error        same state
//! ```
//!
//! The state is a function of the history: `Start` when it is empty, otherwise
//! the side of the most recent step. `cycle_back` needs `RightExtended`,
//! `cycle_front` needs `LeftExtended`; anything else is rejected with
//! [`SearchError::InvalidOperationForState`].
//!
//! Every operation either succeeds completely or leaves the cursor exactly as
//! it was, and both intervals always have the same size.

mod unidirectional;

pub use unidirectional::{FwdCursor, RevCursor};

use std::collections::VecDeque;
use std::fmt;

use crate::alphabet::Alphabet;
use crate::contracts;
use crate::error::SearchError;
use crate::index::{BiFmIndex, Hit, SaInterval, Side};

/// One extension, with the intervals it was applied to so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    rank: u8,
    side: Side,
    parent_fwd: SaInterval,
    parent_rev: SaInterval,
}

/// Which cycling operation, if any, a cursor currently supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Empty query, no history.
    Start,
    /// The most recent step extended the query on the right.
    RightExtended,
    /// The most recent step extended the query on the left.
    LeftExtended,
}

/// Bidirectional search cursor.
///
/// Cheap to clone (a reference to the index plus the extension history). Not
/// meant to be shared mutably; give each worker its own cursor.
pub struct BiCursor<'a, A: Alphabet> {
    index: &'a BiFmIndex<A>,
    fwd: SaInterval,
    rev: SaInterval,
    steps: Vec<Step>,
}

impl<'a, A: Alphabet> BiCursor<'a, A> {
    pub(crate) fn new(index: &'a BiFmIndex<A>) -> Self {
        let full = index.full_interval();
        Self {
            index,
            fwd: full,
            rev: full,
            steps: Vec::new(),
        }
    }

    /// The index this cursor searches.
    pub fn index(&self) -> &'a BiFmIndex<A> {
        self.index
    }

    // =========================================================================
    // EXTENSION
    // =========================================================================

    /// Append `symbol` to the right end of the query.
    pub fn extend_right(&mut self, symbol: u8) -> Result<(), SearchError> {
        let rank = rank_of::<A>(symbol)?;
        self.extend_rank(Side::Right, rank)
    }

    /// Prepend `symbol` to the left end of the query.
    pub fn extend_left(&mut self, symbol: u8) -> Result<(), SearchError> {
        let rank = rank_of::<A>(symbol)?;
        self.extend_rank(Side::Left, rank)
    }

    /// Append `symbols` to the right end, first symbol first.
    ///
    /// All or nothing: if any prefix of `symbols` runs out of occurrences the
    /// cursor is restored to its state before the call.
    pub fn extend_right_seq(&mut self, symbols: &[u8]) -> Result<(), SearchError> {
        let ranks = ranks_of::<A>(symbols)?;
        self.extend_ranks(Side::Right, &ranks)
    }

    /// Prepend `symbols` to the left end so that the query becomes
    /// `symbols + query`.
    ///
    /// The rightmost symbol is applied first, since it is the one adjacent to
    /// the current match. All or nothing, like [`extend_right_seq`](Self::extend_right_seq).
    pub fn extend_left_seq(&mut self, symbols: &[u8]) -> Result<(), SearchError> {
        let mut ranks = ranks_of::<A>(symbols)?;
        ranks.reverse();
        self.extend_ranks(Side::Left, &ranks)
    }

    /// Extend on the right by the smallest-rank symbol that still occurs.
    pub fn extend_right_any(&mut self) -> Result<(), SearchError> {
        self.extend_any(Side::Right)
    }

    /// Extend on the left by the smallest-rank symbol that still occurs.
    pub fn extend_left_any(&mut self) -> Result<(), SearchError> {
        self.extend_any(Side::Left)
    }

    pub(crate) fn extend_rank(&mut self, side: Side, rank: u8) -> Result<(), SearchError> {
        let Some((fwd, rev)) = self.index.extend(side, rank, self.fwd, self.rev) else {
            tracing::trace!(?side, symbol = %char::from(A::symbol_of(rank)), "no occurrences");
            return Err(SearchError::EmptyMatch);
        };

        contracts::check_intervals_synchronized(fwd, rev);

        self.steps.push(Step {
            rank,
            side,
            parent_fwd: self.fwd,
            parent_rev: self.rev,
        });
        self.fwd = fwd;
        self.rev = rev;

        tracing::trace!(
            ?side,
            symbol = %char::from(A::symbol_of(rank)),
            count = fwd.len(),
            depth = self.steps.len(),
            "extended"
        );
        Ok(())
    }

    /// Apply `ranks` in order on `side`, rolling back on the first failure.
    pub(crate) fn extend_ranks(&mut self, side: Side, ranks: &[u8]) -> Result<(), SearchError> {
        let mark = self.steps.len();
        for &rank in ranks {
            if let Err(err) = self.extend_rank(side, rank) {
                self.truncate(mark);
                return Err(err);
            }
        }
        Ok(())
    }

    pub(crate) fn extend_any(&mut self, side: Side) -> Result<(), SearchError> {
        for rank in 0..A::size() as u8 {
            if self.extend_rank(side, rank).is_ok() {
                return Ok(());
            }
        }
        Err(SearchError::EmptyMatch)
    }

    // =========================================================================
    // RETRACT / CYCLE
    // =========================================================================

    /// Undo the most recent extension, whichever side it was on.
    pub fn retract(&mut self) -> Result<(), SearchError> {
        let step = self
            .steps
            .pop()
            .ok_or(SearchError::InvalidOperationForState)?;
        self.fwd = step.parent_fwd;
        self.rev = step.parent_rev;
        Ok(())
    }

    /// Replace the most recent right extension with the next larger symbol that
    /// still occurs.
    ///
    /// Returns `Ok(false)` when no larger symbol occurs; the cursor is then
    /// unchanged. Only valid in [`CursorState::RightExtended`].
    pub fn cycle_back(&mut self) -> Result<bool, SearchError> {
        self.cycle(Side::Right)
    }

    /// Replace the most recent left extension with the next larger symbol that
    /// still occurs. Only valid in [`CursorState::LeftExtended`].
    pub fn cycle_front(&mut self) -> Result<bool, SearchError> {
        self.cycle(Side::Left)
    }

    pub(crate) fn cycle(&mut self, side: Side) -> Result<bool, SearchError> {
        let last = match self.steps.last() {
            Some(step) if step.side == side => *step,
            _ => return Err(SearchError::InvalidOperationForState),
        };
        let (fwd, rev) = (self.fwd, self.rev);

        self.steps.pop();
        self.fwd = last.parent_fwd;
        self.rev = last.parent_rev;

        for rank in last.rank + 1..A::size() as u8 {
            if self.extend_rank(side, rank).is_ok() {
                return Ok(true);
            }
        }

        self.steps.push(last);
        self.fwd = fwd;
        self.rev = rev;
        Ok(false)
    }

    /// Drop steps until only `len` remain, restoring the intervals they started from.
    fn truncate(&mut self, len: usize) {
        if let Some(step) = self.steps.get(len) {
            self.fwd = step.parent_fwd;
            self.rev = step.parent_rev;
            self.steps.truncate(len);
        }
    }

    // =========================================================================
    // CONVERSION
    // =========================================================================

    /// A cursor that keeps growing the match rightward over the text.
    ///
    /// Always succeeds. If the most recent step was on the left, the new cursor
    /// cannot revisit it: `cycle_back`, `retract` and `last_char` report
    /// [`SearchError::CapabilityUnavailableAfterConversion`] until it has made
    /// a step of its own.
    pub fn to_fwd_cursor(&self) -> FwdCursor<'a, A> {
        FwdCursor::new(self.clone())
    }

    /// A cursor that grows rightward over the reversed text, i.e. leftward over
    /// the original. Mirror image of [`to_fwd_cursor`](Self::to_fwd_cursor).
    pub fn to_rev_cursor(&self) -> RevCursor<'a, A> {
        RevCursor::new(self.clone())
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    pub fn state(&self) -> CursorState {
        match self.last_side() {
            None => CursorState::Start,
            Some(Side::Right) => CursorState::RightExtended,
            Some(Side::Left) => CursorState::LeftExtended,
        }
    }

    /// Side of the most recent step, `None` on an empty history.
    pub fn last_side(&self) -> Option<Side> {
        self.steps.last().map(|step| step.side)
    }

    /// Number of occurrences of the query.
    #[inline]
    pub fn count(&self) -> usize {
        self.fwd.len()
    }

    /// Length of the query.
    #[inline]
    pub fn query_len(&self) -> usize {
        self.steps.len()
    }

    /// Interval of the query over the forward suffix array.
    #[inline]
    pub fn fwd_interval(&self) -> SaInterval {
        self.fwd
    }

    /// Interval of the reversed query over the reverse suffix array.
    #[inline]
    pub fn rev_interval(&self) -> SaInterval {
        self.rev
    }

    /// The matched substring, left to right, rebuilt from the history.
    pub fn query(&self) -> Vec<u8> {
        let mut query = VecDeque::with_capacity(self.steps.len());
        for step in &self.steps {
            let symbol = A::symbol_of(step.rank);
            match step.side {
                Side::Left => query.push_front(symbol),
                Side::Right => query.push_back(symbol),
            }
        }
        query.into()
    }

    /// The matched substring, sliced out of the indexed text.
    ///
    /// For a single-text index only: returns `None` when the index holds more
    /// than one text (use [`path_label_in`](Self::path_label_in) there) or when
    /// `text` is too short to be the indexed text.
    pub fn path_label<'t>(&self, text: &'t [u8]) -> Option<&'t [u8]> {
        if self.index.text_count() != 1 {
            return None;
        }
        let hit = self.first_hit()?;
        text.get(hit.position..hit.position + self.query_len())
    }

    /// The matched substring, sliced out of the indexed collection.
    ///
    /// Returns `None` when `texts` cannot be the collection the index was
    /// built from (too few texts, or a text too short).
    pub fn path_label_in<'t, T: AsRef<[u8]>>(&self, texts: &'t [T]) -> Option<&'t [u8]> {
        if texts.len() != self.index.text_count() {
            return None;
        }
        let hit = self.first_hit()?;
        texts
            .get(hit.text_id)?
            .as_ref()
            .get(hit.position..hit.position + self.query_len())
    }

    fn first_hit(&self) -> Option<Hit> {
        (!self.fwd.is_empty()).then(|| self.index.hit_at(self.fwd.lb))
    }

    /// Symbol of the most recent extension.
    pub fn last_char(&self) -> Result<u8, SearchError> {
        self.last_rank().map(A::symbol_of)
    }

    /// Alphabet rank of the most recent extension.
    pub fn last_rank(&self) -> Result<u8, SearchError> {
        self.steps
            .last()
            .map(|step| step.rank)
            .ok_or(SearchError::InvalidOperationForState)
    }

    /// Every occurrence, ascending by `(text_id, position)`.
    pub fn locate(&self) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self.lazy_locate().collect();
        hits.sort_unstable();
        hits
    }

    /// Every occurrence, in suffix array order (no particular text order).
    pub fn lazy_locate(&self) -> impl Iterator<Item = Hit> + 'a {
        self.index.hits(self.fwd)
    }
}

impl<A: Alphabet> Clone for BiCursor<'_, A> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            fwd: self.fwd,
            rev: self.rev,
            steps: self.steps.clone(),
        }
    }
}

/// Two cursors are equal when they search the same index with identical
/// intervals and history.
impl<A: Alphabet> PartialEq for BiCursor<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.index, other.index)
            && self.fwd == other.fwd
            && self.rev == other.rev
            && self.steps == other.steps
    }
}

impl<A: Alphabet> Eq for BiCursor<'_, A> {}

impl<A: Alphabet> fmt::Debug for BiCursor<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiCursor")
            .field("query", &String::from_utf8_lossy(&self.query()))
            .field("state", &self.state())
            .field("fwd", &self.fwd)
            .field("rev", &self.rev)
            .finish()
    }
}

fn rank_of<A: Alphabet>(symbol: u8) -> Result<u8, SearchError> {
    A::rank_of(symbol).ok_or(SearchError::UnknownSymbol(symbol))
}

fn ranks_of<A: Alphabet>(symbols: &[u8]) -> Result<Vec<u8>, SearchError> {
    symbols.iter().map(|&symbol| rank_of::<A>(symbol)).collect()
}
