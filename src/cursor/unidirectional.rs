//! One-directional views of a [`BiCursor`].
//!
//! After conversion a cursor only grows in one direction, so the API only
//! offers that direction. Both views keep the full history of the cursor they
//! came from, which lets them undo or cycle their own steps; steps made on the
//! other side before the conversion stay frozen.

use super::BiCursor;
use crate::alphabet::Alphabet;
use crate::error::SearchError;
use crate::index::{Hit, SaInterval, Side};

/// Searches rightward over the text.
///
/// Every extension appends to the query, so `query()` reads in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FwdCursor<'a, A: Alphabet> {
    inner: BiCursor<'a, A>,
}

impl<'a, A: Alphabet> FwdCursor<'a, A> {
    pub(crate) fn new(inner: BiCursor<'a, A>) -> Self {
        Self { inner }
    }

    pub fn extend_right(&mut self, symbol: u8) -> Result<(), SearchError> {
        self.inner.extend_right(symbol)
    }

    pub fn extend_right_seq(&mut self, symbols: &[u8]) -> Result<(), SearchError> {
        self.inner.extend_right_seq(symbols)
    }

    pub fn extend_right_any(&mut self) -> Result<(), SearchError> {
        self.inner.extend_any(Side::Right)
    }

    /// Swap the last symbol for the next larger one that occurs.
    ///
    /// Fails with [`SearchError::CapabilityUnavailableAfterConversion`] when
    /// the last step was a left extension made before the conversion.
    pub fn cycle_back(&mut self) -> Result<bool, SearchError> {
        self.check_own_step()?;
        self.inner.cycle(Side::Right)
    }

    pub fn retract(&mut self) -> Result<(), SearchError> {
        self.check_own_step()?;
        self.inner.retract()
    }

    pub fn last_char(&self) -> Result<u8, SearchError> {
        self.check_own_step()?;
        self.inner.last_char()
    }

    pub fn last_rank(&self) -> Result<u8, SearchError> {
        self.check_own_step()?;
        self.inner.last_rank()
    }

    pub fn query(&self) -> Vec<u8> {
        self.inner.query()
    }

    pub fn query_len(&self) -> usize {
        self.inner.query_len()
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Interval of the query over the forward suffix array.
    pub fn interval(&self) -> SaInterval {
        self.inner.fwd_interval()
    }

    pub fn locate(&self) -> Vec<Hit> {
        self.inner.locate()
    }

    pub fn lazy_locate(&self) -> impl Iterator<Item = Hit> + 'a {
        self.inner.lazy_locate()
    }

    pub fn path_label<'t>(&self, text: &'t [u8]) -> Option<&'t [u8]> {
        self.inner.path_label(text)
    }

    pub fn path_label_in<'t, T: AsRef<[u8]>>(&self, texts: &'t [T]) -> Option<&'t [u8]> {
        self.inner.path_label_in(texts)
    }

    fn check_own_step(&self) -> Result<(), SearchError> {
        check_last_side(&self.inner, Side::Right)
    }
}

/// Searches rightward over the reversed text, which is leftward over the text.
///
/// `query()` reads in the reversed orientation: extending a reverse cursor for
/// `AAC` by `G` gives `CAAG`. Positions from `locate` are in reversed-text
/// coordinates too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevCursor<'a, A: Alphabet> {
    inner: BiCursor<'a, A>,
}

impl<'a, A: Alphabet> RevCursor<'a, A> {
    pub(crate) fn new(inner: BiCursor<'a, A>) -> Self {
        Self { inner }
    }

    pub fn extend_right(&mut self, symbol: u8) -> Result<(), SearchError> {
        self.inner.extend_left(symbol)
    }

    /// Extend by `symbols` in reversed-text order, first symbol first.
    pub fn extend_right_seq(&mut self, symbols: &[u8]) -> Result<(), SearchError> {
        let ranks = super::ranks_of::<A>(symbols)?;
        self.inner.extend_ranks(Side::Left, &ranks)
    }

    pub fn extend_right_any(&mut self) -> Result<(), SearchError> {
        self.inner.extend_any(Side::Left)
    }

    pub fn cycle_back(&mut self) -> Result<bool, SearchError> {
        self.check_own_step()?;
        self.inner.cycle(Side::Left)
    }

    pub fn retract(&mut self) -> Result<(), SearchError> {
        self.check_own_step()?;
        self.inner.retract()
    }

    pub fn last_char(&self) -> Result<u8, SearchError> {
        self.check_own_step()?;
        self.inner.last_char()
    }

    pub fn last_rank(&self) -> Result<u8, SearchError> {
        self.check_own_step()?;
        self.inner.last_rank()
    }

    /// The query as read over the reversed text.
    pub fn query(&self) -> Vec<u8> {
        let mut query = self.inner.query();
        query.reverse();
        query
    }

    pub fn query_len(&self) -> usize {
        self.inner.query_len()
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Interval of the query over the reverse suffix array.
    pub fn interval(&self) -> SaInterval {
        self.inner.rev_interval()
    }

    /// Every occurrence in reversed-text coordinates, ascending by
    /// `(text_id, position)`.
    pub fn locate(&self) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self.lazy_locate().collect();
        hits.sort_unstable();
        hits
    }

    /// Every occurrence in reversed-text coordinates, in no particular order.
    pub fn lazy_locate(&self) -> impl Iterator<Item = Hit> + 'a {
        let index = self.inner.index();
        let query_len = self.inner.query_len();
        self.inner
            .lazy_locate()
            .map(move |hit| index.mirror_hit(hit, query_len))
    }

    fn check_own_step(&self) -> Result<(), SearchError> {
        check_last_side(&self.inner, Side::Left)
    }
}

fn check_last_side<A: Alphabet>(cursor: &BiCursor<'_, A>, side: Side) -> Result<(), SearchError> {
    match cursor.last_side() {
        None => Err(SearchError::InvalidOperationForState),
        Some(last) if last != side => Err(SearchError::CapabilityUnavailableAfterConversion),
        Some(_) => Ok(()),
    }
}
