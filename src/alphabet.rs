//! Alphabets: dense ranks for the symbols an index is built over.
//!
//! An alphabet is a finite ordered set of byte symbols. Each symbol has a dense
//! rank in `[0, size)`, and rank order is the order suffixes are sorted in and
//! the order `cycle_back`/`cycle_front` walk through candidates.
//!
//! Inside the index every rank `r` is shifted to code `r + 1`; code 0 is reserved
//! for the sentinel that terminates each text. Nothing outside `build` and `rank`
//! sees codes.

/// A finite ordered alphabet over byte symbols.
///
/// Implementors list their symbols in rank order in [`Alphabet::SYMBOLS`]. The
/// default `rank_of` folds ASCII lower case to upper case before the lookup.
pub trait Alphabet: Copy + Default + Send + Sync + 'static {
    /// Human-readable name, used in logs and CLI output.
    const NAME: &'static str;

    /// Symbols in rank order. Must be strictly ascending and non-empty.
    const SYMBOLS: &'static [u8];

    /// Number of symbols (σ).
    #[inline]
    fn size() -> usize {
        Self::SYMBOLS.len()
    }

    /// Dense rank of `symbol`, or `None` if the byte is not in the alphabet.
    #[inline]
    fn rank_of(symbol: u8) -> Option<u8> {
        let symbol = symbol.to_ascii_uppercase();
        Self::SYMBOLS
            .binary_search(&symbol)
            .ok()
            .map(|rank| rank as u8)
    }

    /// Symbol for a dense rank.
    ///
    /// # Panics
    /// Panics if `rank >= size()`.
    #[inline]
    fn symbol_of(rank: u8) -> u8 {
        Self::SYMBOLS[rank as usize]
    }
}

/// DNA without ambiguity codes: `A < C < G < T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dna4;

impl Alphabet for Dna4 {
    const NAME: &'static str = "dna4";
    const SYMBOLS: &'static [u8] = b"ACGT";
}

/// DNA with the `N` wildcard: `A < C < G < N < T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dna5;

impl Alphabet for Dna5 {
    const NAME: &'static str = "dna5";
    const SYMBOLS: &'static [u8] = b"ACGNT";
}

/// The 20 canonical amino acids plus `X` for unknown residues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AminoAcid;

impl Alphabet for AminoAcid {
    const NAME: &'static str = "protein";
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWXY";
}

/// Translate a byte sequence into dense ranks, reporting the first bad byte.
pub(crate) fn to_ranks<A: Alphabet>(symbols: &[u8]) -> Result<Vec<u8>, (usize, u8)> {
    symbols
        .iter()
        .enumerate()
        .map(|(position, &symbol)| A::rank_of(symbol).ok_or((position, symbol)))
        .collect()
}
