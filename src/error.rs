//! Error types for index construction and cursor operations.
//!
//! Build errors are reported once, before any index exists. Search errors are
//! ordinary outcomes the caller branches on: searching for a substring that does not
//! occur is expected, so nothing here is a fatal fault.

use std::fmt;

/// Why an index could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A text contains a byte outside the alphabet.
    InvalidSymbol {
        text_id: usize,
        position: usize,
        symbol: u8,
    },
    /// The texts plus their separators exceed the addressable size.
    TextTooLong { len: usize },
    /// The alphabet is empty or has too many symbols for one-byte codes.
    UnsupportedAlphabet { size: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidSymbol {
                text_id,
                position,
                symbol,
            } => {
                write!(
                    f,
                    "text {} has invalid symbol {:?} at position {}",
                    text_id,
                    char::from(*symbol),
                    position
                )
            }
            BuildError::TextTooLong { len } => {
                write!(f, "total text length {} exceeds the index limit", len)
            }
            BuildError::UnsupportedAlphabet { size } => {
                write!(
                    f,
                    "alphabet of {} symbols is not supported (1 to {} allowed)",
                    size,
                    crate::build::MAX_ALPHABET_SIZE
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Why a cursor operation did not take effect.
///
/// In every case the cursor is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The extension would leave zero occurrences.
    EmptyMatch,
    /// The operation needs history the cursor does not have: cycling with no
    /// extension on the matching side, or `last_char` on an empty query.
    InvalidOperationForState,
    /// A cursor produced by `to_fwd_cursor`/`to_rev_cursor` was asked to revisit
    /// a step that was taken on the opposite side before conversion.
    CapabilityUnavailableAfterConversion,
    /// The byte is not a symbol of the index alphabet.
    UnknownSymbol(u8),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyMatch => write!(f, "extension has no occurrences"),
            SearchError::InvalidOperationForState => {
                write!(f, "operation not valid in the current cursor state")
            }
            SearchError::CapabilityUnavailableAfterConversion => {
                write!(
                    f,
                    "last extension was on the opposite side before conversion"
                )
            }
            SearchError::UnknownSymbol(symbol) => {
                write!(f, "symbol {:?} is not in the alphabet", char::from(*symbol))
            }
        }
    }
}

impl std::error::Error for SearchError {}
