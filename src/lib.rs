//! Bidirectional FM-index with an incremental search cursor.
//!
//! This crate indexes one or more texts over a small fixed alphabet (DNA,
//! DNA with `N`, amino acids) and lets a cursor grow an exact-match query one
//! symbol at a time from either end, undo steps, and enumerate alternatives.
//! That is the building block for approximate search schemes that explore a
//! tree of partial matches.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ alphabet.rs  │────▶│  build/      │────▶│  index.rs    │
//! │ (Dna4, Dna5, │     │ (SA-IS, BWT, │     │ (BiFmIndex,  │
//! │  AminoAcid)  │     │  C table)    │     │  extend)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │  rank/       │     │  cursor/     │
//!                      │ (wavelet     │     │ (BiCursor,   │
//!                      │  matrix)     │     │  Fwd/Rev)    │
//!                      └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                     │
//! │  (sorted suffix array, monotone C table,            │
//! │   synchronized cursor intervals)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bifm::{BiFmIndex, Dna4};
//!
//! let index = BiFmIndex::<Dna4>::new(b"GAATTAATGAAC").unwrap();
//! let mut cursor = index.cursor();
//!
//! cursor.extend_right_seq(b"AAC").unwrap();
//! cursor.extend_left_seq(b"ATG").unwrap();
//! assert_eq!(cursor.query(), b"ATGAAC");
//! assert_eq!(cursor.count(), 1);
//!
//! // back to "AAC", then try the next last symbol that occurs
//! for _ in 0..3 {
//!     cursor.retract().unwrap();
//! }
//! assert_eq!(cursor.cycle_back(), Ok(true));
//! assert_eq!(cursor.query(), b"AAT");
//! ```

pub mod alphabet;
mod build;
pub mod contracts;
mod cursor;
mod error;
mod index;
mod rank;
pub mod testing;

pub use alphabet::{AminoAcid, Alphabet, Dna4, Dna5};
pub use build::{MAX_ALPHABET_SIZE, MAX_INDEX_LEN};
pub use cursor::{BiCursor, CursorState, FwdCursor, RevCursor};
pub use error::{BuildError, SearchError};
pub use index::{BiFmIndex, Hit, SaInterval, Side};
pub use rank::{RankBitVector, RankDictionary};
