//! Cycling visits every viable symbol once, in rank order.

use crate::common::{
    dna_collection, dna_pattern, dna_texts, naive_left_extensions, naive_right_extensions,
};
use bifm::{BiCursor, Dna4, SearchError};
use proptest::prelude::*;

/// Symbols reached by `first` and then repeated cycling.
fn walk(
    cursor: &mut BiCursor<'_, Dna4>,
    first: impl Fn(&mut BiCursor<'_, Dna4>) -> Result<(), SearchError>,
    cycle: impl Fn(&mut BiCursor<'_, Dna4>) -> Result<bool, SearchError>,
) -> Vec<u8> {
    let mut seen = Vec::new();
    if first(cursor).is_err() {
        return seen;
    }
    seen.push(cursor.last_char().unwrap());
    while cycle(cursor).unwrap() {
        seen.push(cursor.last_char().unwrap());
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn cycle_back_enumerates_right_extensions(texts in dna_texts(), pattern in dna_pattern(3)) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();
        prop_assume!(cursor.extend_right_seq(&pattern).is_ok());
        let expected = naive_right_extensions::<Dna4, _>(&texts, &pattern);

        let seen = walk(&mut cursor, |c| c.extend_right_any(), |c| c.cycle_back());
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn cycle_front_enumerates_left_extensions(texts in dna_texts(), pattern in dna_pattern(3)) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();
        prop_assume!(cursor.extend_left_seq(&pattern).is_ok());
        let expected = naive_left_extensions::<Dna4, _>(&texts, &pattern);

        let seen = walk(&mut cursor, |c| c.extend_left_any(), |c| c.cycle_front());
        prop_assert_eq!(seen, expected);
    }

    /// Cycling from an explicit symbol never revisits it and ends where it
    /// started when exhausted.
    #[test]
    fn cycle_from_symbol_only_moves_forward(texts in dna_texts(), pattern in dna_pattern(3), symbol in dna_pattern(1)) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();
        prop_assume!(cursor.extend_right_seq(&pattern).is_ok());
        prop_assume!(cursor.extend_right(symbol[0]).is_ok());

        let expected: Vec<u8> = naive_right_extensions::<Dna4, _>(&texts, &pattern)
            .into_iter()
            .filter(|&c| c >= symbol[0])
            .collect();

        let seen = walk(&mut cursor, |_| Ok(()), |c| c.cycle_back());
        prop_assert_eq!(&seen, &expected);

        let last = cursor.clone();
        prop_assert_eq!(cursor.cycle_back(), Ok(false));
        prop_assert_eq!(&cursor, &last);
    }
}
