//! Random operation sequences keep the cursor consistent with a brute-force
//! model of the query.

use crate::common::{
    assert_cursor_consistent, dna_collection, dna_pattern, dna_texts, naive_count, op, Op,
};
use bifm::{CursorState, SearchError};
use proptest::prelude::*;

fn prepend(symbol: u8, query: &[u8]) -> Vec<u8> {
    let mut out = vec![symbol];
    out.extend_from_slice(query);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Extensions succeed exactly when the extended query occurs, and the
    /// query is always the left-to-right concatenation of what was added.
    #[test]
    fn operations_track_model(texts in dna_texts(), ops in prop::collection::vec(op(), 0..40)) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();

        for op in ops {
            let before = cursor.clone();
            let query = cursor.query();

            match op {
                Op::Right(symbol) => {
                    let mut expected = query.clone();
                    expected.push(symbol);
                    let occurs = naive_count(&texts, &expected) > 0;
                    match cursor.extend_right(symbol) {
                        Ok(()) => {
                            prop_assert!(occurs);
                            prop_assert_eq!(cursor.query(), expected);
                            prop_assert_eq!(cursor.state(), CursorState::RightExtended);
                        }
                        Err(err) => {
                            prop_assert_eq!(err, SearchError::EmptyMatch);
                            prop_assert!(!occurs);
                            prop_assert_eq!(&cursor, &before);
                        }
                    }
                }
                Op::Left(symbol) => {
                    let expected = prepend(symbol, &query);
                    let occurs = naive_count(&texts, &expected) > 0;
                    match cursor.extend_left(symbol) {
                        Ok(()) => {
                            prop_assert!(occurs);
                            prop_assert_eq!(cursor.query(), expected);
                            prop_assert_eq!(cursor.state(), CursorState::LeftExtended);
                        }
                        Err(err) => {
                            prop_assert_eq!(err, SearchError::EmptyMatch);
                            prop_assert!(!occurs);
                            prop_assert_eq!(&cursor, &before);
                        }
                    }
                }
                Op::CycleBack => match cursor.cycle_back() {
                    Ok(true) => {
                        prop_assert_eq!(cursor.query_len(), query.len());
                        prop_assert_eq!(&cursor.query()[..query.len() - 1], &query[..query.len() - 1]);
                        prop_assert!(cursor.last_char().unwrap() > *query.last().unwrap());
                    }
                    Ok(false) => prop_assert_eq!(&cursor, &before),
                    Err(err) => {
                        prop_assert_eq!(err, SearchError::InvalidOperationForState);
                        prop_assert_ne!(before.state(), CursorState::RightExtended);
                        prop_assert_eq!(&cursor, &before);
                    }
                },
                Op::CycleFront => match cursor.cycle_front() {
                    Ok(true) => {
                        prop_assert_eq!(&cursor.query()[1..], &query[1..]);
                        prop_assert!(cursor.last_char().unwrap() > query[0]);
                    }
                    Ok(false) => prop_assert_eq!(&cursor, &before),
                    Err(err) => {
                        prop_assert_eq!(err, SearchError::InvalidOperationForState);
                        prop_assert_ne!(before.state(), CursorState::LeftExtended);
                        prop_assert_eq!(&cursor, &before);
                    }
                },
                Op::Retract => match cursor.retract() {
                    Ok(()) => prop_assert_eq!(cursor.query_len(), query.len() - 1),
                    Err(_) => prop_assert_eq!(before.state(), CursorState::Start),
                },
            }

            assert_cursor_consistent(&cursor, &texts);
            if let Some(text_id) = cursor.locate().first().map(|hit| hit.text_id) {
                prop_assert!(text_id < texts.len());
                let query = cursor.query();
                prop_assert_eq!(cursor.path_label_in(&texts), Some(&query[..]));
            }
        }
    }

    /// A batch that fails partway leaves no trace.
    #[test]
    fn failed_batches_are_atomic(
        texts in dna_texts(),
        seed in dna_pattern(3),
        batch in dna_pattern(6),
        left in any::<bool>(),
    ) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();
        // best effort seed; whatever prefix exists
        for &symbol in &seed {
            let _ = cursor.extend_right(symbol);
        }
        let snapshot = cursor.clone();

        let result = if left {
            cursor.extend_left_seq(&batch)
        } else {
            cursor.extend_right_seq(&batch)
        };

        let query = snapshot.query();
        let expected = if left {
            [batch.as_slice(), query.as_slice()].concat()
        } else {
            [query.as_slice(), batch.as_slice()].concat()
        };

        if naive_count(&texts, &expected) > 0 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(cursor.query(), expected);
        } else {
            prop_assert_eq!(result, Err(SearchError::EmptyMatch));
            prop_assert_eq!(&cursor, &snapshot);
        }
    }

    /// Building a pattern on the left and continuing forward reads the
    /// pattern in text order.
    #[test]
    fn left_then_forward_keeps_text_order(texts in dna_texts(), pattern in dna_pattern(4), next in dna_pattern(1)) {
        let index = dna_collection(&texts);
        let mut cursor = index.cursor();
        prop_assume!(cursor.extend_left_seq(&pattern).is_ok());

        let mut fwd = cursor.to_fwd_cursor();
        prop_assert_eq!(fwd.query(), pattern.clone());

        let mut expected = pattern.clone();
        expected.push(next[0]);
        let extended = fwd.extend_right(next[0]).is_ok();
        prop_assert_eq!(extended, naive_count(&texts, &expected) > 0);
        if extended {
            prop_assert_eq!(fwd.query(), expected);
        }
    }
}
