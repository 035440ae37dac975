//! Indexes over several texts.

use crate::common::{dna_collection, naive_occurrences};
use bifm::{AminoAcid, BiFmIndex, Dna4, Hit};

fn texts() -> Vec<Vec<u8>> {
    vec![
        b"ACGTACGT".to_vec(),
        b"".to_vec(),
        b"TTACG".to_vec(),
        b"GGGG".to_vec(),
    ]
}

#[test]
fn hits_report_their_text() {
    let texts = texts();
    let index = dna_collection(&texts);
    assert_eq!(index.text_count(), 4);

    let hits = index.locate(b"ACG").unwrap();
    assert_eq!(
        hits,
        vec![
            Hit { text_id: 0, position: 0 },
            Hit { text_id: 0, position: 4 },
            Hit { text_id: 2, position: 2 },
        ]
    );
    assert_eq!(hits, naive_occurrences(&texts, b"ACG"));
}

#[test]
fn matches_never_span_separators() {
    let texts = texts();
    let index = dna_collection(&texts);
    // "GTTT" would only exist across the end of text 0 and start of text 2
    assert_eq!(index.count(b"GTTT").unwrap(), 0);
    // "GG" inside text 3 only, not across "ACG" + "GGGG"
    assert_eq!(index.count(b"GGG").unwrap(), 2);
}

#[test]
fn left_extension_stops_at_text_start() {
    let texts = texts();
    let index = dna_collection(&texts);
    let mut cursor = index.cursor();
    // "TTACG" starts text 2; nothing extends it on the left
    cursor.extend_right_seq(b"TTACG").unwrap();
    assert_eq!(cursor.count(), 1);
    assert!(cursor.extend_left_any().is_err());
    assert_eq!(cursor.path_label_in(&texts), Some(&b"TTACG"[..]));
}

#[test]
fn path_label_needs_the_whole_collection() {
    let texts = [&b"AAAA"[..], b"CGT"];
    let index = BiFmIndex::<Dna4>::from_texts(texts).unwrap();
    let mut cursor = index.cursor();
    cursor.extend_right_seq(b"GT").unwrap();
    assert_eq!(cursor.locate(), vec![Hit { text_id: 1, position: 1 }]);

    // a single text cannot stand in for a collection
    assert_eq!(cursor.path_label(texts[0]), None);
    assert_eq!(cursor.path_label(texts[1]), None);
    assert_eq!(cursor.path_label_in(&texts[..1]), None);
    assert_eq!(cursor.path_label_in(&texts), Some(&b"GT"[..]));

    let fwd = cursor.to_fwd_cursor();
    assert_eq!(fwd.path_label_in(&texts), Some(&b"GT"[..]));
}

#[test]
fn empty_pattern_locates_every_row() {
    let texts = texts();
    let index = dna_collection(&texts);
    let cursor = index.cursor();
    assert_eq!(cursor.count(), index.len());
    assert_eq!(cursor.locate(), naive_occurrences(&texts, b""));
}

#[test]
fn protein_collection() {
    let proteins = [&b"MKVLAAGIVG"[..], b"MKVW", b"AAGW"];
    let index = BiFmIndex::<AminoAcid>::from_texts(proteins).unwrap();
    assert_eq!(index.count(b"MKV").unwrap(), 2);
    assert_eq!(index.count(b"AAG").unwrap(), 2);

    let mut cursor = index.cursor();
    cursor.extend_left_seq(b"AG").unwrap();
    cursor.extend_left(b'A').unwrap();
    let ids: Vec<usize> = cursor.locate().iter().map(|hit| hit.text_id).collect();
    assert_eq!(ids, vec![0, 2]);
}
