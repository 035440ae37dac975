//! Serialized indexes answer exactly like the original.

use crate::common::{dna_collection, GENOME};
use bifm::{BiFmIndex, Dna4};

#[test]
fn json_round_trip_preserves_search_state() {
    let texts = vec![GENOME.to_vec(), b"TTGCA".to_vec()];
    let index = dna_collection(&texts);

    let json = serde_json::to_string(&index).unwrap();
    let restored: BiFmIndex<Dna4> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), index.len());
    assert_eq!(restored.text_count(), 2);

    for pattern in [&b"AAT"[..], b"GCA", b"TTG", b"A", b"CCC"] {
        let mut original = index.cursor();
        let mut copy = restored.cursor();
        assert_eq!(original.extend_left_seq(pattern), copy.extend_left_seq(pattern));
        assert_eq!(original.fwd_interval(), copy.fwd_interval());
        assert_eq!(original.rev_interval(), copy.rev_interval());
        assert_eq!(original.locate(), copy.locate());
    }
}
