
use _fixtures::{coinbase_leaf, spend_leaf, without_block_hash};
use proptest::prelude::*;
use utreexo_leaf::{
    CompactLeaf, Hash, HeaderCode, LeafRecord, OutPoint, BLOCK_HASH_SIZE_DISCREPANCY,
    MAX_SCRIPT_SIZE,
};

fn leaf_strategy() -> impl Strategy<Value = LeafRecord> {
    (
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>())
            .prop_filter("txid must be non-zero", |bytes| bytes.iter().any(|b| *b != 0)),
        any::<u32>(),
        0..=i32::MAX,
        any::<bool>(),
        0..=i64::MAX,
        prop::collection::vec(any::<u8>(), 0..512),
    )
        .prop_map(
            |(block_hash, txid, index, height, is_coinbase, amount, pk_script)| LeafRecord {
                block_hash: Hash::from_bytes(block_hash),
                outpoint: OutPoint::new(Hash::from_bytes(txid), index),
                height,
                is_coinbase,
                amount,
                pk_script,
            },
        )
}

#[test]
fn fixtures_roundtrip() {
    for record in [spend_leaf(), coinbase_leaf()] {
        let bytes = record.to_bytes().expect("encode");
        let decoded = LeafRecord::from_bytes(&bytes).expect("decode");
        assert_eq!(decoded, without_block_hash(&record));
    }
}

#[test]
fn streaming_decode_reads_consecutive_leaves() {
    let mut stream = Vec::new();
    spend_leaf().serialize(&mut stream).expect("encode");
    coinbase_leaf().serialize(&mut stream).expect("encode");

    let mut source = &stream[..];
    let first = LeafRecord::deserialize(&mut source).expect("first");
    let second = LeafRecord::deserialize(&mut source).expect("second");
    assert!(source.is_empty());
    assert_eq!(first, without_block_hash(&spend_leaf()));
    assert_eq!(second, without_block_hash(&coinbase_leaf()));
}

#[test]
fn max_script_roundtrips() {
    let record = LeafRecord {
        pk_script: vec![0x6a; MAX_SCRIPT_SIZE],
        ..spend_leaf()
    };
    let bytes = record.to_bytes().expect("encode");
    assert_eq!(LeafRecord::from_bytes(&bytes).expect("decode"), without_block_hash(&record));

    let compact = record.to_compact_bytes().expect("encode compact");
    let decoded = LeafRecord::from_compact_bytes(&compact).expect("decode compact");
    assert_eq!(decoded.pk_script.len(), MAX_SCRIPT_SIZE);
}

proptest! {
    #[test]
    fn full_roundtrip(record in leaf_strategy()) {
        let bytes = record.to_bytes().expect("encode");
        prop_assert_eq!(record.serialize_size(), bytes.len() + BLOCK_HASH_SIZE_DISCREPANCY);
        let decoded = LeafRecord::from_bytes(&bytes).expect("decode");
        prop_assert_eq!(decoded, without_block_hash(&record));
    }

    #[test]
    fn compact_roundtrip(record in leaf_strategy()) {
        let bytes = record.to_compact_bytes().expect("encode compact");
        prop_assert_eq!(record.serialize_size_compact(), bytes.len());
        let decoded = LeafRecord::from_compact_bytes(&bytes).expect("decode compact");
        prop_assert_eq!(
            &decoded,
            &CompactLeaf {
                height: record.height,
                is_coinbase: record.is_coinbase,
                amount: record.amount,
                pk_script: record.pk_script.clone(),
            }
        );
        let restored = decoded.into_leaf(record.block_hash, record.outpoint);
        prop_assert_eq!(restored, record);
    }

    #[test]
    fn header_code_unpacks(height in 0..=i32::MAX, is_coinbase in any::<bool>()) {
        let code = HeaderCode::pack(height, is_coinbase);
        prop_assert_eq!(code.raw(), ((height as u64) << 1) | is_coinbase as u64);
        prop_assert_eq!(code.height(), Some(height));
        prop_assert_eq!(code.is_coinbase(), is_coinbase);
        prop_assert_eq!(HeaderCode::from_raw(code.raw()), code);
    }
}
