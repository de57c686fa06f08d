
use _fixtures::{coinbase_leaf, p2pkh_script, spend_leaf};
use insta::assert_snapshot;
use utreexo_leaf::{LeafRecord, BLOCK_HASH_SIZE_DISCREPANCY};

#[test]
fn canonical_layout_of_spend_leaf() {
    let bytes = spend_leaf().to_bytes().expect("encode");
    assert_snapshot!(
        hex::encode(&bytes),
        @"000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f010aff00f2052a010000001976a914111111111111111111111111111111111111111188ac"
    );
    // txid, vout, header code, 9-byte amount, script length, script
    assert_eq!(bytes.len(), 32 + 1 + 1 + 9 + 1 + 25);
}

#[test]
fn canonical_layout_of_coinbase_leaf() {
    let bytes = coinbase_leaf().to_bytes().expect("encode");
    assert_snapshot!(
        hex::encode(&bytes),
        @"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa00010000"
    );
}

#[test]
fn compact_layout_drops_outpoint() {
    let record = spend_leaf();
    let full = record.to_bytes().expect("encode");
    let compact = record.to_compact_bytes().expect("encode compact");
    assert_snapshot!(
        hex::encode(&compact),
        @"0aff00f2052a010000001976a914111111111111111111111111111111111111111188ac"
    );
    assert_eq!(&full[33..], &compact[..]);
    assert_eq!(compact.len(), record.serialize_size_compact());
}

#[test]
fn block_hash_is_not_written() {
    let mut other = spend_leaf();
    other.block_hash = utreexo_leaf::Hash::from_bytes([0x99; 32]);
    assert_eq!(
        other.to_bytes().expect("encode"),
        spend_leaf().to_bytes().expect("encode")
    );
}

#[test]
fn size_reserves_unwritten_block_hash() {
    for record in [spend_leaf(), coinbase_leaf()] {
        let written = record.to_bytes().expect("encode").len();
        assert_eq!(record.serialize_size(), written + BLOCK_HASH_SIZE_DISCREPANCY);
    }
    assert_eq!(BLOCK_HASH_SIZE_DISCREPANCY, 32);
}

#[test]
fn size_counts_header_code_not_height() {
    // Height 200 fits one varint byte, its header code 400 needs three.
    let record = LeafRecord {
        height: 200,
        ..spend_leaf()
    };
    let written = record.to_bytes().expect("encode").len();
    assert_eq!(record.serialize_size(), written + BLOCK_HASH_SIZE_DISCREPANCY);
    assert_eq!(record.serialize_size_compact(), 3 + 9 + 1 + 25);
}

#[test]
fn header_code_examples() {
    let coinbase = coinbase_leaf();
    assert_eq!(coinbase.header_code().raw(), 1);
    assert_eq!(coinbase.to_compact_bytes().expect("encode")[0], 0x01);

    let spend = spend_leaf();
    assert_eq!(spend.header_code().raw(), 10);
    assert_eq!(spend.to_compact_bytes().expect("encode")[0], 0x0a);
}

#[test]
fn empty_script_has_zero_length_prefix() {
    let record = LeafRecord {
        pk_script: Vec::new(),
        ..spend_leaf()
    };
    let bytes = record.to_bytes().expect("encode");
    assert_eq!(bytes.last(), Some(&0x00));
    let decoded = LeafRecord::from_bytes(&bytes).expect("decode");
    assert!(decoded.pk_script.is_empty());

    let compact = record.to_compact_bytes().expect("encode compact");
    assert_eq!(compact.last(), Some(&0x00));
    assert!(LeafRecord::from_compact_bytes(&compact)
        .expect("decode compact")
        .pk_script
        .is_empty());
}

#[test]
fn script_bytes_are_copied_verbatim() {
    let bytes = spend_leaf().to_bytes().expect("encode");
    assert!(bytes.ends_with(&p2pkh_script()));
}
