//! Round-trip the binary embedding format through real files.
//!
//! Builds the on-disk layout byte by byte, decodes it, and verifies the
//! values bit-exactly; then drives the write path and checks the produced
//! bytes against the same layout.

use std::fs;

use embedrank_storage::{decode, load_table, save_table, CodecError, EmbeddingTable, StorageError};

/// Little-endian fixture with two ids of different lengths.
fn handmade_file_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&2u32.to_le_bytes()); // num_items
    bytes.extend_from_slice(&3u32.to_le_bytes()); // dim
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(b"u1");
    bytes.extend_from_slice(&7u32.to_le_bytes());
    bytes.extend_from_slice(b"user_22");
    for value in [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0] {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[test]
fn decode_handmade_file() {
    let table = decode(&handmade_file_bytes()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.dim(), 3);
    assert_eq!(table.ids(), &["u1".to_string(), "user_22".to_string()]);
    assert_eq!(table.lookup("u1"), Some(&[1.0f32, 0.0, 0.0][..]));
    assert_eq!(table.lookup("user_22"), Some(&[0.0f32, 1.0, 0.0][..]));
}

#[test]
fn file_round_trip_is_bit_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.bin");

    let table = EmbeddingTable::new(
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![
            0.1,
            -0.2,
            f32::NAN,
            f32::INFINITY,
            1e-38,
            -0.0,
            123.456,
            -9.87,
            0.0,
        ],
    )
    .unwrap();

    save_table(&path, &table).unwrap();
    let loaded = load_table(&path).unwrap();

    assert_eq!(loaded.ids(), table.ids());
    let original_bits: Vec<u32> = table.vectors().iter().map(|v| v.to_bits()).collect();
    let loaded_bits: Vec<u32> = loaded.vectors().iter().map(|v| v.to_bits()).collect();
    assert_eq!(original_bits, loaded_bits);
}

#[test]
fn saved_file_matches_handmade_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.bin");

    let table = EmbeddingTable::new(
        vec!["u1".to_string(), "user_22".to_string()],
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    )
    .unwrap();
    save_table(&path, &table).unwrap();

    assert_eq!(fs::read(&path).unwrap(), handmade_file_bytes());
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.bin");

    let mut bytes = handmade_file_bytes();
    bytes.truncate(bytes.len() - 6); // cut into the float payload
    fs::write(&path, &bytes).unwrap();

    match load_table(&path) {
        Err(StorageError::Format {
            source: CodecError::InvalidPayloadSize { .. },
            ..
        }) => {}
        other => panic!("expected payload size error, got {:?}", other),
    }
}

#[test]
fn id_overrun_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrun.bin");

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&4u32.to_le_bytes());
    bytes.extend_from_slice(&1000u32.to_le_bytes()); // id length past EOF
    bytes.extend_from_slice(b"xy");
    fs::write(&path, &bytes).unwrap();

    match load_table(&path) {
        Err(StorageError::Format {
            source: CodecError::IdOverrun { index: 0, .. },
            ..
        }) => {}
        other => panic!("expected id overrun error, got {:?}", other),
    }
}
