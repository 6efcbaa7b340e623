//! Binary embedding table codec.
//!
//! Encodes and decodes the on-disk embedding format using raw little-endian
//! bytes; each f32 is exactly 4 bytes with no framing overhead.
//!
//! # Layout
//!
//! | Field | Format |
//! |-------|--------|
//! | `num_items` | `u32` LE |
//! | `dim` | `u32` LE |
//! | ids, × `num_items` | `u32` LE length prefix, then that many bytes |
//! | vectors | `num_items * dim` × `f32` LE, row-major in id order |
//!
//! Decoding cross-checks the float payload against the header: a payload
//! whose byte count differs from `num_items * dim * 4` is rejected, never
//! silently truncated or padded. Float values themselves are not validated;
//! NaN and infinity pass through bit-exact.

use embedrank_core::{CoreError, EmbeddingTable};
use thiserror::Error;

/// Byte length of the `num_items`/`dim` header.
const HEADER_LEN: usize = 8;

/// Errors produced while decoding a binary embedding table.
///
/// # Example
///
/// ```rust
/// use embedrank_storage::codec::{decode, CodecError};
///
/// let bad = vec![0u8; 4]; // half a header
/// match decode(&bad) {
///     Err(CodecError::TruncatedHeader { actual }) => assert_eq!(actual, 4),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input ends before the 8-byte `num_items`/`dim` header.
    #[error("Truncated header: need at least 8 bytes, got {actual}")]
    TruncatedHeader {
        /// Total input length
        actual: usize,
    },

    /// An id record (length prefix or id bytes) runs past the end of the
    /// buffer.
    #[error("Id record {index} overruns buffer: need {needed} bytes, {remaining} remaining")]
    IdOverrun {
        /// Zero-based id record index
        index: usize,
        /// Bytes required to finish the record
        needed: usize,
        /// Bytes actually remaining
        remaining: usize,
    },

    /// Id bytes are not valid UTF-8.
    ///
    /// Ids are carried as `String`, so raw non-text bytes are rejected at
    /// the decode boundary rather than smuggled through.
    #[error("Id record {index} is not valid UTF-8")]
    InvalidId {
        /// Zero-based id record index
        index: usize,
    },

    /// The float payload does not match `num_items * dim * 4` bytes.
    ///
    /// Covers both truncated files and trailing garbage.
    #[error("Invalid vector payload: expected {expected} bytes, got {actual}")]
    InvalidPayloadSize {
        /// Required payload bytes per the header
        expected: u64,
        /// Payload bytes present
        actual: u64,
    },

    /// The decoded ids and vectors do not form a valid table.
    #[error("Malformed table: {0}")]
    MalformedTable(#[from] CoreError),
}

/// Decode a binary embedding table.
///
/// # Errors
///
/// Returns a [`CodecError`] describing the first malformed region: a
/// missing header, an id record overrunning the buffer, a non-UTF-8 id, or
/// a float payload whose size disagrees with the header.
pub fn decode(bytes: &[u8]) -> Result<EmbeddingTable, CodecError> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::TruncatedHeader {
            actual: bytes.len(),
        });
    }

    let num_items = read_u32(bytes, 0) as usize;
    let dim = read_u32(bytes, 4) as usize;
    let mut offset = HEADER_LEN;

    let mut ids = Vec::new();
    for index in 0..num_items {
        let remaining = bytes.len() - offset;
        if remaining < 4 {
            return Err(CodecError::IdOverrun {
                index,
                needed: 4,
                remaining,
            });
        }
        let id_len = read_u32(bytes, offset) as usize;
        offset += 4;

        let remaining = bytes.len() - offset;
        if remaining < id_len {
            return Err(CodecError::IdOverrun {
                index,
                needed: id_len,
                remaining,
            });
        }
        let id = std::str::from_utf8(&bytes[offset..offset + id_len])
            .map_err(|_| CodecError::InvalidId { index })?;
        ids.push(id.to_string());
        offset += id_len;
    }

    let payload = &bytes[offset..];
    let expected = num_items as u64 * dim as u64 * 4;
    if payload.len() as u64 != expected {
        return Err(CodecError::InvalidPayloadSize {
            expected,
            actual: payload.len() as u64,
        });
    }

    let mut vectors = Vec::with_capacity(payload.len() / 4);
    for chunk in payload.chunks_exact(4) {
        // SAFETY: chunks_exact(4) guarantees exactly 4 bytes
        let arr: [u8; 4] = chunk.try_into().expect("chunk is exactly 4 bytes");
        vectors.push(f32::from_le_bytes(arr));
    }

    Ok(EmbeddingTable::new(ids, vectors)?)
}

/// Encode an embedding table to the binary format.
///
/// The written `dim` is recomputed as `vectors.len() / num_items` (0 for an
/// empty table), which equals the table's derived dimension, so
/// `decode(encode(t)) == t` bit-exact for every valid table.
pub fn encode(table: &EmbeddingTable) -> Vec<u8> {
    let num_items = table.len() as u32;
    let dim = if table.is_empty() {
        0u32
    } else {
        (table.vectors().len() / table.len()) as u32
    };

    let id_bytes: usize = table.ids().iter().map(|id| 4 + id.len()).sum();
    let mut bytes = Vec::with_capacity(HEADER_LEN + id_bytes + table.vectors().len() * 4);

    bytes.extend_from_slice(&num_items.to_le_bytes());
    bytes.extend_from_slice(&dim.to_le_bytes());
    for id in table.ids() {
        bytes.extend_from_slice(&(id.len() as u32).to_le_bytes());
        bytes.extend_from_slice(id.as_bytes());
    }
    for &value in table.vectors() {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    // SAFETY: all callers bounds-check offset + 4 first
    let arr: [u8; 4] = bytes[offset..offset + 4]
        .try_into()
        .expect("slice is exactly 4 bytes");
    u32::from_le_bytes(arr)
}
