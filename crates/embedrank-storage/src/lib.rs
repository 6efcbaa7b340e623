//! Embedrank Storage Layer
//!
//! On-disk formats and file loading for the embedrank engine.
//!
//! # Architecture
//! - `codec`: binary embedding table encode/decode (raw little-endian)
//! - `loader`: file load/save, text ingestion, and service bootstrap
//!
//! The binary layout is
//! `u32 num_items | u32 dim | {u32 id_len, id bytes} × num_items |
//! f32[num_items × dim]`, all little-endian. Decode rejects malformed
//! input; it never truncates or pads silently.

pub mod codec;
pub mod loader;

// Re-export core types for storage consumers
pub use embedrank_core::{EmbeddingTable, EmbeddingVector, Recommender};

// Re-export codec and loader entry points
pub use codec::{decode, encode, CodecError};
pub use loader::{
    load_table, load_text_lines, open_recommender, save_table, StorageError, StorageResult,
};
