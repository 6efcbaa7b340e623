//! Embedrank Core Library
//!
//! Core of the embedding-based recommendation engine: the in-memory
//! embedding table, the exact cosine-similarity ranking engine, and the
//! recommendation service that ties a user table to an item table.
//!
//! # Architecture
//!
//! This crate defines:
//! - [`EmbeddingTable`]: ordered ids over a flat row-major `f32` buffer
//! - [`similarity`]: cosine/dot/euclidean scoring and `top_k` ranking
//! - [`Recommender`]: user-to-items queries over two tables
//! - [`Config`]: explicit configuration passed into initialization
//! - [`CoreError`] and the [`CoreResult<T>`] alias
//!
//! Scoring is deliberately exact: every query is a full scan over the item
//! table. There is no approximate index, no async machinery, and no shared
//! mutable state; tables are immutable once built.
//!
//! # Example
//!
//! ```
//! use embedrank_core::{EmbeddingTable, Recommender};
//!
//! let users = EmbeddingTable::new(vec!["u1".into()], vec![1.0, 0.0, 0.0]).unwrap();
//! let items = EmbeddingTable::new(
//!     vec!["a".into(), "b".into()],
//!     vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
//! )
//! .unwrap();
//!
//! let recommender = Recommender::new(users, items);
//! assert_eq!(recommender.recommend("u1", 2), vec!["a", "b"]);
//! ```

pub mod config;
pub mod error;
pub mod recommender;
pub mod similarity;
pub mod table;

// Re-exports for convenience
pub use config::{Config, LoggingConfig, ModelPaths, RetrievalConfig};
pub use error::{CoreError, CoreResult, EntityKind};
pub use recommender::Recommender;
pub use table::{EmbeddingTable, EmbeddingVector};
