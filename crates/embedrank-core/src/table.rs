//! In-memory embedding table.
//!
//! An [`EmbeddingTable`] holds an ordered id sequence and a flat row-major
//! `f32` buffer. It is built once at load time and never mutated; rebuilding
//! means re-decoding the source file.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};

/// A dense embedding vector.
pub type EmbeddingVector = Vec<f32>;

/// Immutable table of id-addressed embedding rows.
///
/// Ids are order-significant: the i-th id owns the i-th `dim`-length run of
/// the flat buffer. An id-to-row map is built once at construction so lookups
/// are O(1); when an id occurs more than once, the first row wins, matching
/// first-match scan semantics.
///
/// # Examples
///
/// ```rust
/// use embedrank_core::EmbeddingTable;
///
/// let table = EmbeddingTable::new(
///     vec!["a".to_string(), "b".to_string()],
///     vec![1.0, 0.0, 0.0, 1.0],
/// )
/// .unwrap();
///
/// assert_eq!(table.dim(), 2);
/// assert_eq!(table.lookup("b"), Some(&[0.0, 1.0][..]));
/// assert_eq!(table.lookup("c"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    ids: Vec<String>,
    vectors: Vec<f32>,
    dim: usize,
    rows_by_id: HashMap<String, usize>,
}

impl EmbeddingTable {
    /// Build a table from an id sequence and a flat row-major buffer.
    ///
    /// The dimension is derived as `vectors.len() / ids.len()` (0 for an
    /// empty table).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RaggedTable`] when the buffer cannot be divided
    /// evenly across the rows: a malformed table is rejected, never silently
    /// truncated.
    pub fn new(ids: Vec<String>, vectors: Vec<f32>) -> CoreResult<Self> {
        let items = ids.len();
        if items == 0 {
            if !vectors.is_empty() {
                return Err(CoreError::RaggedTable {
                    items,
                    values: vectors.len(),
                });
            }
            return Ok(Self::empty());
        }
        if vectors.len() % items != 0 {
            return Err(CoreError::RaggedTable {
                items,
                values: vectors.len(),
            });
        }

        let dim = vectors.len() / items;
        let mut rows_by_id = HashMap::with_capacity(items);
        for (row, id) in ids.iter().enumerate() {
            // First occurrence wins for duplicate ids.
            rows_by_id.entry(id.clone()).or_insert(row);
        }

        Ok(Self {
            ids,
            vectors,
            dim,
            rows_by_id,
        })
    }

    /// The empty table: no ids, no vectors, dimension 0.
    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            vectors: Vec::new(),
            dim: 0,
            rows_by_id: HashMap::new(),
        }
    }

    /// Number of rows (ids) in the table.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Per-row vector dimension, derived at construction.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The ordered id sequence.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The flat row-major vector buffer.
    pub fn vectors(&self) -> &[f32] {
        &self.vectors
    }

    /// Resolve an id to its row slice, or `None` if the id is unknown.
    pub fn lookup(&self, id: &str) -> Option<&[f32]> {
        self.rows_by_id.get(id).map(|&row| self.row(row))
    }

    /// The `dim`-length vector slice for row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn row(&self, index: usize) -> &[f32] {
        &self.vectors[index * self.dim..(index + 1) * self.dim]
    }

    /// Iterate rows in table order as `(id, vector)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.ids
            .iter()
            .enumerate()
            .map(|(row, id)| (id.as_str(), self.row(row)))
    }
}
