//! Recommendation service over a pair of embedding tables.

use tracing::debug;

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::similarity::{cosine_similarity, top_k};
use crate::table::EmbeddingTable;

/// Ranks items for a user by cosine similarity of their embeddings.
///
/// Holds one table of user vectors and one of item vectors, both immutable
/// after construction: a `Recommender` that exists is fully initialized.
/// Queries borrow row slices from the tables and never copy them, so the
/// type is cheap to share across threads (`Send + Sync`).
///
/// # Examples
///
/// ```rust
/// use embedrank_core::{EmbeddingTable, Recommender};
///
/// let users = EmbeddingTable::new(
///     vec!["u1".to_string()],
///     vec![1.0, 0.0, 0.0],
/// )
/// .unwrap();
/// let items = EmbeddingTable::new(
///     vec!["a".to_string(), "b".to_string()],
///     vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
/// )
/// .unwrap();
///
/// let recommender = Recommender::new(users, items);
/// assert_eq!(recommender.recommend("u1", 2), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    users: EmbeddingTable,
    items: EmbeddingTable,
}

impl Recommender {
    /// Assemble the service from already-loaded tables.
    pub fn new(users: EmbeddingTable, items: EmbeddingTable) -> Self {
        debug!(
            "recommender ready: {} users (dim {}), {} items (dim {})",
            users.len(),
            users.dim(),
            items.len(),
            items.dim()
        );
        Self { users, items }
    }

    /// The `k` item ids most similar to the user's embedding, best first.
    ///
    /// An unknown user yields an empty vector, not an error; callers that
    /// need to distinguish an unknown user should check
    /// [`users()`](Self::users) directly. Every item is scored; this is an
    /// exact full scan over the item table.
    pub fn recommend(&self, user_id: &str, k: usize) -> Vec<String> {
        let Some(user_vector) = self.users.lookup(user_id) else {
            debug!("user {} not in embedding table, returning no items", user_id);
            return Vec::new();
        };
        top_k(user_vector, self.items.iter(), k)
    }

    /// Cosine similarity between a user's and an item's embedding.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when either id is unknown, so a
    /// missing id is distinguishable from a legitimate `-1.0` score.
    pub fn similarity(&self, user_id: &str, item_id: &str) -> CoreResult<f64> {
        let user_vector = self.users.lookup(user_id).ok_or_else(|| CoreError::NotFound {
            kind: EntityKind::User,
            id: user_id.to_string(),
        })?;
        let item_vector = self.items.lookup(item_id).ok_or_else(|| CoreError::NotFound {
            kind: EntityKind::Item,
            id: item_id.to_string(),
        })?;
        Ok(cosine_similarity(user_vector, item_vector))
    }

    /// The user embedding table.
    pub fn users(&self) -> &EmbeddingTable {
        &self.users
    }

    /// The item embedding table.
    pub fn items(&self) -> &EmbeddingTable {
        &self.items
    }
}
