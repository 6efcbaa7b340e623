//! Error types for embedrank-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the embedrank-core crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use embedrank_core::{CoreError, EntityKind};
//!
//! fn resolve_user(id: &str) -> Result<(), CoreError> {
//!     Err(CoreError::NotFound {
//!         kind: EntityKind::User,
//!         id: id.to_string(),
//!     })
//! }
//!
//! let result = resolve_user("user_42");
//! assert!(result.is_err());
//! ```

use thiserror::Error;

/// The kind of entity a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A user id from the user embedding table.
    User,
    /// An item id from the item embedding table.
    Item,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Item => write!(f, "item"),
        }
    }
}

/// Top-level error type for embedrank-core operations.
///
/// # Examples
///
/// ```rust
/// use embedrank_core::CoreError;
///
/// let error = CoreError::RaggedTable {
///     items: 3,
///     values: 10,
/// };
/// assert!(error.to_string().contains("10"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration is invalid or missing.
    ///
    /// # When This Occurs
    ///
    /// - Missing or unreadable configuration file
    /// - Missing required path keys (`model_paths.*`)
    /// - Invalid configuration value format
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A flat vector buffer cannot be divided evenly across the id rows.
    ///
    /// # When This Occurs
    ///
    /// - Constructing an [`EmbeddingTable`](crate::EmbeddingTable) whose
    ///   buffer length is not a multiple of the row count
    /// - A row count of zero paired with a non-empty buffer
    ///
    /// `Constraint: values == items * dim`
    #[error("Malformed embedding table: {values} vector values do not divide into {items} rows")]
    RaggedTable {
        /// Number of id rows
        items: usize,
        /// Number of f32 values in the flat buffer
        values: usize,
    },

    /// A requested user or item id does not exist in its table.
    ///
    /// # When This Occurs
    ///
    /// - `Recommender::similarity` called with an unknown user or item id
    ///
    /// Note that `Recommender::recommend` maps an unknown user to an empty
    /// result set instead of this error.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Whether the missing id was a user or an item
        kind: EntityKind,
        /// The id that failed to resolve
        id: String,
    },
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
