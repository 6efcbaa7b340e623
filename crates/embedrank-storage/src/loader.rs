//! File loading and saving.
//!
//! Everything here converts I/O and format failures into [`StorageError`]
//! at the load boundary; nothing panics through to callers.

use std::fs;
use std::path::{Path, PathBuf};

use embedrank_core::{Config, EmbeddingTable, Recommender};
use thiserror::Error;
use tracing::info;

use crate::codec::{self, CodecError};

/// Errors from loading or saving embedding data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are malformed.
    #[error("Format error in {path}: {source}")]
    Format {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying codec error
        #[source]
        source: CodecError,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Load a binary embedding table from disk.
///
/// # Errors
///
/// [`StorageError::Io`] when the file cannot be read,
/// [`StorageError::Format`] when its contents fail to decode.
pub fn load_table(path: &Path) -> StorageResult<EmbeddingTable> {
    let bytes = fs::read(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = codec::decode(&bytes).map_err(|source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} embeddings (dim {}) from {}",
        table.len(),
        table.dim(),
        path.display()
    );
    Ok(table)
}

/// Encode a table and write it to disk, symmetric with [`load_table`].
pub fn save_table(path: &Path, table: &EmbeddingTable) -> StorageResult<()> {
    fs::write(path, codec::encode(table)).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "saved {} embeddings (dim {}) to {}",
        table.len(),
        table.dim(),
        path.display()
    );
    Ok(())
}

/// Load newline-delimited text entries, skipping blank lines.
///
/// No escaping, quoting, or further validation is applied.
pub fn load_text_lines(path: &Path) -> StorageResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load both embedding tables named by the configuration and assemble the
/// recommendation service.
///
/// # Errors
///
/// Fails when either embedding file is unreadable or malformed; a service
/// is only ever handed back fully initialized.
pub fn open_recommender(config: &Config) -> StorageResult<Recommender> {
    let users = load_table(&config.model_paths.user_embeddings)?;
    let items = load_table(&config.model_paths.item_embeddings)?;
    Ok(Recommender::new(users, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_table(Path::new("/nonexistent/embeddings.bin"));
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_text_lines_skip_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.txt");
        fs::write(&path, "first\n\nsecond\n\n\nthird\n").unwrap();
        let lines = load_text_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.bin");
        let table = EmbeddingTable::new(
            vec!["x".to_string(), "y".to_string()],
            vec![0.5, -0.5, 1.5, -1.5],
        )
        .unwrap();

        save_table(&path, &table).unwrap();
        let loaded = load_table(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_malformed_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        fs::write(&path, [0u8; 5]).unwrap();
        assert!(matches!(
            load_table(&path),
            Err(StorageError::Format { .. })
        ));
    }
}
