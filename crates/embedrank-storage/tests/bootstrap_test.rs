//! End-to-end bootstrap: config file to embedding files to ranked queries.

use std::fs;
use std::path::Path;

use embedrank_core::{Config, CoreError, EntityKind};
use embedrank_storage::{open_recommender, save_table, EmbeddingTable, StorageError};

/// Write the user/item fixture tables and a config pointing at them.
fn write_fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let users_path = dir.join("user_embeddings.bin");
    let items_path = dir.join("item_embeddings.bin");

    let users = EmbeddingTable::new(
        vec!["u1".to_string(), "u2".to_string()],
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    )
    .unwrap();
    let items = EmbeddingTable::new(
        vec!["a".to_string(), "b".to_string()],
        vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    )
    .unwrap();

    save_table(&users_path, &users).unwrap();
    save_table(&items_path, &items).unwrap();
    (users_path, items_path)
}

#[test]
fn bootstrap_from_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let (users_path, items_path) = write_fixtures(dir.path());

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[model_paths]\nuser_embeddings = {:?}\nitem_embeddings = {:?}\n",
            users_path, items_path
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let recommender = open_recommender(&config).unwrap();

    // u1 matches "a" exactly (1.0) and is orthogonal to "b" (0.0).
    assert_eq!(recommender.recommend("u1", 2), vec!["a", "b"]);
    assert_eq!(recommender.recommend("u2", 1), vec!["b"]);
    assert!(recommender.recommend("nonexistent", 5).is_empty());

    let sim = recommender.similarity("u1", "a").unwrap();
    assert!((sim - 1.0).abs() < 1e-12);
    assert!(matches!(
        recommender.similarity("u1", "zzz"),
        Err(CoreError::NotFound {
            kind: EntityKind::Item,
            ..
        })
    ));
}

#[test]
fn bootstrap_from_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let (users_path, items_path) = write_fixtures(dir.path());

    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"model_paths": {{"user_embeddings": {:?}, "item_embeddings": {:?}}}}}"#,
            users_path, items_path
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let recommender = open_recommender(&config).unwrap();
    assert_eq!(recommender.recommend("u1", 10), vec!["a", "b"]);
}

#[test]
fn bootstrap_fails_on_missing_embedding_file() {
    let dir = tempfile::tempdir().unwrap();
    let (users_path, _) = write_fixtures(dir.path());

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[model_paths]\nuser_embeddings = {:?}\nitem_embeddings = \"missing.bin\"\n",
            users_path
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert!(matches!(
        open_recommender(&config),
        Err(StorageError::Io { .. })
    ));
}
