//! Configuration for the recommendation service.
//!
//! Configuration is an explicit value passed into initialization; there is
//! no process-wide config state. Files may be TOML or JSON (the format is
//! inferred from the extension), and every field outside `model_paths` has
//! a serde default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Filesystem locations of the precomputed embedding tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelPaths {
    /// Binary user embedding file
    pub user_embeddings: PathBuf,
    /// Binary item embedding file
    pub item_embeddings: PathBuf,
}

/// Ranking parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    /// Number of items returned when the caller does not ask for a count
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
}

fn default_top_k() -> usize {
    10
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing filter when neither `-v` nor `RUST_LOG` is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub model_paths: ModelPaths,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from layered sources.
    ///
    /// Sources are applied in order:
    /// 1. `config/default.{toml,json,...}` (base settings)
    /// 2. Environment variables with the `EMBEDRANK` prefix
    ///    (e.g. `EMBEDRANK__MODEL_PATHS__USER_EMBEDDINGS`)
    pub fn load() -> CoreResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("EMBEDRANK").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file.
    ///
    /// The format is inferred from the extension, so both `config.toml`
    /// and `config.json` work.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder =
            config::Config::builder().add_source(config::File::from(path.to_path_buf()));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Fails fast on path keys that are present but empty; whether the
    /// files exist is decided at load time.
    pub fn validate(&self) -> CoreResult<()> {
        if self.model_paths.user_embeddings.as_os_str().is_empty() {
            return Err(CoreError::ConfigError(
                "model_paths.user_embeddings must not be empty".into(),
            ));
        }
        if self.model_paths.item_embeddings.as_os_str().is_empty() {
            return Err(CoreError::ConfigError(
                "model_paths.item_embeddings must not be empty".into(),
            ));
        }
        Ok(())
    }
}
