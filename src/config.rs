//! Where documents live and how they are read. Every field has a named
//! default so a config file only needs `content_dir`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::excerpt::DEFAULT_EXCERPT_WORDS;

pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where documents live and how they are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Flat directory of documents. Created on first use by the registry.
    pub content_dir: PathBuf,
    /// File extension of documents, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Word limit for derived summaries.
    #[serde(default = "default_excerpt_words")]
    pub excerpt_words: usize,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.into()
}

fn default_excerpt_words() -> usize {
    DEFAULT_EXCERPT_WORDS
}

impl RepositoryConfig {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            extension: default_extension(),
            excerpt_words: default_excerpt_words(),
        }
    }

    /// Conventional layout: `<base>/content/posts`.
    pub fn from_base_dir(base: &Path) -> Self {
        Self::new(base.join("content").join("posts"))
    }

    /// Load from a JSON file. A relative `content_dir` is resolved against
    /// the directory holding the file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: RepositoryConfig = serde_json::from_slice(&raw)?;

        if config.content_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.content_dir = parent.join(&config.content_dir);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("content_dir must not be empty".into()));
        }
        if self.extension.is_empty() || self.extension.contains('.') {
            return Err(ConfigError::Invalid(format!(
                "extension '{}' must be non-empty and given without a dot",
                self.extension
            )));
        }
        if self.excerpt_words == 0 {
            return Err(ConfigError::Invalid("excerpt_words must be at least 1".into()));
        }
        Ok(())
    }
}
