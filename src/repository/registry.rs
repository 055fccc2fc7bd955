use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::RepositoryConfig;
use crate::repository::repository::ContentRepository;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to create content directory {path}: {source}")]
    Provision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Owns the one `ContentRepository` of a process.
///
/// Built explicitly at startup and handed to whatever needs the repository.
/// The repository and its directory are created on the first call to
/// [`RepositoryRegistry::repository`]; later calls return the same instance.
/// If creating the directory fails, the next call tries again.
#[derive(Debug)]
pub struct RepositoryRegistry {
    config: RepositoryConfig,
    repository: OnceCell<Arc<ContentRepository>>,
}

impl RepositoryRegistry {
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            config,
            repository: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn repository(&self) -> Result<Arc<ContentRepository>, RegistryError> {
        self.repository
            .get_or_try_init(|| -> Result<Arc<ContentRepository>, RegistryError> {
                let dir = &self.config.content_dir;
                fs::create_dir_all(dir).map_err(|source| RegistryError::Provision {
                    path: dir.clone(),
                    source,
                })?;

                info!(
                    "event=repository_init module=registry status=ok dir={}",
                    dir.display()
                );
                Ok(Arc::new(ContentRepository::new(self.config.clone())))
            })
            .map(Arc::clone)
    }

    /// Whether the repository has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.repository.get().is_some()
    }
}
