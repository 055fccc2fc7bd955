use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, trace, warn};
use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::config::RepositoryConfig;
use crate::document::{DocumentError, Record};
use crate::render::{BodyRenderer, MarkdownRenderer};
use crate::repository::snapshot::Snapshot;
use crate::types::identifiers::Slug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Duplicate slug '{slug}' in file {file} (first defined in {first_defined_in})")]
    DuplicateSlug {
        slug: String,
        file: String,
        first_defined_in: String,
    },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),
}

/// Loads every document in one directory and serves the last good load.
///
/// Readers clone the current `Arc<Snapshot>` under a short read lock and
/// never wait for a reload in progress. Reloads serialize on the renderer
/// lock, which also gives each reload exclusive use of the renderer.
pub struct ContentRepository<R = MarkdownRenderer> {
    config: RepositoryConfig,
    current: RwLock<Option<Arc<Snapshot>>>,
    renderer: Mutex<R>,
}

impl<R> fmt::Debug for ContentRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = self.current.read().as_ref().map(|s| s.version().to_string());
        f.debug_struct("ContentRepository")
            .field("config", &self.config)
            .field("snapshot_version", &version)
            .finish_non_exhaustive()
    }
}

impl ContentRepository<MarkdownRenderer> {
    pub fn new(config: RepositoryConfig) -> Self {
        Self::with_renderer(config, MarkdownRenderer::default())
    }
}

impl<R> ContentRepository<R>
where
    R: BodyRenderer,
{
    pub fn with_renderer(config: RepositoryConfig, renderer: R) -> Self {
        Self {
            config,
            current: RwLock::new(None),
            renderer: Mutex::new(renderer),
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Load the whole directory and publish the result.
    ///
    /// Any failure leaves the previously published snapshot in place.
    pub fn reload(&self) -> Result<Arc<Snapshot>, LoadError> {
        let mut renderer = self.renderer.lock();
        self.reload_with(&mut renderer)
    }

    /// The current snapshot, loading first if nothing was ever published.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, LoadError> {
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        let mut renderer = self.renderer.lock();
        // Another caller may have loaded while we waited
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }
        debug!("event=implicit_reload module=repository status=start");
        self.reload_with(&mut renderer)
    }

    /// All records, newest first.
    pub fn list_all(&self) -> Result<Vec<Arc<Record>>, LoadError> {
        Ok(self.snapshot()?.records().to_vec())
    }

    pub fn get_by_identifier(&self, identifier: &str) -> Result<Option<Arc<Record>>, LoadError> {
        Ok(self.snapshot()?.get(identifier).cloned())
    }

    /// Completion time of the last successful reload.
    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.current().map(|snapshot| snapshot.loaded_at())
    }

    fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.read().clone()
    }

    fn reload_with(&self, renderer: &mut R) -> Result<Arc<Snapshot>, LoadError> {
        info!(
            "event=reload module=repository status=start dir={}",
            self.config.content_dir.display()
        );

        match self.load(renderer) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.current.write() = Some(Arc::clone(&snapshot));

                info!(
                    "event=reload module=repository status=ok records={} version={}",
                    snapshot.len(),
                    snapshot.version()
                );
                Ok(snapshot)
            }
            Err(err) => {
                warn!(
                    "event=reload module=repository status=error kept_previous={} error={}",
                    self.current.read().is_some(),
                    err
                );
                Err(err)
            }
        }
    }

    fn load(&self, renderer: &mut R) -> Result<Snapshot, LoadError> {
        let files = list_documents(&self.config.content_dir, &self.config.extension)?;

        let mut seen: HashMap<Slug, String> = HashMap::with_capacity(files.len());
        let mut records = Vec::with_capacity(files.len());

        renderer.reset_state();

        for path in &files {
            let (file_name, stem) = file_names(path)?;
            let raw = fs::read(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;

            let ingested = Record::ingest(
                &file_name,
                &stem,
                raw,
                renderer,
                self.config.excerpt_words,
            );
            renderer.reset_state();
            let record = ingested?;

            if let Some(first) = seen.get(&record.identifier) {
                return Err(LoadError::DuplicateSlug {
                    slug: record.identifier.to_string(),
                    file: file_name,
                    first_defined_in: first.clone(),
                });
            }

            debug!(
                "event=document_loaded module=repository file={} slug={}",
                file_name, record.identifier
            );
            seen.insert(record.identifier.clone(), file_name);
            records.push(record);
        }

        Ok(Snapshot::build(records, Utc::now()))
    }
}

/// Regular files in `dir` (not recursive) with the given extension, sorted
/// by file name. Hidden files are skipped.
fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();

        let hidden = path
            .file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        let matches_extension = path.extension().map(|ext| ext == extension).unwrap_or(false);

        if hidden || !matches_extension || !path.is_file() {
            trace!(
                "event=entry_skipped module=repository path={}",
                path.display()
            );
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn file_names(path: &Path) -> Result<(String, String), LoadError> {
    let invalid = || LoadError::InvalidFileName(path.to_path_buf());

    let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;

    Ok((file_name.to_string(), stem.to_string()))
}
