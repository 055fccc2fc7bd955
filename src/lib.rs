//! Front-matter document loader with an atomically published in-memory index.
//!
//! `content-core` reads a flat directory of Markdown documents, each opening
//! with a YAML front matter block, validates and defaults their metadata,
//! renders their bodies to HTML, and serves the result as an immutable
//! [`Snapshot`](repository::Snapshot): records by slug plus records newest
//! first. A reload either publishes a complete new snapshot or fails and
//! leaves the previous one serving reads.
//!
//! ```no_run
//! use std::path::Path;
//! use content_core::{RepositoryConfig, RepositoryRegistry};
//!
//! let registry = RepositoryRegistry::new(RepositoryConfig::from_base_dir(Path::new(".")));
//! let repo = registry.repository()?;
//! repo.reload()?;
//!
//! for record in repo.list_all()? {
//!     println!("{} {}", record.timestamp.date_naive(), record.title);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod document;
pub mod render;
pub mod repository;
pub mod types;

pub use config::{ConfigError, RepositoryConfig};
pub use document::{DocumentError, Record};
pub use render::{BodyRenderer, MarkdownRenderer};
pub use repository::{ContentRepository, LoadError, RegistryError, RepositoryRegistry, Snapshot};
pub use types::identifiers::{RecordVersion, Slug};
