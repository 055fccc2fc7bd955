pub mod registry;
pub mod repository;
pub mod snapshot;

pub use registry::{RegistryError, RepositoryRegistry};
pub use repository::{ContentRepository, LoadError};
pub use snapshot::Snapshot;
