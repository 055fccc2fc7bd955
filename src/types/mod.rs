pub mod identifiers;

pub use identifiers::{RecordVersion, Slug, SlugError};
