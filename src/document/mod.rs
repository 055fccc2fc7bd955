pub mod date;
pub mod error;
pub mod excerpt;
pub mod front_matter;
pub mod metadata;
pub mod record;

pub use crate::types::identifiers::{RecordVersion, Slug};
pub use date::{parse_date, DEFAULT_DATE};
pub use error::DocumentError;
pub use excerpt::{make_excerpt, DEFAULT_EXCERPT_WORDS};
pub use front_matter::{split_front_matter, FrontMatterSplit};
pub use metadata::{FrontMatter, MetadataValue, ResolvedMetadata};
pub use record::Record;
