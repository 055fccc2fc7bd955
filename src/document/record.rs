use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::front_matter::split_front_matter;
use super::metadata::FrontMatter;
use crate::render::BodyRenderer;
use crate::types::identifiers::{RecordVersion, Slug};

/// The unit the index serves. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub identifier: Slug,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub hero_image: Option<String>,
    pub rendered_body: String,
    /// File name the record was loaded from.
    pub source: String,
    pub version: RecordVersion,
}

impl Record {
    /// Ingest the raw bytes of one source file into a Record.
    ///
    /// This is the ONLY way to construct a Record.
    /// `source` is the file name and `stem` the name without extension, which
    /// stands in for a missing slug. The renderer is not reset here; callers
    /// processing several files own that.
    pub fn ingest<R>(
        source: &str,
        stem: &str,
        raw_content: Vec<u8>,
        renderer: &mut R,
        excerpt_words: usize,
    ) -> Result<Self, DocumentError>
    where
        R: BodyRenderer + ?Sized,
    {
        // Version covers the exact bytes, front matter included
        let version = RecordVersion::from_content(&raw_content);

        let content = String::from_utf8(raw_content).map_err(|err| DocumentError::InvalidUtf8 {
            file: source.to_string(),
            source: err,
        })?;
        let text = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let split = split_front_matter(text, source)?;
        let metadata = FrontMatter::parse(split.metadata(), source)?.resolve(
            stem,
            split.body(),
            excerpt_words,
            source,
        )?;

        let rendered_body = renderer.render(split.body());

        Ok(Record {
            identifier: metadata.slug,
            title: metadata.title,
            timestamp: metadata.timestamp,
            summary: metadata.summary,
            hero_image: metadata.hero_image,
            rendered_body,
            source: source.to_string(),
            version,
        })
    }
}
