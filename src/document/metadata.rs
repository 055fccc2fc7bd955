use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date::{parse_date, DEFAULT_DATE};
use super::error::DocumentError;
use super::excerpt::make_excerpt;
use crate::types::identifiers::Slug;

/// A scalar front matter value. YAML gives `slug: 2024` as a number, so
/// optional fields accept numbers and booleans and read them back as text.
/// A title must be a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl MetadataValue {
    pub fn into_text(self) -> String {
        match self {
            MetadataValue::String(s) => s,
            MetadataValue::Integer(n) => n.to_string(),
            MetadataValue::Float(n) => n.to_string(),
            MetadataValue::Bool(b) => b.to_string(),
        }
    }
}

/// The front matter schema. Every key is optional at parse time; `resolve`
/// enforces what is required and fills in defaults. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<MetadataValue>,
    /// Defaults to the file stem.
    pub slug: Option<MetadataValue>,
    /// Defaults to [`DEFAULT_DATE`].
    pub date: Option<MetadataValue>,
    /// Defaults to an excerpt of the body.
    pub summary: Option<MetadataValue>,
    /// Opaque resource path, never checked.
    pub image: Option<MetadataValue>,
}

/// Front matter after validation and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub slug: Slug,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub hero_image: Option<String>,
}

impl FrontMatter {
    /// Parse a front matter block. A blank block, or one holding only `null`,
    /// is an empty schema; anything that is not a mapping of scalars is
    /// rejected.
    pub fn parse(block: &str, file: &str) -> Result<Self, DocumentError> {
        if block.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        serde_yaml::from_str::<Option<FrontMatter>>(block)
            .map(Option::unwrap_or_default)
            .map_err(|e| DocumentError::InvalidMetadata {
                file: file.to_string(),
                reason: e.to_string(),
            })
    }

    /// Validate required fields and derive the missing ones.
    ///
    /// Blank values count as absent; a title that is not a non-blank string
    /// is missing. `stem` is the file name without its
    /// extension; `body` feeds the excerpt when no summary is given.
    pub fn resolve(
        self,
        stem: &str,
        body: &str,
        excerpt_words: usize,
        file: &str,
    ) -> Result<ResolvedMetadata, DocumentError> {
        // Only a YAML string is a title; `title: 1.50` would lose its spelling.
        let title = match self.title {
            Some(MetadataValue::String(title)) if !title.trim().is_empty() => {
                title.trim().to_string()
            }
            _ => return Err(missing("title", file)),
        };

        let slug_candidate = non_blank(self.slug).unwrap_or_else(|| stem.to_string());
        let slug = Slug::normalize(&slug_candidate).map_err(|_| DocumentError::InvalidSlug {
            slug: slug_candidate.clone(),
            file: file.to_string(),
        })?;

        let date = non_blank(self.date).unwrap_or_else(|| DEFAULT_DATE.to_string());
        let timestamp = parse_date(&date, file)?;

        let summary = match non_blank(self.summary) {
            Some(summary) => summary,
            None => {
                let excerpt = make_excerpt(body, excerpt_words);
                if excerpt.is_empty() {
                    return Err(missing("summary", file));
                }
                excerpt
            }
        };

        let hero_image = non_blank(self.image);

        Ok(ResolvedMetadata {
            title,
            slug,
            timestamp,
            summary,
            hero_image,
        })
    }
}

fn non_blank(value: Option<MetadataValue>) -> Option<String> {
    value
        .map(MetadataValue::into_text)
        .filter(|text| !text.trim().is_empty())
}

fn missing(field: &'static str, file: &str) -> DocumentError {
    DocumentError::MissingField {
        field,
        file: file.to_string(),
    }
}
