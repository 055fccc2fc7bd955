//! Splitting raw document text into a front matter block and a body.
//!
//! A document opens with a `---` line, carries YAML up to the next `---`
//! line, and continues with the body:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2024-01-05
//! ---
//! The body starts here.
//! ```
//!
//! Text that does not open with a delimiter line has no front matter and is
//! all body. An opening delimiter without a closing one is an error.

use super::error::DocumentError;

const DELIMITER: &str = "---";

/// The two halves of a document, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterSplit<'a> {
    metadata: &'a str,
    body: &'a str,
    delimited: bool,
}

impl<'a> FrontMatterSplit<'a> {
    fn delimited(metadata: &'a str, body: &'a str) -> Self {
        Self {
            metadata,
            body,
            delimited: true,
        }
    }

    fn body_only(body: &'a str) -> Self {
        Self {
            metadata: "",
            body,
            delimited: false,
        }
    }

    /// Raw text between the delimiter lines. Empty when there was no block.
    pub fn metadata(&self) -> &'a str {
        self.metadata
    }

    /// Everything after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Whether the text opened with a front matter block.
    pub fn has_front_matter(&self) -> bool {
        self.delimited
    }
}

/// Split `text` into front matter and body. `file` is only used to name the
/// source in the error.
///
/// # Example
///
/// ```rust
/// use content_core::document::split_front_matter;
///
/// let split = split_front_matter("---\ntitle: Hi\n---\nBody\n", "hi.md").unwrap();
/// assert_eq!(split.metadata(), "title: Hi\n");
/// assert_eq!(split.body(), "Body\n");
///
/// let plain = split_front_matter("Just a body", "plain.md").unwrap();
/// assert!(!plain.has_front_matter());
/// assert_eq!(plain.body(), "Just a body");
/// ```
pub fn split_front_matter<'a>(
    text: &'a str,
    file: &str,
) -> Result<FrontMatterSplit<'a>, DocumentError> {
    let mut lines = text.split_inclusive('\n');

    let opening = match lines.next() {
        Some(line) if is_delimiter(line) => line,
        _ => return Ok(FrontMatterSplit::body_only(text)),
    };

    let metadata_start = opening.len();
    let mut offset = metadata_start;

    for line in lines {
        if is_delimiter(line) {
            let metadata = &text[metadata_start..offset];
            let body = &text[offset + line.len()..];
            return Ok(FrontMatterSplit::delimited(metadata, body));
        }
        offset += line.len();
    }

    Err(DocumentError::MalformedFrontMatter {
        file: file.to_string(),
    })
}

// Trailing whitespace covers CRLF line endings.
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
