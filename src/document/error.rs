use thiserror::Error;

/// Per-file validation failures. Every variant names the source file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Front matter opened with '---' but no closing '---' in {file}")]
    MalformedFrontMatter { file: String },

    #[error("Missing or blank '{field}' in {file}")]
    MissingField { field: &'static str, file: String },

    #[error("Invalid slug '{slug}' in {file} (use lowercase letters, numbers, and hyphens)")]
    InvalidSlug { slug: String, file: String },

    #[error("Invalid date '{value}' in {file}")]
    InvalidDate { value: String, file: String },

    #[error("Invalid front matter in {file}: {reason}")]
    InvalidMetadata { file: String, reason: String },

    #[error("Content of {file} must be valid UTF-8")]
    InvalidUtf8 {
        file: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl DocumentError {
    /// Name of the file the failure was detected in.
    pub fn file(&self) -> &str {
        match self {
            DocumentError::MalformedFrontMatter { file }
            | DocumentError::MissingField { file, .. }
            | DocumentError::InvalidSlug { file, .. }
            | DocumentError::InvalidDate { file, .. }
            | DocumentError::InvalidMetadata { file, .. }
            | DocumentError::InvalidUtf8 { file, .. } => file,
        }
    }
}
