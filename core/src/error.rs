use std::path::PathBuf;
use thiserror::Error;

/// Result type for private dictionary generation
pub type Result<T> = std::result::Result<T, PrivateDictError>;

/// Error types for private dictionary generation
#[derive(Error, Debug)]
pub enum PrivateDictError {
    /// Input could not be opened/read, or output could not be created/written
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line did not split into exactly 7 tab-separated fields
    #[error("line {line_number}: expected 7 tab-separated fields, found {field_count}: {line:?}")]
    MalformedRecord {
        line_number: usize,
        field_count: usize,
        line: String,
    },

    /// The dictionaries could not be rendered to the requested output format
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generated literal text could not be parsed back
    #[error("Literal syntax error at byte {offset}: {message}")]
    LiteralSyntax { offset: usize, message: String },

    /// Parsed literal (or configuration value) does not have the expected shape
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

impl PrivateDictError {
    /// Wraps an I/O error together with the path it happened on
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrivateDictError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<std::fmt::Error> for PrivateDictError {
    fn from(e: std::fmt::Error) -> Self {
        PrivateDictError::Serialization(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for PrivateDictError {
    fn from(e: serde_json::Error) -> Self {
        PrivateDictError::Serialization(format!("{}", e))
    }
}
