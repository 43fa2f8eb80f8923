use crate::dataset::DatasetError;
use crate::types::UnsupportedTypeError;

/// Filename does not conform to the grammar of the requested dataset type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty filename
    #[error("Filename is empty")]
    Empty,

    /// Path ends in `..` or a root and has no file name
    #[error("Path has no file name: {0}")]
    NoFileName(String),

    /// File name is not valid UTF-8
    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8(String),

    /// `_MMStack_` separator not found
    #[error("Missing '_MMStack_' separator in {0}")]
    MissingStackSeparator(String),

    /// `_MMStack_` separator found more than once
    #[error("Repeated '_MMStack_' separator in {0}")]
    RepeatedStackSeparator(String),

    /// Token before the separator is not an acquisition number
    #[error("Invalid acquisition number '{token}' in {filename}")]
    InvalidAcquisitionId {
        /// File name being parsed
        filename: String,
        /// Offending token
        token: String,
    },

    /// More than one channel identifier in the prefix
    #[error("Ambiguous channel in {filename}: found {}", .candidates.join(", "))]
    AmbiguousChannel {
        /// File name being parsed
        filename: String,
        /// Channel identifiers that matched
        candidates: Vec<String>,
    },

    /// More than one widefield tag in the prefix
    #[error("Ambiguous widefield tag in {filename}: found {}", .candidates.join(", "))]
    AmbiguousWidefield {
        /// File name being parsed
        filename: String,
        /// Widefield tags that matched
        candidates: Vec<String>,
    },

    /// Widefield tag present without a number after it
    #[error("Widefield tag '{tag}' has no image number in {filename}")]
    MissingWidefieldNumber {
        /// File name being parsed
        filename: String,
        /// Tag that was found
        tag: String,
    },

    /// Position token with an out-of-range index
    #[error("Invalid position '{token}' in {filename}")]
    InvalidPosition {
        /// File name being parsed
        filename: String,
        /// Offending token
        token: String,
    },
}

/// Errors surfaced by the parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// Filename does not match the grammar
    #[error("File could not be parsed: {0}")]
    Parse(#[from] ParseError),

    /// Dataset type is unknown or has no grammar
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    /// Dataset requested before a filename was parsed
    #[error("Parser not initialized: no dataset is parsed")]
    NotInitialized,

    /// Error from the parsed dataset
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}
