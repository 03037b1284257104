//! Error types for the cardstmt-core library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::statement::Field;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum StatementError {
    /// The input is not a readable PDF or has no extractable text.
    #[error("unreadable document: {0}")]
    UnreadableDocument(#[from] PdfError),

    /// No strategy is registered for the bank key.
    #[error("unsupported bank: {0}")]
    UnsupportedBank(String),

    /// A field the bank template guarantees could not be located.
    #[error("missing required field: {0}")]
    FieldExtraction(Field),

    /// A located value does not match any known format for its field.
    #[error("failed to normalize {field}: {value:?}")]
    Normalization { field: Field, value: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and the password did not unlock it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF has no text layer (e.g. an image-only scan).
    #[error("PDF contains no extractable text")]
    NoText,

    /// Extraction was requested before a document was loaded.
    #[error("no document loaded")]
    NotLoaded,
}

/// Stable, serializable classification of a [`StatementError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnreadableDocument,
    UnsupportedBank,
    FieldExtraction,
    Normalization,
    Io,
    Config,
}

impl StatementError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatementError::UnreadableDocument(_) => ErrorKind::UnreadableDocument,
            StatementError::UnsupportedBank(_) => ErrorKind::UnsupportedBank,
            StatementError::FieldExtraction(_) => ErrorKind::FieldExtraction,
            StatementError::Normalization { .. } => ErrorKind::Normalization,
            StatementError::Io(_) => ErrorKind::Io,
            StatementError::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether the caller supplied an invalid request rather than a document
    /// the parser could not handle.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StatementError::UnsupportedBank(_))
    }
}

/// Error body returned across the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message.
    pub error: String,
    /// Error classification.
    pub kind: ErrorKind,
}

impl From<&StatementError> for ErrorPayload {
    fn from(err: &StatementError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, StatementError>;
