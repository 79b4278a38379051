//! Error types for embedview-core.
//!
//! One enum per concern: extraction, chunking, embedding, search. The
//! processing pipeline folds them together via `ProcessingError` in
//! [`crate::processing`].

use thiserror::Error;

/// Errors that can occur while extracting text from an uploaded document.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    /// File extension/media type is not one of the supported formats
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
    /// PDF parsing failed (malformed or encrypted document)
    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),
    /// DOCX parsing failed (not a ZIP archive, missing document part)
    #[error("Failed to extract DOCX text: {0}")]
    Docx(String),
}

/// Errors that can occur during text chunking.
#[derive(Debug, Clone, Error)]
pub enum ChunkingError {
    /// Invalid chunker configuration (zero stride or window size)
    #[error("Invalid chunking config: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur during embedding operations.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingError {
    /// Failed to load or initialize the model
    #[error("Failed to load model: {0}")]
    ModelLoad(String),
    /// Forward pass through the model failed
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    /// Model not available or initialization failed
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
    /// Vector dimension mismatch (expected vs actual)
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected embedding dimension
        expected: usize,
        /// Actual embedding dimension received
        actual: usize,
    },
}

/// Errors that can occur while compiling search tokens into matchers.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Token set produced an uncompilable pattern
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
}

// Conversion implementations for UI display

impl From<ExtractionError> for String {
    fn from(err: ExtractionError) -> String {
        err.to_string()
    }
}

impl From<EmbeddingError> for String {
    fn from(err: EmbeddingError) -> String {
        err.to_string()
    }
}

impl From<regex::Error> for SearchError {
    fn from(err: regex::Error) -> Self {
        SearchError::InvalidPattern(err.to_string())
    }
}
