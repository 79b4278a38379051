//! Document processing pipeline.
//!
//! Ties extraction, chunking, and embedding into the single all-or-nothing
//! operation behind an upload: extract text, window it into chunks, embed
//! each non-blank chunk sequentially, and report progress along the way.

mod pipeline;
mod progress;

pub use pipeline::{embed_document, process_file, ProcessingOutcome};
pub use progress::{ProcessingProgress, ProgressTimer};

use crate::error::{ChunkingError, EmbeddingError, ExtractionError};
use thiserror::Error;

/// Errors that can occur during document processing.
///
/// Wraps the per-stage errors so pipeline callers handle one type; the
/// messages carried by the stage errors are what the UI shows.
#[derive(Debug, Clone, Error)]
pub enum ProcessingError {
    /// Text extraction from the uploaded file failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    /// Chunking configuration was invalid
    #[error(transparent)]
    Chunking(#[from] ChunkingError),
    /// Embedding a chunk failed
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

impl From<ProcessingError> for String {
    fn from(err: ProcessingError) -> String {
        err.to_string()
    }
}
