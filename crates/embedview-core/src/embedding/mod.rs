//! Embedder abstraction and embedded-chunk data contract.
//!
//! The embedding model is an external capability: implementations wrap a
//! concrete ML runtime and convert its native output into a plain
//! `Vec<f32>` at this boundary, so downstream code never touches runtime
//! tensor types.

use crate::error::EmbeddingError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A text chunk paired with its embedding vector.
///
/// `vectors` has the same fixed length for every chunk produced by the same
/// embedder configuration. The collection of embedded chunks is owned by the
/// current upload session and replaced wholesale on reset or re-upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    /// The chunk's text content
    pub text: String,
    /// Mean-pooled, normalized sentence embedding for the text
    pub vectors: Vec<f32>,
}

/// Trait for embedding model implementations.
///
/// The model is lazily constructed: [`Embedder::ensure_ready`] initializes
/// it at most once and is idempotent, so callers can invoke it at the top of
/// every upload without paying for re-initialization. Implementations are
/// passed explicitly into the processing pipeline rather than reached as
/// ambient global state.
///
/// # Examples
///
/// ```ignore
/// let embedder = MiniLmEmbedder::new();
/// embedder.ensure_ready().await?;
/// let vectors = embedder.embed("hello world").await?;
/// assert_eq!(vectors.len(), embedder.embedding_dim());
/// ```
#[async_trait(?Send)]
pub trait Embedder {
    /// Initializes the underlying model if it is not loaded yet.
    ///
    /// Idempotent; subsequent calls after a successful load return
    /// immediately.
    async fn ensure_ready(&self) -> Result<(), EmbeddingError>;

    /// Computes the embedding vector for a single text.
    ///
    /// The returned vector has length [`Embedder::embedding_dim`].
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Returns the embedding dimension (vector length).
    fn embedding_dim(&self) -> usize;
}

/// Validates that an embedding has the expected dimension.
///
/// Returns `Ok(())` if dimensions match, or
/// `Err(EmbeddingError::DimensionMismatch)` otherwise.
pub fn validate_dimension(expected: usize, actual: usize) -> Result<(), EmbeddingError> {
    if actual == expected {
        Ok(())
    } else {
        Err(EmbeddingError::DimensionMismatch { expected, actual })
    }
}
