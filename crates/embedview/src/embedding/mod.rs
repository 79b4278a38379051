//! MiniLM sentence embeddings backed by fastembed.

use async_trait::async_trait;
use dioxus::logger::tracing::info;
use embedview_core::config::EMBEDDING_DIM;
use embedview_core::embedding::Embedder;
use embedview_core::error::EmbeddingError;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use once_cell::sync::OnceCell;

/// all-MiniLM-L6-v2 embedder with lazy, at-most-once model loading.
///
/// The ONNX model is not touched at construction time; the first call to
/// [`Embedder::ensure_ready`] (or the first embed) loads it, and every call
/// after that reuses the cached instance. A failed load is reported as
/// [`EmbeddingError::ModelLoad`] and retried on the next call.
pub struct MiniLmEmbedder {
    model: OnceCell<TextEmbedding>,
}

impl MiniLmEmbedder {
    pub fn new() -> Self {
        Self {
            model: OnceCell::new(),
        }
    }

    fn model(&self) -> Result<&TextEmbedding, EmbeddingError> {
        self.model.get_or_try_init(|| {
            info!("loading all-MiniLM-L6-v2 embedding model");
            TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
            )
            .map_err(|e| EmbeddingError::ModelLoad(e.to_string()))
        })
    }
}

impl Default for MiniLmEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Embedder for MiniLmEmbedder {
    async fn ensure_ready(&self) -> Result<(), EmbeddingError> {
        self.model().map(|_| ())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let model = self.model()?;
        let mut embeddings = model
            .embed(vec![text], None)
            .map_err(|e| EmbeddingError::InferenceFailed(e.to_string()))?;
        embeddings.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed("model returned no embedding".to_string())
        })
    }

    fn embedding_dim(&self) -> usize {
        EMBEDDING_DIM
    }
}
