//! Extraction-to-embedding pipeline.

use tracing::debug;

use super::progress::{ProcessingProgress, ProgressTimer};
use super::ProcessingError;
use crate::chunking::WindowChunker;
use crate::embedding::{validate_dimension, EmbeddedChunk, Embedder};
use crate::extract;

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOutcome {
    /// Embedded chunks in document order
    pub chunks: Vec<EmbeddedChunk>,
    /// Chunks dropped because their text was blank after trimming
    pub skipped_blank: usize,
    /// Total wall-clock time for the run, in milliseconds
    pub elapsed_ms: u64,
}

/// Chunks and embeds extracted document text.
///
/// The embedder is readied first, so model initialization cost is paid
/// before any chunk work starts. Chunks whose text is blank after trimming
/// are skipped without an embedding call. Remaining chunks are embedded one
/// at a time, in document order; every vector is dimension-checked against
/// the embedder's declared dimension before being accepted.
///
/// The run is all-or-nothing: the first failure aborts it and no partial
/// chunk collection is returned. `on_progress` fires once after chunking
/// and once per embedded chunk.
pub async fn embed_document<E, F>(
    content: &str,
    chunker: &WindowChunker,
    embedder: &E,
    mut on_progress: F,
) -> Result<ProcessingOutcome, ProcessingError>
where
    E: Embedder + ?Sized,
    F: FnMut(ProcessingProgress),
{
    let timer = ProgressTimer::start();

    embedder.ensure_ready().await?;

    let window_chunks = chunker.chunk(content);
    let texts: Vec<&str> = window_chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .filter(|text| !text.trim().is_empty())
        .collect();
    let skipped_blank = window_chunks.len() - texts.len();
    let total = texts.len();

    debug!(
        chunks = total,
        skipped_blank,
        chars = content.chars().count(),
        "chunked document"
    );
    on_progress(timer.snapshot(0, total));

    let expected_dim = embedder.embedding_dim();
    let mut chunks = Vec::with_capacity(total);
    for (completed, text) in texts.into_iter().enumerate() {
        let vectors = embedder.embed(text).await?;
        validate_dimension(expected_dim, vectors.len())?;
        chunks.push(EmbeddedChunk {
            text: text.to_string(),
            vectors,
        });
        on_progress(timer.snapshot(completed + 1, total));
    }

    let elapsed_ms = timer.snapshot(total, total).elapsed_ms;
    debug!(chunks = total, elapsed_ms, "embedded document");

    Ok(ProcessingOutcome {
        chunks,
        skipped_blank,
        elapsed_ms,
    })
}

/// Runs the full upload pipeline over raw file bytes.
///
/// Detects the format, extracts text, then delegates to
/// [`embed_document`].
pub async fn process_file<E, F>(
    filename: &str,
    media_type: &str,
    bytes: &[u8],
    chunker: &WindowChunker,
    embedder: &E,
    on_progress: F,
) -> Result<ProcessingOutcome, ProcessingError>
where
    E: Embedder + ?Sized,
    F: FnMut(ProcessingProgress),
{
    let content = extract::extract_text(filename, media_type, bytes)?;
    debug!(
        filename,
        chars = content.chars().count(),
        "extracted document text"
    );
    embed_document(&content, chunker, embedder, on_progress).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbeddingError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Embedder that records every embedded text and returns constant
    /// vectors of a configurable dimension.
    struct StubEmbedder {
        dim: usize,
        produced_dim: usize,
        ready_calls: Cell<usize>,
        embedded: RefCell<Vec<String>>,
        fail_after: Option<usize>,
    }

    impl StubEmbedder {
        fn new(dim: usize) -> Self {
            Self {
                dim,
                produced_dim: dim,
                ready_calls: Cell::new(0),
                embedded: RefCell::new(Vec::new()),
                fail_after: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl Embedder for StubEmbedder {
        async fn ensure_ready(&self) -> Result<(), EmbeddingError> {
            self.ready_calls.set(self.ready_calls.get() + 1);
            Ok(())
        }

        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            if let Some(limit) = self.fail_after {
                if self.embedded.borrow().len() >= limit {
                    return Err(EmbeddingError::InferenceFailed("boom".to_string()));
                }
            }
            self.embedded.borrow_mut().push(text.to_string());
            Ok(vec![0.5; self.produced_dim])
        }

        fn embedding_dim(&self) -> usize {
            self.dim
        }
    }

    fn chunker(step: usize, window: usize) -> WindowChunker {
        WindowChunker::new(step, window).unwrap()
    }

    #[test]
    fn test_embeds_chunks_in_document_order() {
        let embedder = StubEmbedder::new(4);
        let outcome = block_on(embed_document(
            "abcdef",
            &chunker(2, 4),
            &embedder,
            |_| {},
        ))
        .unwrap();

        assert_eq!(outcome.chunks.len(), 3);
        assert_eq!(outcome.chunks[0].text, "abcd");
        assert_eq!(outcome.chunks[1].text, "cdef");
        assert_eq!(outcome.chunks[2].text, "ef");
        assert!(outcome.chunks.iter().all(|c| c.vectors.len() == 4));
        assert_eq!(embedder.ready_calls.get(), 1);
    }

    #[test]
    fn test_blank_chunks_skipped_without_embedding() {
        let embedder = StubEmbedder::new(4);
        // Stride 2, window 2 over "ab    cd": the middle windows are blank.
        let outcome = block_on(embed_document(
            "ab    cd",
            &chunker(2, 2),
            &embedder,
            |_| {},
        ))
        .unwrap();

        assert_eq!(outcome.skipped_blank, 2);
        let embedded = embedder.embedded.borrow();
        assert!(embedded.iter().all(|t| !t.trim().is_empty()));
        assert_eq!(outcome.chunks.len(), embedded.len());
    }

    #[test]
    fn test_progress_reaches_completion() {
        let embedder = StubEmbedder::new(4);
        let snapshots = RefCell::new(Vec::new());
        block_on(embed_document("abcdef", &chunker(2, 4), &embedder, |p| {
            snapshots.borrow_mut().push(p)
        }))
        .unwrap();

        let snapshots = snapshots.borrow();
        assert_eq!(snapshots.first().map(|p| p.chunks_completed), Some(0));
        assert!(snapshots.last().is_some_and(|p| p.is_complete()));
        assert!(snapshots
            .windows(2)
            .all(|w| w[0].chunks_completed <= w[1].chunks_completed));
    }

    #[test]
    fn test_dimension_mismatch_aborts_run() {
        let mut embedder = StubEmbedder::new(4);
        embedder.produced_dim = 3;
        let err = block_on(embed_document("abcdef", &chunker(2, 4), &embedder, |_| {}))
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::Embedding(EmbeddingError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_embed_failure_returns_no_partial_chunks() {
        let mut embedder = StubEmbedder::new(4);
        embedder.fail_after = Some(1);
        let result = block_on(embed_document("abcdef", &chunker(2, 4), &embedder, |_| {}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document_yields_no_chunks() {
        let embedder = StubEmbedder::new(4);
        let outcome =
            block_on(embed_document("", &chunker(2, 4), &embedder, |_| {})).unwrap();
        assert!(outcome.chunks.is_empty());
        assert_eq!(outcome.skipped_blank, 0);
    }

    #[test]
    fn test_process_file_plain_text() {
        let embedder = StubEmbedder::new(4);
        let outcome = block_on(process_file(
            "notes.txt",
            "text/plain",
            b"hello world",
            &chunker(4, 6),
            &embedder,
            |_| {},
        ))
        .unwrap();
        assert_eq!(outcome.chunks[0].text, "hello ");
    }

    #[test]
    fn test_process_file_unsupported_format() {
        let embedder = StubEmbedder::new(4);
        let err = block_on(process_file(
            "table.csv",
            "",
            b"a,b",
            &chunker(2, 4),
            &embedder,
            |_| {},
        ))
        .unwrap_err();
        assert!(matches!(err, ProcessingError::Extraction(_)));
        assert_eq!(embedder.ready_calls.get(), 0);
    }
}
