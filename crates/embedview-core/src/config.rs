//! Shared configuration constants.
//!
//! These values define the default chunking geometry, the embedding model
//! dimensionality, and the chunk-explorer display settings. They are used
//! across the core crate and the UI to keep both in agreement.

// =============================================================================
// Chunking geometry
// =============================================================================

/// Character stride between consecutive window start offsets.
pub const CHUNK_STEP: usize = 100;

/// Window length in characters.
///
/// With the default stride this yields 400 characters of overlap between
/// consecutive windows.
pub const CHUNK_WINDOW_SIZE: usize = 500;

// =============================================================================
// Embedding model
// =============================================================================

/// Embedding vector dimension (all-MiniLM-L6-v2 hidden size).
///
/// Every embedded chunk produced by the same embedder configuration carries
/// a vector of exactly this length.
pub const EMBEDDING_DIM: usize = 384;

// =============================================================================
// Chunk explorer display
// =============================================================================

/// Default number of chunks shown before the user picks a size option.
pub const DEFAULT_VISIBLE_CHUNKS: usize = 10;

/// Round-number visible-count candidates offered below the exact total.
pub const VISIBLE_CHUNK_CANDIDATES: [usize; 3] = [10, 20, 30];

/// Number of leading vector values shown in the collapsed embedding preview.
pub const VECTOR_PREVIEW_DIMS: usize = 8;

/// Decimal places used for the embedding preview values.
pub const VECTOR_PREVIEW_DECIMALS: usize = 4;

/// Decimal places used for the full expanded vector values.
pub const VECTOR_FULL_DECIMALS: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_overlap() {
        // Consecutive windows must overlap, otherwise stride text is dropped
        // from every window but the first.
        assert!(CHUNK_STEP < CHUNK_WINDOW_SIZE);
        assert_eq!(CHUNK_WINDOW_SIZE - CHUNK_STEP, 400);
    }

    #[test]
    fn test_embedding_dim_matches_minilm() {
        // all-MiniLM-L6-v2 produces 384-dimensional embeddings
        assert_eq!(EMBEDDING_DIM, 384);
    }

    #[test]
    fn test_candidates_sorted_ascending() {
        let mut sorted = VISIBLE_CHUNK_CANDIDATES;
        sorted.sort_unstable();
        assert_eq!(sorted, VISIBLE_CHUNK_CANDIDATES);
        assert_eq!(VISIBLE_CHUNK_CANDIDATES[0], DEFAULT_VISIBLE_CHUNKS);
    }
}
