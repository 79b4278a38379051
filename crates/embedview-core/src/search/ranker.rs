//! Chunk ranking against the current search tokens.
//!
//! Produces the ephemeral, display-ordered view of the embedded-chunk
//! collection. Entries are recomputed on every change to the collection or
//! the token set and are never stored.

use super::highlight::TokenMatcher;
use crate::embedding::EmbeddedChunk;

/// A chunk's position in the display order.
///
/// Carries the chunk's original position in the embedded-chunk collection
/// and its match count against the current token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    /// Index of the chunk in the embedded-chunk collection
    pub original_index: usize,
    /// Total token occurrences within the chunk's text
    pub match_count: usize,
}

/// Ranks chunks against the current search tokens.
///
/// With a matcher, chunks with zero matches are dropped and the rest are
/// ordered by match count descending, ties broken by original index
/// ascending. Without a matcher (empty token set), every chunk is retained
/// in original order with a match count of zero.
///
/// The result is deterministic: the sort is stable and the tie-break total,
/// so repeated calls over the same inputs produce identical orderings.
pub fn rank_chunks(chunks: &[EmbeddedChunk], matcher: Option<&TokenMatcher>) -> Vec<RankedEntry> {
    let Some(matcher) = matcher else {
        return (0..chunks.len())
            .map(|original_index| RankedEntry {
                original_index,
                match_count: 0,
            })
            .collect();
    };

    let mut entries: Vec<RankedEntry> = chunks
        .iter()
        .enumerate()
        .map(|(original_index, chunk)| RankedEntry {
            original_index,
            match_count: matcher.match_count(&chunk.text),
        })
        .filter(|entry| entry.match_count > 0)
        .collect();

    entries.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then(a.original_index.cmp(&b.original_index))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tokens::parse_tokens;

    fn chunks(texts: &[&str]) -> Vec<EmbeddedChunk> {
        texts
            .iter()
            .map(|t| EmbeddedChunk {
                text: t.to_string(),
                vectors: vec![0.0; 4],
            })
            .collect()
    }

    fn matcher(input: &str) -> TokenMatcher {
        TokenMatcher::new(&parse_tokens(input)).unwrap()
    }

    #[test]
    fn test_empty_tokens_preserve_original_order() {
        let chunks = chunks(&["b", "a", "c"]);
        let entries = rank_chunks(&chunks, None);
        assert_eq!(entries.len(), 3);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.original_index, i);
            assert_eq!(entry.match_count, 0);
        }
    }

    #[test]
    fn test_zero_match_chunks_filtered() {
        let chunks = chunks(&["Lorem ipsum", "dolor sit", "Lorem Lorem"]);
        let m = matcher("lorem");
        let entries = rank_chunks(&chunks, Some(&m));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], RankedEntry { original_index: 2, match_count: 2 });
        assert_eq!(entries[1], RankedEntry { original_index: 0, match_count: 1 });
    }

    #[test]
    fn test_ties_broken_by_original_index() {
        let chunks = chunks(&["x lorem", "lorem y", "lorem lorem"]);
        let m = matcher("lorem");
        let entries = rank_chunks(&chunks, Some(&m));

        let order: Vec<usize> = entries.iter().map(|e| e.original_index).collect();
        assert_eq!(order, [2, 0, 1]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let chunks = chunks(&["a b", "b a", "a a", "b b"]);
        let m = matcher("a b");
        let first = rank_chunks(&chunks, Some(&m));
        for _ in 0..10 {
            assert_eq!(rank_chunks(&chunks, Some(&m)), first);
        }
    }

    #[test]
    fn test_no_matches_anywhere() {
        let chunks = chunks(&["alpha", "beta"]);
        let m = matcher("gamma");
        assert!(rank_chunks(&chunks, Some(&m)).is_empty());
    }
}
