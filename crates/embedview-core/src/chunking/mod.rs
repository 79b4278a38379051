//! Fixed-stride overlapping window chunking.
//!
//! Splits extracted document text into fixed-size character windows on a
//! fixed stride, so consecutive windows overlap and no boundary context is
//! lost between them. Offsets are measured in characters, not bytes, so the
//! chunker is safe on any UTF-8 input.

use crate::config::{CHUNK_STEP, CHUNK_WINDOW_SIZE};
use crate::error::ChunkingError;

/// A chunk of text with metadata about its position in the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    /// Index of this chunk in the document (0-based)
    pub index: usize,
    /// The text content of this chunk
    pub text: String,
    /// Character offset where this chunk starts in the original document
    pub start_char: usize,
    /// Character offset where this chunk ends in the original document
    pub end_char: usize,
}

/// Overlapping fixed-size window chunker.
///
/// Produces the substring window starting at each offset `0, step, 2*step,
/// ...` strictly below the source length, each window `window_size`
/// characters long and truncated at the end of the string.
///
/// # Examples
///
/// ```
/// use embedview_core::chunking::WindowChunker;
///
/// let chunker = WindowChunker::new(2, 4).unwrap();
/// let chunks = chunker.chunk("abcdef");
/// assert_eq!(chunks[0].text, "abcd");
/// assert_eq!(chunks[1].text, "cdef");
/// assert_eq!(chunks[2].text, "ef");
/// ```
#[derive(Debug, Clone)]
pub struct WindowChunker {
    step: usize,
    window_size: usize,
}

impl WindowChunker {
    /// Creates a new window chunker.
    ///
    /// # Errors
    ///
    /// Returns `ChunkingError::InvalidConfig` if `step` or `window_size` is
    /// zero. A zero stride would never advance; a zero window would produce
    /// empty chunks forever. Both are configuration errors, caught here so
    /// that [`WindowChunker::chunk`] itself cannot fail.
    pub fn new(step: usize, window_size: usize) -> Result<Self, ChunkingError> {
        if step == 0 {
            return Err(ChunkingError::InvalidConfig(
                "step must be greater than zero".to_string(),
            ));
        }
        if window_size == 0 {
            return Err(ChunkingError::InvalidConfig(
                "window size must be greater than zero".to_string(),
            ));
        }
        Ok(Self { step, window_size })
    }

    /// Returns the stride between window start offsets.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the window length in characters.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Splits `source` into overlapping windows.
    ///
    /// An empty source yields an empty sequence. No window is produced for
    /// an offset at or beyond the end of the source.
    pub fn chunk(&self, source: &str) -> Vec<TextChunk> {
        if source.is_empty() {
            return Vec::new();
        }

        // Byte offset of every character, for O(1) char-to-byte mapping.
        let char_starts: Vec<usize> = source.char_indices().map(|(byte, _)| byte).collect();
        let total_chars = char_starts.len();
        let byte_at = |char_offset: usize| -> usize {
            if char_offset >= total_chars {
                source.len()
            } else {
                char_starts[char_offset]
            }
        };

        let mut chunks = Vec::with_capacity(total_chars / self.step + 1);
        let mut start = 0;
        let mut index = 0;

        while start < total_chars {
            let end = (start + self.window_size).min(total_chars);
            chunks.push(TextChunk {
                index,
                text: source[byte_at(start)..byte_at(end)].to_string(),
                start_char: start,
                end_char: end,
            });
            start += self.step;
            index += 1;
        }

        chunks
    }
}

impl Default for WindowChunker {
    fn default() -> Self {
        // The defaults are compile-time constants validated by config tests.
        Self {
            step: CHUNK_STEP,
            window_size: CHUNK_WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let chunker = WindowChunker::default();
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn test_offsets_are_stride_multiples() {
        let chunker = WindowChunker::new(100, 500).unwrap();
        let text = "a".repeat(1234);
        let chunks = chunker.chunk(&text);

        // Offsets 0, 100, ..., 1200: thirteen windows, none at or past the end.
        assert_eq!(chunks.len(), 13);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.start_char, i * 100);
            assert!(chunk.start_char < 1234);
        }
    }

    #[test]
    fn test_chunk_matches_source_window() {
        let chunker = WindowChunker::new(3, 7).unwrap();
        let text = "The quick brown fox jumps over the lazy dog";
        let chars: Vec<char> = text.chars().collect();

        for chunk in chunker.chunk(text) {
            let expected: String = chars[chunk.start_char..chunk.end_char].iter().collect();
            assert_eq!(chunk.text, expected);
            assert!(chunk.text.chars().count() <= 7);
        }
    }

    #[test]
    fn test_final_window_truncated() {
        let chunker = WindowChunker::new(2, 4).unwrap();
        let chunks = chunker.chunk("abcdef");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "abcd");
        assert_eq!(chunks[1].text, "cdef");
        assert_eq!(chunks[2].text, "ef");
    }

    #[test]
    fn test_source_shorter_than_window() {
        let chunker = WindowChunker::default();
        let chunks = chunker.chunk("short");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "short");
        assert_eq!(chunks[0].start_char, 0);
        assert_eq!(chunks[0].end_char, 5);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let chunker = WindowChunker::new(2, 3).unwrap();
        let text = "héllo wörld";
        let chars: Vec<char> = text.chars().collect();

        for chunk in chunker.chunk(text) {
            let expected: String = chars[chunk.start_char..chunk.end_char].iter().collect();
            assert_eq!(chunk.text, expected);
        }
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(
            WindowChunker::new(0, 500),
            Err(ChunkingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            WindowChunker::new(100, 0),
            Err(ChunkingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_geometry() {
        let chunker = WindowChunker::default();
        assert_eq!(chunker.step(), 100);
        assert_eq!(chunker.window_size(), 500);
    }
}
