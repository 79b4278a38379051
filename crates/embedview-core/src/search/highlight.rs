//! Token matching and match highlighting.
//!
//! A [`TokenMatcher`] compiles a non-empty token set once and is then
//! applied to every chunk: one case-insensitive regex per token for match
//! counting, and a single alternation regex for highlighting. Tokens are
//! escaped before compilation so regex metacharacters in search input are
//! matched literally.
//!
//! Highlighting partitions a chunk's text into plain and matched segments.
//! The partition is lossless: concatenating all segments in order
//! reproduces the input text exactly. When tokens would match overlapping
//! spans, the winner is decided by the alternation's leftmost-first
//! semantics with tokens in de-duplicated input order, never by
//! longest-match.

use super::tokens::SearchToken;
use crate::error::SearchError;
use regex::{Regex, RegexBuilder};

/// One piece of a highlighted text partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The exact, case-preserving substring of the source text
    pub text: String,
    /// Whether this segment matched a search token
    pub matched: bool,
}

/// Compiled matcher for a fixed, non-empty token set.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    per_token: Vec<Regex>,
    alternation: Regex,
}

impl TokenMatcher {
    /// Compiles a matcher from a token set.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidPattern` if the token set is empty or a pattern
    /// fails to compile (tokens are escaped, so the latter only happens for
    /// pathological inputs such as patterns beyond the regex size limit).
    pub fn new(tokens: &[SearchToken]) -> Result<Self, SearchError> {
        if tokens.is_empty() {
            return Err(SearchError::InvalidPattern(
                "token set must not be empty".to_string(),
            ));
        }

        let mut per_token = Vec::with_capacity(tokens.len());
        for token in tokens {
            per_token.push(case_insensitive(&regex::escape(&token.text))?);
        }

        let alternation_pattern = tokens
            .iter()
            .map(|t| regex::escape(&t.text))
            .collect::<Vec<_>>()
            .join("|");
        let alternation = case_insensitive(&alternation_pattern)?;

        Ok(Self {
            per_token,
            alternation,
        })
    }

    /// Compiles a matcher straight from raw search input.
    ///
    /// Returns `None` when the input contains no tokens.
    pub fn from_input(input: &str) -> Result<Option<Self>, SearchError> {
        let tokens = super::tokens::parse_tokens(input);
        if tokens.is_empty() {
            Ok(None)
        } else {
            Self::new(&tokens).map(Some)
        }
    }

    /// Counts the total occurrences of all tokens in `text`.
    ///
    /// Occurrences are counted per token (non-overlapping within each
    /// token, case-insensitive) and summed across tokens.
    pub fn match_count(&self, text: &str) -> usize {
        self.per_token
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    /// Partitions `text` into plain and matched segments.
    ///
    /// Matched segments carry the exact case-preserving substring that
    /// matched; reassembling all segments in order reproduces `text`.
    pub fn highlight(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for m in self.alternation.find_iter(text) {
            if m.start() > cursor {
                segments.push(Segment {
                    text: text[cursor..m.start()].to_string(),
                    matched: false,
                });
            }
            segments.push(Segment {
                text: m.as_str().to_string(),
                matched: true,
            });
            cursor = m.end();
        }

        if cursor < text.len() {
            segments.push(Segment {
                text: text[cursor..].to_string(),
                matched: false,
            });
        }

        segments
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, SearchError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
