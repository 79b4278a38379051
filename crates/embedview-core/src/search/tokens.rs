//! Search-input tokenization.
//!
//! Free-text search input is split into keywords on runs of whitespace
//! and/or commas. Tokens are de-duplicated case-insensitively while keeping
//! first-seen order and original casing, so the UI can show the token as the
//! user typed it while matching is done on the folded form.

use std::collections::HashSet;

/// A single search keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchToken {
    /// Token as first typed by the user, for display
    pub text: String,
    /// Lower-cased form used for matching and de-duplication
    pub folded: String,
}

impl SearchToken {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            folded: text.to_lowercase(),
        }
    }
}

/// Splits raw search input into de-duplicated tokens.
///
/// Delimiters are whitespace and commas; empty pieces are dropped.
/// Uniqueness is case-insensitive and first occurrence wins.
///
/// # Examples
///
/// ```
/// use embedview_core::search::parse_tokens;
///
/// let tokens = parse_tokens("alpha, alpha Beta");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["alpha", "Beta"]);
/// ```
pub fn parse_tokens(input: &str) -> Vec<SearchToken> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for piece in input.split(|c: char| c.is_whitespace() || c == ',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let token = SearchToken::new(piece);
        if seen.insert(token.folded.clone()) {
            tokens.push(token);
        }
    }

    tokens
}

/// Rebuilds the search input with its last token removed.
///
/// Used for backspace-on-empty-input: the remaining tokens are joined by
/// single spaces.
pub fn drop_last_token(input: &str) -> String {
    let tokens = parse_tokens(input);
    tokens
        .iter()
        .take(tokens.len().saturating_sub(1))
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rebuilds the search input without the given token.
///
/// Comparison is case-insensitive; the remaining tokens are joined by
/// single spaces.
pub fn remove_token(input: &str, target: &str) -> String {
    let target_folded = target.to_lowercase();
    parse_tokens(input)
        .into_iter()
        .filter(|t| t.folded != target_folded)
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        parse_tokens(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_casing() {
        assert_eq!(texts("alpha, alpha Beta"), ["alpha", "Beta"]);
        assert_eq!(texts("Alpha alpha ALPHA"), ["Alpha"]);
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(texts("one,two  three ,, four"), ["one", "two", "three", "four"]);
        assert_eq!(texts(",, ,"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_tokens("").is_empty());
        assert!(parse_tokens("   ").is_empty());
    }

    #[test]
    fn test_folded_form() {
        let tokens = parse_tokens("Lorem");
        assert_eq!(tokens[0].text, "Lorem");
        assert_eq!(tokens[0].folded, "lorem");
    }

    #[test]
    fn test_drop_last_token() {
        assert_eq!(drop_last_token("alpha beta gamma"), "alpha beta");
        assert_eq!(drop_last_token("alpha"), "");
        assert_eq!(drop_last_token(""), "");
    }

    #[test]
    fn test_remove_token_case_insensitive() {
        assert_eq!(remove_token("alpha Beta gamma", "beta"), "alpha gamma");
        assert_eq!(remove_token("alpha", "alpha"), "");
        assert_eq!(remove_token("alpha beta", "missing"), "alpha beta");
    }
}
