//! Live search over embedded chunks.
//!
//! Free-text search input is tokenized ([`tokens`]), compiled into a
//! [`TokenMatcher`] ([`highlight`]), and applied to the embedded-chunk
//! collection to produce a filtered, ordered view ([`ranker`]). All three
//! steps are pure: the view is recomputed from scratch on every change to
//! the input or the collection.

pub mod highlight;
pub mod ranker;
pub mod tokens;

pub use highlight::{Segment, TokenMatcher};
pub use ranker::{rank_chunks, RankedEntry};
pub use tokens::{drop_last_token, parse_tokens, remove_token, SearchToken};
