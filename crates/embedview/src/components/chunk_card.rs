use dioxus::prelude::*;
use embedview_core::search::Segment;

use crate::utils::{format_vector_full, format_vector_preview};

/// A single chunk with its highlighted text and embedding vector.
///
/// Collapsed, the card shows the chunk text and the first few vector
/// dimensions; expanded, it shows the full vector. Callers key the card on
/// the chunk index plus the current search string so a new search resets
/// any manual expand/collapse.
#[component]
pub fn ChunkCard(
    index: usize,
    match_count: usize,
    searching: bool,
    vectors: Vec<f32>,
    segments: Vec<Segment>,
    default_expanded: bool,
) -> Element {
    let mut expanded = use_signal(|| default_expanded);

    let vector_text = if expanded() {
        format_vector_full(&vectors)
    } else {
        format_vector_preview(&vectors)
    };
    let match_word = if match_count == 1 { "match" } else { "matches" };

    rsx! {
        article { class: "ev-chunk-card",
            header { class: "ev-chunk-header",
                span { class: "ev-chunk-index", "Chunk {index + 1}" }
                if searching {
                    span { class: "ev-chunk-matches", "{match_count} {match_word}" }
                }
                button {
                    class: "ev-chunk-toggle",
                    onclick: move |_| {
                        let now = !*expanded.peek();
                        expanded.set(now);
                    },
                    if expanded() { "Collapse" } else { "Expand" }
                }
            }

            p { class: "ev-chunk-text",
                for (i, segment) in segments.iter().enumerate() {
                    if segment.matched {
                        mark { key: "{i}", class: "ev-highlight", "{segment.text}" }
                    } else {
                        span { key: "{i}", "{segment.text}" }
                    }
                }
            }

            div { class: "ev-chunk-vector",
                if vectors.is_empty() {
                    span { class: "ev-chunk-vector-label", "No embedding data available." }
                } else {
                    span { class: "ev-chunk-vector-label", "{vectors.len()}-dim embedding" }
                    code { class: "ev-chunk-vector-values", "{vector_text}" }
                }
            }
        }
    }
}
