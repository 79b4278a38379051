use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use embedview_core::display::DisplayWindow;
use embedview_core::embedding::EmbeddedChunk;
use embedview_core::search::{
    drop_last_token, parse_tokens, rank_chunks, remove_token, Segment, TokenMatcher,
};

use super::ChunkCard;

/// Search-and-browse view over the embedded chunks.
///
/// The search string is the sum of committed tokens plus whatever is in the
/// input box; the ranked view updates on every keystroke. Enter commits the
/// box into a token pill, backspace in an empty box removes the last pill.
#[component]
pub fn ChunkExplorer(chunks: Signal<Vec<EmbeddedChunk>>) -> Element {
    let mut committed = use_signal(String::new);
    let mut entry = use_signal(String::new);
    let mut window = use_signal(DisplayWindow::new);

    let search_text = format!("{} {}", committed.read(), entry.read())
        .trim()
        .to_string();
    let tokens = parse_tokens(&search_text);

    // Tokens come out escaped, so compilation only fails for pathological
    // input; fall back to the unfiltered view if it does.
    let matcher = if tokens.is_empty() {
        None
    } else {
        match TokenMatcher::new(&tokens) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                warn!("search tokens rejected: {e}");
                None
            }
        }
    };
    let searching = matcher.is_some();

    // Cards are keyed by the token set so manual expand/collapse overrides
    // reset whenever the set changes.
    let token_key = tokens
        .iter()
        .map(|t| t.folded.as_str())
        .collect::<Vec<_>>()
        .join("+");

    let chunk_list = chunks.read();
    let ranked = rank_chunks(&chunk_list, matcher.as_ref());
    let total = ranked.len();

    // Re-clamp the visible count whenever filtering changes the total. The
    // write is guarded so this converges instead of re-rendering forever.
    {
        let current = *window.peek();
        let mut synced = current;
        synced.sync_total(total);
        if synced != current {
            window.set(synced);
        }
    }

    let shown = window.read().display_count(total);
    let has_hidden = window.read().has_hidden(total);
    let options = DisplayWindow::size_options(total);

    let cards: Vec<(usize, usize, Vec<f32>, Vec<Segment>)> = ranked
        .iter()
        .take(shown)
        .map(|entry| {
            let chunk = &chunk_list[entry.original_index];
            let segments = match &matcher {
                Some(m) => m.highlight(&chunk.text),
                None => vec![Segment {
                    text: chunk.text.clone(),
                    matched: false,
                }],
            };
            (
                entry.original_index,
                entry.match_count,
                chunk.vectors.clone(),
                segments,
            )
        })
        .collect();

    let handle_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Enter => {
            let pending = entry.peek().trim().to_string();
            if !pending.is_empty() {
                let joined = format!("{} {}", committed.peek(), pending);
                committed.set(joined.trim().to_string());
                entry.set(String::new());
            }
        }
        Key::Backspace => {
            if entry.peek().is_empty() {
                let remaining = drop_last_token(&committed.peek());
                committed.set(remaining);
            }
        }
        _ => {}
    };

    rsx! {
        section { class: "ev-explorer",
            div { class: "ev-search-card",
                div { class: "ev-search-row",
                    input {
                        class: "ev-search-input",
                        r#type: "text",
                        placeholder: "Search chunks (space or comma separates keywords)",
                        value: "{entry}",
                        oninput: move |evt| entry.set(evt.value()),
                        onkeydown: handle_keydown,
                    }
                    if searching {
                        button {
                            class: "ev-search-clear",
                            onclick: move |_| {
                                committed.set(String::new());
                                entry.set(String::new());
                            },
                            "Clear"
                        }
                    }
                }

                if !tokens.is_empty() {
                    div { class: "ev-token-pills",
                        for token in tokens.iter() {
                            span { key: "{token.folded}", class: "ev-token-pill",
                                "{token.text}"
                                button {
                                    class: "ev-token-remove",
                                    onclick: {
                                        let folded = token.folded.clone();
                                        move |_| {
                                            let remaining = remove_token(&committed.peek(), &folded);
                                            committed.set(remaining);
                                            let pending = entry.peek().trim().to_lowercase();
                                            if pending == folded {
                                                entry.set(String::new());
                                            }
                                        }
                                    },
                                    "x"
                                }
                            }
                        }
                    }
                }
            }

            if total == 0 && searching {
                div { class: "ev-no-matches",
                    "No chunks match the current keywords."
                }
            } else {
                div { class: "ev-explorer-toolbar",
                    span { class: "ev-showing-label", "Showing {shown} of {total} chunks" }
                    div { class: "ev-size-options",
                        for option in options.iter().copied() {
                            button {
                                key: "{option}",
                                class: if option == shown { "ev-size-option ev-size-option--selected" } else { "ev-size-option" },
                                onclick: move |_| window.with_mut(|w| w.select(option)),
                                "{option}"
                            }
                        }
                    }
                }

                div { class: "ev-chunk-grid",
                    for (index, match_count, vectors, segments) in cards.into_iter() {
                        ChunkCard {
                            key: "{index}-{token_key}",
                            index,
                            match_count,
                            searching,
                            vectors,
                            segments,
                            default_expanded: searching,
                        }
                    }
                }

                if has_hidden {
                    button {
                        class: "ev-show-more",
                        onclick: move |_| window.with_mut(|w| w.show_more(total)),
                        "Show more"
                    }
                }
            }
        }
    }
}
