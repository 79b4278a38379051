//! UI components for the embedview application.
//!
//! - [`UploadCard`]: drag-and-drop upload surface with progress reporting
//! - [`ChunkExplorer`]: search, ranking, and display controls over chunks
//! - [`ChunkCard`]: one chunk with highlighted text and its vector
//! - [`ToastNotice`]: transient info/error notices
//!
//! [`App`] owns the session state (the embedded-chunk collection, the
//! processing flag, the active toast) and runs the upload pipeline in a
//! coroutine so the UI stays responsive while a document is embedded.

mod chunk_card;
mod chunk_explorer;
mod toast;
mod upload_card;

pub use chunk_card::ChunkCard;
pub use chunk_explorer::ChunkExplorer;
pub use toast::{Toast, ToastKind, ToastNotice};
pub use upload_card::UploadCard;

use crate::embedding::MiniLmEmbedder;
use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use embedview_core::chunking::WindowChunker;
use embedview_core::embedding::EmbeddedChunk;
use embedview_core::processing::{process_file, ProcessingProgress};
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

/// Messages for the upload-processing coroutine.
pub enum UploadMessage {
    /// Process a newly selected file: name, media type, raw bytes.
    ProcessFile {
        name: String,
        media_type: String,
        bytes: Vec<u8>,
    },
}

#[component]
pub fn App() -> Element {
    let mut chunks = use_signal(Vec::<EmbeddedChunk>::new);
    let processing = use_signal(|| false);
    let mut progress = use_signal(|| None::<ProcessingProgress>);
    let mut file_name = use_signal(|| None::<String>);
    let mut toast = use_signal(|| None::<Toast>);

    let upload_task = use_coroutine({
        let mut chunks_signal = chunks;
        let mut processing_signal = processing;
        let mut progress_signal = progress;
        let mut file_name_signal = file_name;
        let mut toast_signal = toast;

        move |mut rx: UnboundedReceiver<UploadMessage>| async move {
            // One embedder for the whole session so the model loads once.
            let embedder = MiniLmEmbedder::new();
            let chunker = WindowChunker::default();

            while let Some(msg) = rx.next().await {
                let UploadMessage::ProcessFile {
                    name,
                    media_type,
                    bytes,
                } = msg;

                processing_signal.set(true);
                progress_signal.set(None);
                file_name_signal.set(Some(name.clone()));

                let result = process_file(&name, &media_type, &bytes, &chunker, &embedder, |p| {
                    progress_signal.set(Some(p));
                })
                .await;

                match result {
                    Ok(outcome) => {
                        debug!(
                            file = %name,
                            chunks = outcome.chunks.len(),
                            skipped_blank = outcome.skipped_blank,
                            elapsed_ms = outcome.elapsed_ms,
                            "document processed"
                        );
                        let count = outcome.chunks.len();
                        let chunk_word = if count == 1 { "chunk" } else { "chunks" };
                        toast_signal.set(Some(Toast::info(format!(
                            "Embedded {count} {chunk_word} from {name}"
                        ))));
                        chunks_signal.set(outcome.chunks);
                    }
                    Err(e) => {
                        error!(file = %name, "processing failed: {e}");
                        toast_signal.set(Some(Toast::error(e.to_string())));
                        file_name_signal.set(None);
                        chunks_signal.set(Vec::new());
                    }
                }

                processing_signal.set(false);
                progress_signal.set(None);
            }
        }
    });

    let handle_reset = move |_| {
        chunks.set(Vec::new());
        file_name.set(None);
        progress.set(None);
        toast.set(Some(Toast::info("Cleared document and chunks")));
    };

    rsx! {
        div { class: "ev-app",
            header { class: "ev-header",
                h1 { class: "ev-title", "Embedview" }
                p { class: "ev-tagline",
                    "Upload a document to see how it becomes chunks and embeddings."
                }
            }

            UploadCard {
                disabled: processing() || !chunks.read().is_empty(),
                processing: processing(),
                progress: progress(),
                file_name: file_name(),
                on_file: move |(name, media_type, bytes): (String, String, Vec<u8>)| {
                    upload_task.send(UploadMessage::ProcessFile { name, media_type, bytes });
                },
                on_rejected: move |message: String| {
                    toast.set(Some(Toast::error(message)));
                },
                on_reset: handle_reset,
            }

            if !chunks.read().is_empty() {
                ChunkExplorer { chunks }
            }

            if let Some(notice) = toast() {
                ToastNotice {
                    toast: notice,
                    on_dismiss: move |_| toast.set(None),
                }
            }
        }
    }
}
