use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use embedview_core::extract::{file_extension, ALLOWED_EXTENSIONS};
use embedview_core::processing::ProcessingProgress;

/// Upload surface: drag-and-drop zone plus a file picker.
///
/// Accepts exactly one document at a time. While a file is processing, or
/// while a processed document is loaded, the card is disabled and offers a
/// Reset button instead; unsupported extensions are rejected before any
/// bytes are read.
#[component]
pub fn UploadCard(
    disabled: bool,
    processing: bool,
    progress: Option<ProcessingProgress>,
    file_name: Option<String>,
    on_file: EventHandler<(String, String, Vec<u8>)>,
    on_rejected: EventHandler<String>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut drag_active = use_signal(|| false);
    let mut limits_open = use_signal(|| false);

    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    // Shared between the hidden input and the drop zone.
    let read_first_file = move |engine: Option<Arc<dyn FileEngine>>| {
        let Some(engine) = engine else { return };
        spawn(async move {
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };

            let supported = file_extension(&name)
                .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
            if !supported {
                on_rejected.call(format!(
                    "Unsupported file type: {name}. Use PDF, DOCX, TXT, MD, or JSON."
                ));
                return;
            }

            debug!(file = %name, "reading uploaded file");
            match engine.read_file(&name).await {
                Some(bytes) => on_file.call((name, String::new(), bytes)),
                None => on_rejected.call(format!("Failed to read {name}")),
            }
        });
    };

    let card_class = if drag_active() {
        "ev-upload-card ev-upload-card--active"
    } else {
        "ev-upload-card"
    };

    rsx! {
        section {
            class: "{card_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                if !disabled {
                    drag_active.set(true);
                }
            },
            ondragleave: move |_| drag_active.set(false),
            ondrop: move |evt| {
                evt.prevent_default();
                drag_active.set(false);
                if !disabled {
                    read_first_file(evt.files());
                }
            },

            if processing {
                div { class: "ev-upload-progress",
                    div { class: "ev-spinner" }
                    if let Some(p) = progress {
                        div { class: "ev-progress-track",
                            div {
                                class: "ev-progress-fill",
                                style: "width: {p.percent_complete()}%",
                            }
                        }
                        div { class: "ev-progress-label",
                            "Embedding chunk {p.chunks_completed} of {p.chunks_total}"
                        }
                    } else {
                        div { class: "ev-progress-label", "Extracting text..." }
                    }
                }
            } else if let Some(name) = file_name {
                div { class: "ev-upload-done",
                    span { class: "ev-upload-filename", "{name}" }
                    button {
                        class: "ev-reset-button",
                        onclick: move |_| on_reset.call(()),
                        "Reset"
                    }
                }
            } else {
                div { class: "ev-dropzone",
                    div { class: "ev-dropzone-title", "Drop a document here" }
                    div { class: "ev-dropzone-subtitle",
                        "PDF, DOCX, TXT, MD, or JSON. One file at a time."
                    }
                    label { class: "ev-upload-button",
                        input {
                            r#type: "file",
                            class: "ev-hidden-input",
                            accept: "{accept}",
                            disabled,
                            onchange: move |evt| read_first_file(evt.files()),
                        }
                        "Choose file"
                    }
                    button {
                        class: "ev-limits-link",
                        onclick: move |_| limits_open.set(true),
                        "Upload limits"
                    }
                }
            }

            if limits_open() {
                div { class: "ev-dialog-backdrop",
                    div { class: "ev-dialog", role: "dialog",
                        h2 { class: "ev-dialog-title", "Upload limits" }
                        ul { class: "ev-dialog-list",
                            li { "One document at a time; reset to load another." }
                            li { "Supported formats: PDF, DOCX, TXT, MD, JSON." }
                            li { "All processing runs on this device; nothing is uploaded anywhere." }
                            li { "Large documents take longer: each chunk is embedded one at a time." }
                        }
                        button {
                            class: "ev-dialog-close",
                            onclick: move |_| limits_open.set(false),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
