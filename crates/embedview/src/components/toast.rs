use dioxus::prelude::*;

/// Visual category of a toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient notice shown in the corner of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Renders a single toast with a dismiss button.
#[component]
pub fn ToastNotice(toast: Toast, on_dismiss: EventHandler<()>) -> Element {
    let kind_class = match toast.kind {
        ToastKind::Info => "ev-toast ev-toast--info",
        ToastKind::Error => "ev-toast ev-toast--error",
    };

    rsx! {
        div { class: "{kind_class}", role: "status",
            span { class: "ev-toast-message", "{toast.message}" }
            button {
                class: "ev-toast-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
