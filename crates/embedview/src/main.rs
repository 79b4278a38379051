use dioxus::prelude::*;
use embedview::components::App as EmbedviewApp;

const MAIN_CSS: Asset = asset!("/assets/embedview.css");

fn main() {
    // DEBUG for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    let config = dioxus::desktop::Config::default().with_window(
        dioxus::desktop::WindowBuilder::new()
            .with_title("Embedview")
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
            .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! resolution is unreliable on desktop, so inline the CSS there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/embedview.css")} }
        }

        body { class: "ev-body",
            EmbedviewApp {}
        }
    }
}
