use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use story_ui::session::Session;
use story_ui::StoryGallery;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    // Session is resolved once at bootstrap and handed down via context;
    // nothing else reads browser storage for identity.
    use_context_provider(Session::bootstrap);

    rsx! {
        StoryGallery {}
    }
}
