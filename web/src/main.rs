use dioxus::prelude::*;

fn main() {
    dioxus::launch(WebApp);
}

/// Web entry: links the shared theme and mounts the showcase.
#[component]
fn WebApp() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Chillz · icecream" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        ui::App {}
    }
}
