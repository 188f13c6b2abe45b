use dioxus::prelude::*;

use crate::core::flavors::FlavorTable;
use crate::core::presentation::{flavor_tiles, FlavorTile};

const SELECTOR_CSS: Asset = asset!("/assets/styling/flavor_selector.css");
const SELECTOR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/flavor_selector.css"
));

/// Row of clickable flavor thumbnails. Renders nothing when `flavors` is absent.
#[component]
pub fn FlavorSelector(
    flavors: Option<FlavorTable>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    let tiles = flavor_tiles(flavors.as_ref(), &selected);

    rsx! {
        document::Link { rel: "stylesheet", href: SELECTOR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SELECTOR_CSS_INLINE}" }
        }

        div { class: "flavor-selector",
            for tile in tiles.into_iter() {
                {render_tile(tile, on_select)}
            }
        }
    }
}

fn render_tile(tile: FlavorTile, on_select: EventHandler<String>) -> Element {
    let FlavorTile {
        name,
        image,
        selected,
        class,
    } = tile;

    let click_name = name.clone();
    let key_name = name.clone();

    rsx! {
        div {
            key: "{name}",
            class: "{class}",
            role: "button",
            tabindex: 0,
            aria_pressed: "{selected}",
            onclick: move |_| on_select.call(click_name.clone()),
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                if key == " " || key == "enter" {
                    evt.prevent_default();
                    on_select.call(key_name.clone());
                }
            },
            img { src: "{image}", alt: "{name}", class: "flavor-thumbnail" }
        }
    }
}
