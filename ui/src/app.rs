use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;

use crate::components::{HeroSection, Navbar};
use crate::core::config::ShowcaseConfig;
use crate::core::flavors::FlavorTable;
use crate::core::presentation::background_style;
use crate::core::selection::SelectionState;
use crate::store::use_flavor_store_provider;

/// Shared theme, linked as an asset by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Root of the showcase. Loads the bundled flavor table and hands it to
/// `Storefront`; a table that fails to load renders an error panel instead.
#[component]
pub fn App(#[props(default)] config: ShowcaseConfig) -> Element {
    match FlavorTable::bundled() {
        Ok(table) => rsx! {
            Storefront { table: table.clone(), config }
        },
        Err(err) => {
            error!(%err, "failed to load bundled flavor table");
            rsx! {
                div { class: "app app-error", role: "alert",
                    h1 { "Our flavors are melting" }
                    p { "{err}" }
                }
            }
        }
    }
}

/// Owns the selected flavor and paints the page in its gradient.
#[component]
pub fn Storefront(table: FlavorTable, config: ShowcaseConfig) -> Element {
    let init_config = config.clone();
    let store = use_flavor_store_provider(move || SelectionState::from_config(table, &init_config));
    use_context_provider(|| config);

    let current = store.current();
    debug!(flavor = %current.name, "render storefront");
    let style = background_style(&current);

    rsx! {
        div { class: "app", style: "{style}",
            Navbar {}
            HeroSection { flavor: current }
        }
    }
}
