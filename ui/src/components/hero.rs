use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::FlavorSelector;
use crate::core::animation::HeroAnimation;
use crate::core::config::ShowcaseConfig;
use crate::core::flavors::FlavorRecord;
use crate::core::presentation::{
    hero_image_alt, hero_subtitle, HERO_DESCRIPTION_CHOOSE, HERO_DESCRIPTION_JOURNEY,
    HERO_IMAGE_CLASS, HERO_TITLE,
};
use crate::core::timing;
use crate::store::use_flavor_store;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const HERO_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/hero.css"
));

/// Flavor copy, illustration and picker.
///
/// Every change of `flavor` (by name) opens an animation window that closes
/// `animation_reset_ms` later. A newer change cancels the pending reset task
/// and schedules its own; the pending task is also cancelled on unmount.
#[component]
pub fn HeroSection(flavor: ReadOnlySignal<FlavorRecord>) -> Element {
    let mut store = use_flavor_store();
    let reset_ms = try_use_context::<ShowcaseConfig>()
        .unwrap_or_default()
        .animation_reset_ms;

    let mut animation = use_signal(HeroAnimation::default);
    let mut pending_reset = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let name = flavor.read().name.clone();
        let Some(generation) = animation.with_mut(|anim| anim.observe(&name)) else {
            return;
        };

        if let Some(stale) = pending_reset.take() {
            stale.cancel();
        }

        debug!(flavor = %name, generation, "hero animation started");
        let task = spawn(async move {
            timing::sleep_ms(reset_ms).await;
            if animation.with_mut(|anim| anim.settle(generation)) {
                debug!(generation, "hero animation settled");
            }
        });
        pending_reset.set(Some(task));
    });

    use_drop(move || {
        if let Ok(mut slot) = pending_reset.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
    });

    let record = flavor();
    let animating = animation.read().is_animating();
    let subtitle = hero_subtitle(&record);
    let image_alt = hero_image_alt(&record);

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HERO_CSS_INLINE}" }
        }

        div { id: "home", class: "hero-wrapper",
            section { class: "hero-section",
                div { class: "hero-content",
                    p { class: "hero-title", "{HERO_TITLE}" }
                    p { class: "hero-subtitle", "{subtitle}" }
                    p { class: "hero-description", "{HERO_DESCRIPTION_JOURNEY}" }
                    p { class: "hero-description", "{HERO_DESCRIPTION_CHOOSE}" }
                }

                FlavorSelector {
                    flavors: store.table(),
                    selected: store.selected_name(),
                    on_select: move |name: String| {
                        // Rejections are already logged by the store.
                        store.select(&name).ok();
                    },
                }
            }

            // Keyed by flavor so the image wrapper remounts and replays its CSS entrance.
            div {
                key: "{record.name}",
                class: HERO_IMAGE_CLASS,
                "data-animating": "{animating}",
                img {
                    src: "{record.image}",
                    alt: "{image_alt}",
                    class: "hero-icecream-image",
                }
            }
        }
    }
}
