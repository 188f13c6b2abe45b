//! Presentation helpers shared by the showcase components: copy, class names,
//! and the per-tile view model for the flavor selector.

use super::flavors::{FlavorRecord, FlavorTable};

pub const HERO_TITLE: &str = "icecream";

pub const HERO_DESCRIPTION_JOURNEY: &str = "Embark on a culinary journey of delight as you immerse \
yourself in our artisan-crafted ice cream collection, each flavor a story, each scoop an \
unforgettable chapter in your sweet odyssey!";

pub const HERO_DESCRIPTION_CHOOSE: &str = "Indulge in a world of imagination, where every scoop \
unveils a new taste adventure! choose your favorite";

// Same class in both animation phases until the animated treatment is designed.
pub const HERO_IMAGE_CLASS: &str = "slide-down-back-full";

pub const TILE_CLASS: &str = "flavor-item";
pub const TILE_SELECTED_CLASS: &str = "flavor-item selected";

pub fn background_style(flavor: &FlavorRecord) -> String {
    format!("background: {};", flavor.gradient)
}

pub fn hero_subtitle(flavor: &FlavorRecord) -> String {
    format!("{} cone", flavor.name)
}

pub fn hero_image_alt(flavor: &FlavorRecord) -> String {
    format!("{} ice cream cone", flavor.name)
}

/// Render-ready description of one selector tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorTile {
    pub name: String,
    pub image: String,
    pub selected: bool,
    pub class: &'static str,
}

/// One tile per flavor, in table order. An absent table yields no tiles.
pub fn flavor_tiles(flavors: Option<&FlavorTable>, selected: &str) -> Vec<FlavorTile> {
    let Some(flavors) = flavors else {
        return Vec::new();
    };

    flavors
        .all()
        .iter()
        .map(|flavor| {
            let is_selected = flavor.name == selected;
            FlavorTile {
                name: flavor.name.clone(),
                image: flavor.image.clone(),
                selected: is_selected,
                class: if is_selected {
                    TILE_SELECTED_CLASS
                } else {
                    TILE_CLASS
                },
            }
        })
        .collect()
}
