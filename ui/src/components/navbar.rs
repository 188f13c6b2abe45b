use dioxus::prelude::*;

// Navbar stylesheet (linked as an asset; inlined for native release builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

pub const LOGO_SRC: &str = "/images/logo.png";
pub const LOGO_ALT: &str = "Chillz company logo";
pub const ORDER_CTA_LABEL: &str = "Order Your Ice-cream";

/// An in-page anchor shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Shop", href: "#shop" },
    NavLink { label: "Delivery", href: "#delivery" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Static brand chrome: logo, section anchors and the order button.
///
/// The order button carries no handler; checkout lives outside the showcase.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            img { src: LOGO_SRC, alt: LOGO_ALT, class: "navbar-logo" }

            ul { class: "navbar-links",
                for link in NAV_LINKS {
                    li { key: "{link.href}",
                        a { href: link.href, "{link.label}" }
                    }
                }
            }

            button { r#type: "button", class: "navbar-order-btn", "{ORDER_CTA_LABEL}" }
        }
    }
}
