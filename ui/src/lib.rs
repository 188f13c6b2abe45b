//! Shared UI crate for the Chillz flavor showcase. Components, state and
//! bundled assets live here; the platform crates only launch `App`.

pub mod core;
pub mod store;

mod app;
pub use app::{App, Storefront, THEME_CSS};

pub mod components;
