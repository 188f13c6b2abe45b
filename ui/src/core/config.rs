//! Showcase tunables.

/// Flavor shown before the visitor picks one.
pub const DEFAULT_FLAVOR: &str = "Strawberry";

/// How long the hero stays in its post-change animation window.
pub const ANIMATION_RESET_MS: u64 = 1200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub default_flavor: String,
    pub animation_reset_ms: u64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            default_flavor: DEFAULT_FLAVOR.to_string(),
            animation_reset_ms: ANIMATION_RESET_MS,
        }
    }
}
