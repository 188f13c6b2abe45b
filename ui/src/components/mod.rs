mod flavor_selector;
pub use flavor_selector::FlavorSelector;

mod hero;
pub use hero::HeroSection;

pub mod navbar;
pub use navbar::Navbar;
