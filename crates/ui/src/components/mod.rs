//! Reusable UI components

pub mod hero;
pub mod icon;
pub mod navbar;
pub mod skeleton;
pub mod theme_toggle;
pub mod user_button;

pub use hero::Hero;
pub use icon::IconGlyph;
pub use navbar::Navbar;
pub use skeleton::Skeleton;
pub use theme_toggle::ThemeToggle;
pub use user_button::UserButton;
