//! Page components for the Plantventory UI
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod not_found;
pub mod plants;

pub use home::Home;
pub use not_found::NotFound;
pub use plants::Plants;
