//! Leptos 0.7 CSR frontend for Plantventory
//!
//! Renders the landing page: a session-aware navigation bar and an animated
//! hero. Domain logic lives in `plantventory-core`; this crate binds it to
//! the DOM.
//!
//! ## Module Structure
//! - `app`: Root component, configuration bootstrap
//! - `router`: Route table
//! - `pages`: Top-level page components
//! - `components`: Navbar, hero, theme toggle and smaller widgets
//! - `animation`: DOM targets and the frame loop driving the hero programs
//! - `state`: Server API calls and theme persistence
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod animation;
pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
