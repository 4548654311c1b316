//! Plantventory core
//!
//! Target-independent domain for the Plantventory landing experience. Compiles
//! for native targets (the web server) and `wasm32` (the Leptos frontend).
//!
//! ## Module Structure
//! - `session`: session fact, identity/profile collaborator traits, resolution
//! - `nav`: navigation bar model built from a resolved session
//! - `animation`: deterministic, scoped, revertible animation engine
//! - `hero`: landing hero content and its animation programs
//! - `theme`: color theme preference
//! - `config`: TOML configuration and the client-visible subset
//! - `routes`: route constants
//! - `icon`: glyph identifiers
//! - `error` / `result`: error type and result alias

#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod error;
pub mod hero;
pub mod icon;
pub mod nav;
pub mod result;
pub mod routes;
pub mod session;
pub mod theme;

pub use config::{AppConfig, AuthUrls, ClientConfig};
pub use error::Error;
pub use icon::Icon;
pub use nav::{AuthControl, NavModel, NavState, resolve_nav};
pub use result::{Result, ResultExt};
pub use session::{
    AnonymousResolver, FixedResolver, InMemoryProfiles, Profile, ProfileLookup, Session,
    SessionResolver, SessionState, SessionView, UserId, resolve_session,
};
pub use theme::Theme;
