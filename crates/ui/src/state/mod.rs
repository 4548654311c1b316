//! Browser-side state: the server API and persisted preferences.

pub mod api;
pub mod theme;

pub use api::{SessionSource, fetch_client_config, fetch_session_view};
pub use theme::{apply_theme, cycle_theme, initial_theme, stored_theme};
