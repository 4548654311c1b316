//! Plantventory web server
//!
//! Serves the Leptos bundle and the small JSON API it starts from, with tower
//! middleware for tracing and compression.

#![forbid(unsafe_code)]

pub mod error;
pub mod identity;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{AppError, ErrorResponse};
pub use identity::{HttpSessionResolver, SessionStrategy};
pub use routes::create_router;
pub use server::{create_app, run_server};
pub use state::AppState;
