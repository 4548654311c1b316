//! Route definitions as constants for type safety.
//!
//! Only routes this application owns live here. Identity-provider URLs
//! (sign in, sign out, sign up, account) come from configuration.

pub const HOME: &str = "/";
pub const PLANTS: &str = "/plants";

/// JSON endpoints served next to the UI bundle.
pub mod api {
    pub const HEALTH: &str = "/api/health";
    pub const CONFIG: &str = "/api/config";
    pub const SESSION: &str = "/api/session";
}
