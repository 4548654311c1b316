//! Client configuration endpoint

use axum::{Json, extract::State};
use plantventory_core::ClientConfig;

use crate::state::AppState;

/// The browser reads identity-provider URLs from here instead of baking them in.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client.as_ref().clone())
}
