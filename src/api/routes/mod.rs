//! API routes module

pub mod inbound_email;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Inbound email webhook and mailbox routes
        .nest("/inbound-email", inbound_email::router())
}
