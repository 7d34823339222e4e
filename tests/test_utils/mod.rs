//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::Router;

use readlater::api::AppState;
use readlater::api::app;
use readlater::core::AppConfig;
use readlater::jsonbin::JsonBinClient;

/// Creates a test application router whose document store client points
/// at the given mock server URL. Each test spins up its own
/// `mockito::Server` and seeds it with the document fixtures it needs.
pub fn test_app(store_url: &str) -> Router {
    let config = AppConfig {
        jsonbin_api_url: store_url.to_string(),
        jsonbin_api_key: String::from("test-master-key"),
        jsonbin_bin_id: String::from("test-bin"),
    };
    let store = JsonBinClient::new(&config);
    let app_state = AppState::new(store, config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Collect a response body into a string for assertions.
pub async fn body_to_string(body: axum::body::Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
