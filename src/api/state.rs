use crate::core::AppConfig;
use crate::jsonbin::JsonBinClient;

pub struct AppState {
    pub store: JsonBinClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: JsonBinClient, config: AppConfig) -> Self {
        Self { store, config }
    }
}
