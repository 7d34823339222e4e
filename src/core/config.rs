use std::env;

/// External document store credentials and address. The key and bin id
/// are opaque secrets and must never be logged.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jsonbin_api_url: String,
    pub jsonbin_api_key: String,
    pub jsonbin_bin_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let jsonbin_api_url = env::var("READLATER_JSONBIN_API_URL")
            .unwrap_or_else(|_| "https://api.jsonbin.io".to_string());
        let jsonbin_api_key = env::var("READLATER_JSONBIN_API_KEY")
            .expect("Missing env var READLATER_JSONBIN_API_KEY");
        let jsonbin_bin_id = env::var("READLATER_JSONBIN_BIN_ID")
            .expect("Missing env var READLATER_JSONBIN_BIN_ID");

        Self {
            jsonbin_api_url,
            jsonbin_api_key,
            jsonbin_bin_id,
        }
    }
}
