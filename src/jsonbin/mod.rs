//! JSONBin v3 client for the single mailbox document. The store only
//! supports fetching the latest revision and overwriting the whole
//! document; there are no partial updates and no concurrency tokens, so
//! concurrent writers are last-write-wins.

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::core::AppConfig;
use crate::mailbox::models::Document;

const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// JSONBin wraps stored documents in a `record` envelope on reads.
#[derive(Debug, Deserialize)]
struct BinEnvelope {
    record: Document,
}

#[derive(Clone)]
pub struct JsonBinClient {
    http: Client,
    api_url: String,
    api_key: String,
    bin_id: String,
}

impl JsonBinClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            api_url: config.jsonbin_api_url.clone(),
            api_key: config.jsonbin_api_key.clone(),
            bin_id: config.jsonbin_bin_id.clone(),
        }
    }

    fn bin_url(&self) -> String {
        format!("{}/v3/b/{}", self.api_url, self.bin_id)
    }

    /// Fetch the latest revision of the document. Any upstream failure
    /// (transport error or non-success status) is logged and masked as an
    /// empty document, so a store outage reads as "no data".
    pub async fn fetch_latest(&self) -> Result<Document> {
        let resp = match self
            .http
            .get(format!("{}/latest", self.bin_url()))
            .header(MASTER_KEY_HEADER, &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!("Failed to reach document store: {}", err);
                return Ok(Document::default());
            }
        };

        if !resp.status().is_success() {
            tracing::warn!("Document store fetch returned {}", resp.status());
            return Ok(Document::default());
        }

        let envelope: BinEnvelope = resp.json().await?;
        Ok(envelope.record)
    }

    /// Overwrite the entire stored document. Unlike reads, write failures
    /// are surfaced to the caller so a dropped mutation is never silent.
    pub async fn put(&self, document: &Document) -> Result<()> {
        let resp = self
            .http
            .put(self.bin_url())
            .header(MASTER_KEY_HEADER, &self.api_key)
            .json(document)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!("Failed to write document store: {} {}", status, body);
            return Err(anyhow!("document store write failed with {}", status));
        }
        Ok(())
    }
}
