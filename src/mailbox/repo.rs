//! Per-user mailbox operations over the single stored document.
//!
//! Every operation is a fetch-mutate-store round trip against the whole
//! document. The three steps are not guarded by any lock or concurrency
//! token, so two overlapping requests can interleave and the later write
//! wins (lost update). That matches the store's get-latest/put-whole
//! contract and is accepted for this workload.

use anyhow::Result;

use crate::jsonbin::JsonBinClient;
use crate::mailbox::models::{Document, Message, user_key};

pub struct MailboxRepo {
    store: JsonBinClient,
}

impl MailboxRepo {
    pub fn new(store: JsonBinClient) -> Self {
        Self { store }
    }

    /// Fetch the current document, running the one-time legacy migration
    /// if the stored shape is still the flat pre-partitioned list. The
    /// migration's own write makes the old shape disappear, so it runs at
    /// most once.
    async fn fetch_migrated(&self) -> Result<Document> {
        let mut doc = self.store.fetch_latest().await?;
        if doc.migrate_legacy() {
            tracing::info!(
                "Migrated legacy mailbox document into {} user partition(s)",
                doc.users.len()
            );
            self.store.put(&doc).await?;
        }
        Ok(doc)
    }

    /// All messages for the user, most-recent first. An unknown user is
    /// indistinguishable from a user with zero messages.
    pub async fn list(&self, email: &str) -> Result<Vec<Message>> {
        let doc = self.fetch_migrated().await?;
        Ok(doc.users.get(&user_key(email)).cloned().unwrap_or_default())
    }

    /// File a message at the front of the user's mailbox, creating the
    /// partition if this is the user's first message.
    pub async fn append(&self, email: &str, message: Message) -> Result<()> {
        let mut doc = self.fetch_migrated().await?;
        doc.users
            .entry(user_key(email))
            .or_default()
            .insert(0, message);
        self.store.put(&doc).await
    }

    /// Set the read flag on a message. Returns false when the user or the
    /// message id is unknown; no write happens in that case.
    pub async fn mark_read(&self, email: &str, id: &str, read: bool) -> Result<bool> {
        let mut doc = self.fetch_migrated().await?;
        let Some(mailbox) = doc.users.get_mut(&user_key(email)) else {
            return Ok(false);
        };
        let Some(message) = mailbox.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        message.read = read;
        self.store.put(&doc).await?;
        Ok(true)
    }

    /// Remove a message from the user's mailbox. Returns false when the
    /// user is unknown. Deleting an id that is already absent under a
    /// known user succeeds silently (the filter is a no-op).
    pub async fn delete(&self, email: &str, id: &str) -> Result<bool> {
        let mut doc = self.fetch_migrated().await?;
        let Some(mailbox) = doc.users.get_mut(&user_key(email)) else {
            return Ok(false);
        };
        mailbox.retain(|m| m.id != id);
        self.store.put(&doc).await?;
        Ok(true)
    }
}
