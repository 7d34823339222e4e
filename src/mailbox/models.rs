//! Persisted data model: the single mailbox document, one archived
//! message, and the user-key derivation used to partition the document.

use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entire persisted state: one JSON document mapping user keys to
/// mailboxes, most-recent message first.
///
/// The `emails` field only exists to deserialize the legacy flat shape
/// (`{ "emails": [...] }`) for one-time migration. It is drained by
/// [`Document::migrate_legacy`] and never serialized back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: HashMap<String, Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<Message>>,
}

impl Document {
    /// Reclassify a legacy flat message list into per-user partitions,
    /// keyed by each message's sender. Runs only when the document still
    /// has the legacy list and no partitions; a no-op otherwise, so
    /// re-triggering against an already-migrated document is safe.
    ///
    /// Returns true when the document changed and needs writing back.
    pub fn migrate_legacy(&mut self) -> bool {
        if !self.users.is_empty() {
            // Already partitioned; drop any stray legacy field.
            return self.emails.take().is_some();
        }
        let Some(legacy) = self.emails.take() else {
            return false;
        };
        if legacy.is_empty() {
            return true;
        }
        for message in legacy {
            let key = user_key(&message.from);
            self.users.entry(key).or_default().push(message);
        }
        true
    }
}

/// One archived email. Field names on the wire are camelCase, matching
/// what the browser UI and the stored document expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(rename = "textBody")]
    pub text_body: String,
    #[serde(rename = "htmlBody")]
    pub html_body: String,
    /// Server-assigned receipt timestamp, ISO-8601.
    pub date: String,
    /// Timestamp as reported by the relay, if any.
    #[serde(rename = "originalDate", skip_serializing_if = "Option::is_none")]
    pub original_date: Option<String>,
    /// Message id as reported by the relay, if any.
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// Derive the stable partition key for an email address: lowercase, with
/// every character outside `[a-z0-9]` replaced by `_`. Not reversible;
/// distinct addresses that normalize identically share a mailbox.
pub fn user_key(email: &str) -> String {
    email
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Generate a locally unique message id: receipt time in unix millis
/// concatenated with a random alphanumeric suffix. Not cryptographically
/// unique; collisions are negligible at this workload.
pub fn generate_message_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(11)
        .map(char::from)
        .collect();
    format!("{}{}", Utc::now().timestamp_millis(), suffix.to_lowercase())
}
