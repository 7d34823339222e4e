//! Public types for the inbound email API
use serde::Deserialize;

/// Inbound payload from the mail relay. Relays disagree on field
/// capitalization, so each field carries a fixed alias table accepting
/// both the Postmark PascalCase convention and camelCase.
#[derive(Debug, Deserialize)]
pub struct InboundEmailPayload {
    #[serde(rename = "From", alias = "from")]
    pub from: Option<String>,
    #[serde(rename = "To", alias = "to")]
    pub to: Option<String>,
    #[serde(rename = "Subject", alias = "subject")]
    pub subject: Option<String>,
    #[serde(rename = "TextBody", alias = "textBody")]
    pub text_body: Option<String>,
    #[serde(rename = "HtmlBody", alias = "htmlBody")]
    pub html_body: Option<String>,
    #[serde(rename = "MessageID", alias = "messageId")]
    pub message_id: Option<String>,
    #[serde(rename = "Date", alias = "date")]
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct MailboxQuery {
    pub user: String,
}

#[derive(Deserialize)]
pub struct MessageQuery {
    pub user: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub read: bool,
}
