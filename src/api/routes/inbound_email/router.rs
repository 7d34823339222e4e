//! Router for the inbound email webhook and mailbox API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use axum_extra::extract::Query;
use chrono::Utc;
use serde_json::{Value, json};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::mailbox::MailboxRepo;
use crate::mailbox::models::{Message, generate_message_id};

type SharedState = Arc<RwLock<AppState>>;

fn mailbox_repo(state: &SharedState) -> MailboxRepo {
    let store = state.read().unwrap().store.clone();
    MailboxRepo::new(store)
}

/// Receive a forwarded email from the mail relay and file it under the
/// sender's mailbox. The relay retries on non-2xx, so store failures
/// surface as 500 rather than being acknowledged.
async fn inbound_email_webhook(
    State(state): State<SharedState>,
    Json(payload): Json<public::InboundEmailPayload>,
) -> Result<&'static str, ApiError> {
    let from = match payload.from {
        Some(from) if !from.is_empty() => from,
        _ => return Err(ApiError::BadRequest("no sender specified".to_string())),
    };

    let message = Message {
        id: generate_message_id(),
        from: from.clone(),
        to: payload.to.unwrap_or_default(),
        subject: payload.subject.unwrap_or_default(),
        text_body: payload.text_body.unwrap_or_default(),
        html_body: payload.html_body.unwrap_or_default(),
        date: Utc::now().to_rfc3339(),
        original_date: payload.date,
        message_id: payload.message_id,
        read: false,
    };

    tracing::info!("Archiving inbound email for {}", from);
    mailbox_repo(&state).append(&from, message).await?;

    Ok("OK")
}

/// List the user's archived messages, most-recent first. An unknown user
/// gets an empty list, not an error.
async fn list_messages(
    State(state): State<SharedState>,
    Query(params): Query<public::MailboxQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = mailbox_repo(&state).list(&params.user).await?;
    Ok(Json(messages))
}

async fn mark_message_read(
    State(state): State<SharedState>,
    Query(params): Query<public::MessageQuery>,
    Json(body): Json<public::MarkReadRequest>,
) -> Result<Json<Value>, ApiError> {
    let found = mailbox_repo(&state)
        .mark_read(&params.user, &params.id, body.read)
        .await?;
    if !found {
        return Err(ApiError::NotFound("message not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

/// Delete a message. Unknown user is 404; an unknown id under a known
/// user succeeds silently so retried deletes stay idempotent.
async fn delete_message(
    State(state): State<SharedState>,
    Query(params): Query<public::MessageQuery>,
) -> Result<Json<Value>, ApiError> {
    let found = mailbox_repo(&state)
        .delete(&params.user, &params.id)
        .await?;
    if !found {
        return Err(ApiError::NotFound("user not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

/// Create the inbound email router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/",
        axum::routing::post(inbound_email_webhook)
            .get(list_messages)
            .put(mark_message_read)
            .delete(delete_message),
    )
}
