//! The pure event-to-notification classifier.
//!
//! [`classify`] maps an event's kind, actor, and payload to the recipient
//! user id and the rendered notification text, or to a typed rejection.
//! It performs no I/O and holds no state, so the Dispatcher can call it for
//! every drained event without ordering or concurrency concerns.

use serde::de::DeserializeOwned;

use crate::event::{
    CommentPayload, LikePayload, KIND_COMMENT, KIND_FOLLOW, KIND_LIKE, KIND_MESSAGE, KIND_NEW_POST,
};
use crate::types::UserId;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A successful classification: who gets notified and what they are told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub recipient_user_id: UserId,
    pub content: String,
}

/// A classification rejection.
///
/// All variants are non-fatal to the Dispatcher: the event is dead-lettered
/// and processing continues with the next event.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The event kind is not one of the kinds this classifier understands.
    #[error("unknown event type: {kind}")]
    UnknownEventType { kind: String },

    /// The payload is absent, not an object, or missing required fields.
    #[error("malformed {kind} payload: {detail}")]
    MalformedPayload { kind: String, detail: String },

    /// The event classifies to an absent or empty recipient.
    #[error("event has no usable recipient")]
    MissingRecipient,
}

impl ClassifyError {
    /// Stable machine-readable reason, used for dead-letter records.
    pub fn reason(&self) -> &'static str {
        match self {
            ClassifyError::UnknownEventType { .. } => "unknown_event_type",
            ClassifyError::MalformedPayload { .. } => "malformed_payload",
            ClassifyError::MissingRecipient => "missing_recipient",
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify one event into a recipient and rendered content.
///
/// `target_user_id` is the event-level optional target; `payload` is the
/// event's structured `data`, required only by `like` and `comment`.
///
/// # Errors
///
/// - [`ClassifyError::UnknownEventType`] for kinds outside the known set.
/// - [`ClassifyError::MalformedPayload`] when a required payload is absent
///   or fails to decode. Decoding failures always surface here; they never
///   panic the caller.
/// - [`ClassifyError::MissingRecipient`] when the recipient resolves to
///   absent or empty. `new_post` with no target is rejected this way —
///   follower fan-out is a future extension, not a placeholder recipient.
pub fn classify(
    kind: &str,
    source_user_id: &str,
    target_user_id: Option<&str>,
    payload: Option<&serde_json::Value>,
) -> Result<Classification, ClassifyError> {
    match kind {
        KIND_LIKE => {
            let p: LikePayload = decode_payload(kind, payload)?;
            finish(
                p.post_owner_id,
                format!("{source_user_id} liked your post ({}).", p.post_id),
            )
        }
        KIND_COMMENT => {
            let p: CommentPayload = decode_payload(kind, payload)?;
            finish(
                p.post_owner_id,
                format!(
                    "{source_user_id} commented \"{}\" on your post ({}).",
                    p.comment_text, p.post_id
                ),
            )
        }
        KIND_FOLLOW => finish(
            target_user_id.unwrap_or_default().to_string(),
            format!("{source_user_id} started following you."),
        ),
        KIND_NEW_POST => finish(
            target_user_id.unwrap_or_default().to_string(),
            format!("{source_user_id} published a new post."),
        ),
        KIND_MESSAGE => finish(
            target_user_id.unwrap_or_default().to_string(),
            format!("{source_user_id} sent you a message."),
        ),
        other => Err(ClassifyError::UnknownEventType {
            kind: other.to_string(),
        }),
    }
}

/// Decode a required payload into its typed form.
fn decode_payload<T: DeserializeOwned>(
    kind: &str,
    payload: Option<&serde_json::Value>,
) -> Result<T, ClassifyError> {
    let value = payload.ok_or_else(|| ClassifyError::MalformedPayload {
        kind: kind.to_string(),
        detail: "payload is required".to_string(),
    })?;

    serde_json::from_value(value.clone()).map_err(|e| ClassifyError::MalformedPayload {
        kind: kind.to_string(),
        detail: e.to_string(),
    })
}

/// Reject empty recipients, otherwise build the classification.
fn finish(recipient: String, content: String) -> Result<Classification, ClassifyError> {
    if recipient.is_empty() {
        return Err(ClassifyError::MissingRecipient);
    }
    Ok(Classification {
        recipient_user_id: recipient,
        content,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
