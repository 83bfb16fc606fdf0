//! Event kind and notification status constants, plus the typed payloads
//! carried by payload-bearing event kinds.
//!
//! Event kinds are open-ended: ingestion accepts any non-empty kind string
//! and only classification distinguishes known kinds from unknown ones.
//! Payload field names are camelCase on the wire (`postId`, `postOwnerId`,
//! `commentText`), matching what producers send in `data`.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Event kinds
// ---------------------------------------------------------------------------

pub const KIND_LIKE: &str = "like";
pub const KIND_COMMENT: &str = "comment";
pub const KIND_FOLLOW: &str = "follow";
pub const KIND_NEW_POST: &str = "new_post";
pub const KIND_MESSAGE: &str = "message";

// ---------------------------------------------------------------------------
// Notification status
// ---------------------------------------------------------------------------

pub const STATUS_UNREAD: &str = "unread";
pub const STATUS_READ: &str = "read";

// ---------------------------------------------------------------------------
// Typed payloads
// ---------------------------------------------------------------------------

/// Payload required by `like` events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePayload {
    pub post_id: String,
    pub post_owner_id: String,
}

/// Payload required by `comment` events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub post_id: String,
    pub post_owner_id: String,
    pub comment_text: String,
}
