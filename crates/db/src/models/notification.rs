//! Notification entity model and manual-creation DTO.

use ripple_core::types::{DbId, NotificationId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Serializes to the wire shape
/// `{notificationId, userId, type, content, status, timestamp}`; the
/// insertion counter `seq` is internal and never exposed.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_id: NotificationId,
    #[serde(skip_serializing)]
    pub seq: DbId,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub status: String,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}

/// Body of `POST /notifications`: direct store append, bypassing the
/// event pipeline (manual/test creation).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
}
