//! Event entity model and ingestion DTO.

use ripple_core::types::{EventId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table. Immutable once stored.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: EventId,
    #[serde(rename = "type")]
    pub kind: String,
    pub source_user_id: String,
    pub target_user_id: Option<String>,
    pub payload: Option<serde_json::Value>,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}

/// Body of `POST /events`: a candidate event before validation.
///
/// `data` is the type-specific structured payload (e.g. `postId` /
/// `postOwnerId` for likes). Unknown `type` values are accepted here and
/// rejected only at classification time. The required fields default to
/// empty so that an absent field is reported as a validation error (400)
/// rather than a body-decoding rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub source_user_id: String,
    pub target_user_id: Option<String>,
    pub data: Option<serde_json::Value>,
}
