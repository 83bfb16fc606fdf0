//! Dead-letter entity model.

use ripple_core::types::{DbId, EventId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `dead_letters` table: one event dropped from the
/// notification path, with the typed reason it was dropped.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetter {
    pub id: DbId,
    pub event_id: EventId,
    pub reason: String,
    pub detail: Option<String>,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}
