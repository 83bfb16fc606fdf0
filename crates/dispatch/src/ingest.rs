//! Event ingestion: validation, durable append, enqueue.

use ripple_core::types::EventId;
use ripple_db::models::event::CreateEvent;
use ripple_db::repositories::EventRepo;
use ripple_db::DbPool;
use uuid::Uuid;

use crate::queue::EventQueue;

/// Errors surfaced synchronously to the ingestion caller.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The candidate event is missing a required field. Nothing was stored
    /// or enqueued.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The event store write failed. Nothing was enqueued.
    #[error("Failed to store event")]
    Storage(#[from] sqlx::Error),

    /// The pipeline is shutting down; the event is stored but will not be
    /// processed in this process lifetime.
    #[error("Event queue is closed")]
    QueueClosed,
}

/// Validates candidate events and feeds accepted ones into the pipeline.
///
/// Acceptance is fire-and-forget with respect to notification generation:
/// the caller gets the event id back as soon as the event is durably stored
/// and enqueued, and is never told whether a notification was ultimately
/// produced.
#[derive(Clone)]
pub struct EventIngester {
    pool: DbPool,
    queue: EventQueue,
}

impl EventIngester {
    pub fn new(pool: DbPool, queue: EventQueue) -> Self {
        Self { pool, queue }
    }

    /// Accept or reject one candidate event.
    ///
    /// Store-before-queue is mandatory: the event is appended to the event
    /// store first, and only enqueued once that write succeeds, so nothing
    /// is ever processed without a durable record.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Validation`] when `type` or `sourceUserId` is
    ///   missing/empty — no side effects.
    /// - [`IngestError::Storage`] when the event store append fails — the
    ///   event is not enqueued.
    pub async fn ingest(&self, draft: CreateEvent) -> Result<EventId, IngestError> {
        if draft.kind.is_empty() {
            return Err(IngestError::Validation("type is required".to_string()));
        }
        if draft.source_user_id.is_empty() {
            return Err(IngestError::Validation(
                "sourceUserId is required".to_string(),
            ));
        }

        let event_id = Uuid::new_v4();
        let event = EventRepo::insert(
            &self.pool,
            event_id,
            &draft.kind,
            &draft.source_user_id,
            draft.target_user_id.as_deref(),
            draft.data.as_ref(),
        )
        .await?;

        tracing::debug!(%event_id, kind = %event.kind, "Event accepted");

        self.queue
            .enqueue(event)
            .await
            .map_err(|_| IngestError::QueueClosed)?;

        Ok(event_id)
    }
}
