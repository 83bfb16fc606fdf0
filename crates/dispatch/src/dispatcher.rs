//! The dispatcher: consumer loop driving classification and persistence.
//!
//! [`Dispatcher`] owns the [`EventBacklog`](crate::queue::EventBacklog)
//! and is the only writer of pipeline notifications. It wakes when an
//! event is enqueued, drains the ready backlog, and processes the batch
//! sequentially in queue order, so notifications are always created in
//! the relative order their events were accepted.

use ripple_core::classify::{classify, ClassifyError};
use ripple_db::models::event::Event;
use ripple_db::repositories::{DeadLetterRepo, NotificationRepo};
use ripple_db::DbPool;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::queue::EventBacklog;

/// Background service that turns queued events into notifications.
pub struct Dispatcher {
    pool: DbPool,
}

impl Dispatcher {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the dispatch loop.
    ///
    /// Waits for the next queued event, then drains everything already
    /// buffered and processes the batch sequentially. At most one
    /// classification/store operation is in flight at any instant.
    ///
    /// The loop exits when the queue's producer side is dropped or when
    /// `cancel` fires; an in-flight batch always runs to completion.
    pub async fn run(self, mut backlog: EventBacklog, cancel: CancellationToken) {
        loop {
            let first = tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Dispatcher cancelled");
                    break;
                }
                received = backlog.recv() => match received {
                    Some(event) => event,
                    None => {
                        tracing::info!("Event queue closed, dispatcher shutting down");
                        break;
                    }
                },
            };

            self.process(&first).await;
            for event in backlog.drain_ready() {
                self.process(&event).await;
            }
        }
    }

    /// Process a single event: classify, then persist the notification.
    ///
    /// Failures never propagate: the ingestion caller already received a
    /// success response, so a rejected or unstorable event is logged,
    /// dead-lettered, and dropped, and the loop moves on.
    async fn process(&self, event: &Event) {
        let classification = match classify(
            &event.kind,
            &event.source_user_id,
            event.target_user_id.as_deref(),
            event.payload.as_ref(),
        ) {
            Ok(c) => c,
            Err(rejection) => {
                tracing::warn!(
                    event_id = %event.event_id,
                    kind = %event.kind,
                    reason = rejection.reason(),
                    "Event rejected by classifier"
                );
                self.dead_letter(event, &rejection).await;
                return;
            }
        };

        let notification_id = Uuid::new_v4();
        match NotificationRepo::insert(
            &self.pool,
            notification_id,
            &classification.recipient_user_id,
            &event.kind,
            &classification.content,
        )
        .await
        {
            Ok(_) => {
                tracing::debug!(
                    event_id = %event.event_id,
                    %notification_id,
                    recipient = %classification.recipient_user_id,
                    "Notification created"
                );
            }
            Err(e) => {
                tracing::error!(
                    event_id = %event.event_id,
                    error = %e,
                    "Failed to store notification"
                );
                self.record_dead_letter(event, "storage_error", &e.to_string())
                    .await;
            }
        }
    }

    async fn dead_letter(&self, event: &Event, rejection: &ClassifyError) {
        self.record_dead_letter(event, rejection.reason(), &rejection.to_string())
            .await;
    }

    /// Record the drop in the dead-letter table. A failure here is only
    /// logged: the event row itself is still retained in the event store.
    async fn record_dead_letter(&self, event: &Event, reason: &str, detail: &str) {
        if let Err(e) = DeadLetterRepo::insert(&self.pool, event.event_id, reason, Some(detail)).await
        {
            tracing::error!(
                event_id = %event.event_id,
                reason,
                error = %e,
                "Failed to record dead letter"
            );
        }
    }
}
