//! Bounded FIFO handoff between the ingester and the dispatcher.
//!
//! Built on `tokio::sync::mpsc`. The bound is the pipeline's overload
//! protection: when the buffer is full, [`EventQueue::enqueue`] suspends,
//! which slows producers down instead of consuming memory.
//!
//! [`EventBacklog`] is the single consumer half, so no event is ever
//! visible to two drains, and enqueue order is exactly processing order.

use ripple_db::models::event::Event;
use tokio::sync::mpsc;

/// Default capacity of the queue buffer.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Create a connected queue/backlog pair with the given capacity.
pub fn channel(capacity: usize) -> (EventQueue, EventBacklog) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventQueue { tx }, EventBacklog { rx })
}

/// The enqueue error: the consumer half has been dropped (shutdown).
#[derive(Debug, thiserror::Error)]
#[error("event queue is closed")]
pub struct QueueClosed;

// ---------------------------------------------------------------------------
// EventQueue (producer half)
// ---------------------------------------------------------------------------

/// Producer half of the queue. Cheap to clone; one per ingester.
#[derive(Clone)]
pub struct EventQueue {
    tx: mpsc::Sender<Event>,
}

impl EventQueue {
    /// Append an event to the queue.
    ///
    /// Suspends while the queue is at capacity (backpressure). Fails only
    /// when the backlog has been dropped.
    pub async fn enqueue(&self, event: Event) -> Result<(), QueueClosed> {
        self.tx.send(event).await.map_err(|_| QueueClosed)
    }
}

// ---------------------------------------------------------------------------
// EventBacklog (consumer half)
// ---------------------------------------------------------------------------

/// Consumer half of the queue, owned exclusively by the dispatcher.
pub struct EventBacklog {
    rx: mpsc::Receiver<Event>,
}

impl EventBacklog {
    /// Wait for the next queued event.
    ///
    /// Returns `None` once every [`EventQueue`] handle has been dropped and
    /// the buffer is empty.
    pub async fn recv(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Atomically take every event currently buffered, in FIFO order,
    /// without waiting.
    pub fn drain_ready(&mut self) -> Vec<Event> {
        let mut drained = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            drained.push(event);
        }
        drained
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_db::models::event::Event;

    fn test_event(kind: &str) -> Event {
        Event {
            event_id: uuid::Uuid::new_v4(),
            kind: kind.to_string(),
            source_user_id: "u1".to_string(),
            target_user_id: Some("u2".to_string()),
            payload: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn events_are_received_in_enqueue_order() {
        let (queue, mut backlog) = channel(8);

        queue.enqueue(test_event("follow")).await.unwrap();
        queue.enqueue(test_event("message")).await.unwrap();

        assert_eq!(backlog.recv().await.unwrap().kind, "follow");
        assert_eq!(backlog.recv().await.unwrap().kind, "message");
    }

    #[tokio::test]
    async fn drain_ready_takes_the_whole_backlog() {
        let (queue, mut backlog) = channel(8);

        for _ in 0..3 {
            queue.enqueue(test_event("follow")).await.unwrap();
        }

        assert_eq!(backlog.drain_ready().len(), 3);
        // A second drain sees nothing: no event is visible twice.
        assert!(backlog.drain_ready().is_empty());
    }

    #[tokio::test]
    async fn enqueue_fails_once_the_backlog_is_dropped() {
        let (queue, backlog) = channel(8);
        drop(backlog);

        assert!(queue.enqueue(test_event("follow")).await.is_err());
    }

    #[tokio::test]
    async fn recv_ends_when_all_producers_are_gone() {
        let (queue, mut backlog) = channel(8);

        queue.enqueue(test_event("follow")).await.unwrap();
        drop(queue);

        assert!(backlog.recv().await.is_some());
        assert!(backlog.recv().await.is_none());
    }
}
