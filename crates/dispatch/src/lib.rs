//! Ripple event pipeline: ingestion, queueing, and dispatch.
//!
//! This crate owns the accepted-event path between the HTTP boundary and
//! the notification store:
//!
//! - [`EventQueue`] / [`EventBacklog`] — bounded FIFO handoff between the
//!   ingester (producer) and the dispatcher (single consumer).
//! - [`EventIngester`] — validates candidate events, appends them to the
//!   event store, then enqueues them for processing.
//! - [`Dispatcher`] — consumer loop that drains the backlog and drives
//!   classification and notification persistence, dead-lettering events
//!   that drop out of the pipeline.

pub mod dispatcher;
pub mod ingest;
pub mod queue;

pub use dispatcher::Dispatcher;
pub use ingest::{EventIngester, IngestError};
pub use queue::{channel, EventBacklog, EventQueue};
