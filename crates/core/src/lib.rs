//! Ripple domain types and the notification classifier.
//!
//! This crate holds everything the pipeline shares that does no I/O:
//!
//! - [`types`] — id and timestamp aliases used across the workspace.
//! - [`event`] — event kind / notification status constants and the
//!   typed payloads carried by `like` and `comment` events.
//! - [`classify`] — the pure event-to-notification classifier.
//! - [`error`] — the shared domain error type.

pub mod classify;
pub mod error;
pub mod event;
pub mod types;

pub use classify::{classify, Classification, ClassifyError};
pub use error::CoreError;
