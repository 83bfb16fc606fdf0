//! Route definitions for the `/notifications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST /            -> create_notification
/// GET  /{id}        -> list_notifications  ({id} is a user id)
/// POST /{id}/read   -> mark_read           ({id} is a notification id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notifications::create_notification))
        .route("/{id}", get(notifications::list_notifications))
        .route("/{id}/read", post(notifications::mark_read))
}
