//! Route definitions for the `/events` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// POST / -> create_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(events::create_event))
}
