//! Handlers for the `/events` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ripple_db::models::event::CreateEvent;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /events
///
/// Accept a candidate event into the pipeline. Returns 201 with the
/// assigned event id once the event is durably stored and enqueued.
///
/// Acceptance says nothing about the outcome: an event with an unknown
/// `type` is still accepted here and only rejected later by the
/// dispatcher. A missing or empty `type` / `sourceUserId` is a 400.
pub async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let event_id = state.ingester.ingest(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "eventId": event_id })),
    ))
}
