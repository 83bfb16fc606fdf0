//! Handlers for the `/notifications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ripple_core::error::CoreError;
use ripple_core::types::NotificationId;
use ripple_db::models::notification::{CreateNotification, Notification};
use ripple_db::repositories::NotificationRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /notifications/{userId}
///
/// List a user's notifications, most recent first. An unknown user id is
/// not an error: the result is simply an empty array.
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, &user_id).await?;

    Ok(Json(notifications))
}

/// POST /notifications
///
/// Create a notification directly, bypassing the event pipeline. Used for
/// manual and test injection; the pipeline itself never calls this.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(draft): Json<CreateNotification>,
) -> AppResult<impl IntoResponse> {
    if draft.user_id.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "userId is required".to_string(),
        )));
    }
    if draft.kind.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "type is required".to_string(),
        )));
    }
    if draft.content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "content is required".to_string(),
        )));
    }

    let notification_id = Uuid::new_v4();
    NotificationRepo::insert(
        &state.pool,
        notification_id,
        &draft.user_id,
        &draft.kind,
        &draft.content,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "notificationId": notification_id })),
    ))
}

/// POST /notifications/{id}/read
///
/// Mark a single notification as read. Idempotent: re-marking an
/// already-read notification also returns 204. Unknown ids are a 404.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<NotificationId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, notification_id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id.to_string(),
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
