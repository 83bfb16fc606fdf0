//! Handlers for the `/users` resource.
//!
//! The user directory is an auxiliary surface: pipeline event fields
//! reference users by opaque id and are never validated against it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ripple_core::error::CoreError;
use ripple_db::models::user::{CreateUser, User};
use ripple_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users
///
/// Create a user profile. A duplicate `userId` is a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    if draft.user_id.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "userId is required".to_string(),
        )));
    }
    if draft.username.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username is required".to_string(),
        )));
    }

    let user = UserRepo::insert(
        &state.pool,
        &draft.user_id,
        &draft.username,
        draft.email.as_deref(),
        draft.preferences.as_ref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "userId": user.user_id })),
    ))
}

/// GET /users
///
/// List all user profiles.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(users))
}
