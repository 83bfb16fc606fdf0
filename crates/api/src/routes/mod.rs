pub mod events;
pub mod health;
pub mod notifications;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root, next to `/health`).
///
/// Route hierarchy:
///
/// ```text
/// POST /events                     ingest an event
///
/// POST /notifications              create a notification directly
/// GET  /notifications/{userId}     list a user's notifications
/// POST /notifications/{id}/read    mark a notification read
///
/// POST /users                      create a user profile
/// GET  /users                      list user profiles
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/notifications", notifications::router())
        .nest("/users", users::router())
}
