//! User entity model and creation DTO.

use ripple_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: Option<String>,
    pub preferences: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    pub email: Option<String>,
    pub preferences: Option<serde_json::Value>,
}
