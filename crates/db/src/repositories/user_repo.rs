//! Repository for the `users` table.
//!
//! The user directory is an external collaborator from the pipeline's
//! point of view: nothing here is consulted during classification or
//! dispatch.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "user_id, username, email, preferences, created_at";

/// CRUD access to the user directory.
pub struct UserRepo;

impl UserRepo {
    /// Create a user, returning the stored row. A duplicate `user_id`
    /// surfaces as a unique-violation database error.
    pub async fn insert(
        pool: &PgPool,
        user_id: &str,
        username: &str,
        email: Option<&str>,
        preferences: Option<&serde_json::Value>,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_id, username, email, preferences) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(username)
            .bind(email)
            .bind(preferences)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single user by id.
    pub async fn get(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by username.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY username");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
