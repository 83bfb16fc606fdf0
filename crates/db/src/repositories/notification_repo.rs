//! Repository for the `notifications` table (the NotificationStore).

use ripple_core::types::NotificationId;
use sqlx::PgPool;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "notification_id, seq, user_id, kind, content, status, created_at";

/// Read/write access to per-recipient notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Persist a new notification with status `unread`, returning the
    /// stored row.
    pub async fn insert(
        pool: &PgPool,
        notification_id: NotificationId,
        user_id: &str,
        kind: &str,
        content: &str,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (notification_id, user_id, kind, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(notification_id)
            .bind(user_id)
            .bind(kind)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List all notifications for a user, most recent first.
    ///
    /// Ordered by `created_at` descending; equal timestamps are broken by
    /// insertion order (`seq` ascending). Returns an empty vec when the
    /// user has no notifications.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, seq"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a notification as read.
    ///
    /// Idempotent: marking an already-read notification succeeds. Returns
    /// `false` when the id is unknown.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: NotificationId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET status = 'read' WHERE notification_id = $1",
        )
        .bind(notification_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
