use axum::async_trait;
use sqlx::PgPool;

use super::notification_models::Notification;
use crate::{error::Result, user::UserId};

/// Persistence for notification records. Bulk operations must run as a
/// single statement so concurrent readers never see a partial update.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, user_id: UserId, message: &str) -> Result<Notification>;

    async fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<Notification>>;

    async fn count_unread(&self, user_id: UserId) -> Result<i64>;

    /// Returns the number of notifications flipped to read.
    async fn mark_all_read(&self, user_id: UserId) -> Result<u64>;

    /// Returns the number of notifications removed.
    async fn delete_all_by_user(&self, user_id: UserId) -> Result<u64>;

    /// Every notification in the system, newest first, with the total count.
    async fn find_page(&self, limit: i64, offset: i64) -> Result<(Vec<Notification>, i64)>;
}

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(&self, user_id: UserId, message: &str) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, message)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(user_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn count_unread(&self, user_id: UserId) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all_by_user(&self, user_id: UserId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<(Vec<Notification>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
            .fetch_one(&self.pool)
            .await?;

        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((notifications, total))
    }
}
