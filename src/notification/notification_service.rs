use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::{
    notification_dto::PaginatedResponse,
    notification_models::{Notification, UserRef},
    notification_repository::NotificationRepository,
};
use crate::{
    error::Result,
    user::{UserId, UserRepository},
};

/// Business logic for per-user notifications. Every mutation is scoped to a
/// single owner and applied in bulk.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserRepository>,
    notification_tx: broadcast::Sender<Notification>,
}

impl NotificationService {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        users: Arc<dyn UserRepository>,
        notification_tx: broadcast::Sender<Notification>,
    ) -> Self {
        Self {
            notifications,
            users,
            notification_tx,
        }
    }

    /// Best-effort send. A missing user, a blank message or an unknown user
    /// id drops the notification with a log line and returns `Ok(None)`.
    pub async fn create(
        &self,
        user: Option<UserRef>,
        message: &str,
    ) -> Result<Option<Notification>> {
        let user = match user {
            Some(user) if !user.is_blank() => user,
            _ => {
                debug!("Skipping notification without a recipient");
                return Ok(None);
            }
        };

        if message.is_empty() {
            debug!("Skipping empty notification for {:?}", user);
            return Ok(None);
        }

        let Some(user_id) = self.resolve(user).await? else {
            return Ok(None);
        };

        let notification = self.notifications.create(user_id, message).await?;

        // No subscribers is fine.
        let _ = self.notification_tx.send(notification.clone());

        debug!("Created notification {} for user {}", notification.id, user_id);
        Ok(Some(notification))
    }

    async fn resolve(&self, user: UserRef) -> Result<Option<UserId>> {
        let raw = match user {
            UserRef::Resolved(user_id) => return Ok(Some(user_id)),
            UserRef::Unresolved(raw) => raw,
        };

        let Some(user_id) = raw.as_user_id() else {
            warn!("User with ID {} not found for notification", raw);
            return Ok(None);
        };

        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(Some(user.id)),
            None => {
                warn!("User with ID {} not found for notification", raw);
                Ok(None)
            }
        }
    }

    pub async fn count_unread(&self, user_id: UserId) -> Result<i64> {
        self.notifications.count_unread(user_id).await
    }

    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Notification>> {
        self.notifications.find_all_by_user(user_id).await
    }

    pub async fn mark_all_read(&self, user_id: UserId) -> Result<u64> {
        let updated = self.notifications.mark_all_read(user_id).await?;
        info!("Marked {} notifications read for user {}", updated, user_id);
        Ok(updated)
    }

    /// Permanently removes every notification the user owns.
    pub async fn clear_all(&self, user_id: UserId) -> Result<u64> {
        let deleted = self.notifications.delete_all_by_user(user_id).await?;
        info!("Cleared {} notifications for user {}", deleted, user_id);
        Ok(deleted)
    }

    pub async fn list_all(&self, page: u32, limit: u32) -> Result<PaginatedResponse<Notification>> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        let offset = (page as i64 - 1) * limit as i64;

        let (data, total) = self.notifications.find_page(limit as i64, offset).await?;
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
            total_pages,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notification_tx.subscribe()
    }
}
