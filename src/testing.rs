//! In-memory stores and fixtures shared by the unit tests.

use std::sync::{Arc, Mutex};

use axum::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    auth::Claims,
    error::Result,
    notification::{Notification, NotificationRepository, NotificationService},
    state::{AppState, Config},
    user::{User, UserId, UserRepository},
    views,
};

pub const STUDENT_ID: UserId = 1;
pub const OTHER_ID: UserId = 2;
pub const ADMIN_ID: UserId = 3;
pub const JWT_SECRET: &str = "test-secret";

pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn seeded() -> Self {
        let user = |id: UserId, username: &str, role: &str| User {
            id,
            username: username.to_string(),
            email: format!("{}@school.test", username),
            role: role.to_string(),
            created_at: Utc::now(),
        };

        Self {
            users: vec![
                user(STUDENT_ID, "student", "student"),
                user(OTHER_ID, "classmate", "student"),
                user(ADMIN_ID, "principal", "admin"),
            ],
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    rows: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn all(&self) -> Vec<Notification> {
        self.rows.lock().unwrap().clone()
    }

    pub fn set_read(&self, user_id: UserId, message: &str) {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut().filter(|n| n.user_id == user_id && n.message == message) {
            row.is_read = true;
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, user_id: UserId, message: &str) -> Result<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id,
            message: message.to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<Notification>> {
        let mut found: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn count_unread(&self, user_id: UserId) -> Result<i64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|n| n.user_id == user_id && !n.is_read).count() as i64)
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for row in rows.iter_mut().filter(|n| n.user_id == user_id && !n.is_read) {
            row.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete_all_by_user(&self, user_id: UserId) -> Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<(Vec<Notification>, i64)> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = rows.len() as i64;
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

pub fn test_service() -> (NotificationService, Arc<InMemoryNotificationRepository>) {
    let store = Arc::new(InMemoryNotificationRepository::default());
    let (notification_tx, _) = broadcast::channel(16);
    let service = NotificationService::new(
        store.clone(),
        Arc::new(InMemoryUserRepository::seeded()),
        notification_tx,
    );
    (service, store)
}

pub fn test_state() -> (AppState, Arc<InMemoryNotificationRepository>) {
    let (notification_service, store) = test_service();
    let config = Config {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        jwt_secret: JWT_SECRET.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let state = AppState {
        config: Arc::new(config),
        user_repository: Arc::new(InMemoryUserRepository::seeded()),
        notification_service,
        templates: Arc::new(views::create_registry().unwrap()),
    };
    (state, store)
}

pub fn bearer(user_id: UserId) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + chrono::Duration::minutes(15)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}
