use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    #[schema(value_type = i64)]
    pub user_id: UserId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A user identifier as it arrives from outside the service: a JSON number
/// or a string holding one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawUserId {
    Number(i64),
    Text(String),
}

impl RawUserId {
    /// Zero and blank strings count as "no user".
    pub fn is_blank(&self) -> bool {
        match self {
            RawUserId::Number(n) => *n == 0,
            RawUserId::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn as_user_id(&self) -> Option<UserId> {
        match self {
            RawUserId::Number(n) => Some(*n),
            RawUserId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for RawUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawUserId::Number(n) => write!(f, "{}", n),
            RawUserId::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Recipient of a new notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    /// Id of a user already known to exist, typically the authenticated actor.
    Resolved(UserId),
    /// Id still to be looked up in the user store.
    Unresolved(RawUserId),
}

impl UserRef {
    pub fn is_blank(&self) -> bool {
        match self {
            UserRef::Resolved(_) => false,
            UserRef::Unresolved(raw) => raw.is_blank(),
        }
    }
}

impl From<UserId> for UserRef {
    fn from(user_id: UserId) -> Self {
        UserRef::Resolved(user_id)
    }
}

impl From<RawUserId> for UserRef {
    fn from(raw: RawUserId) -> Self {
        UserRef::Unresolved(raw)
    }
}
