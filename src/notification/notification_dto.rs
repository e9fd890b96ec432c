use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::notification_models::{Notification, RawUserId};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success".to_string() }
    }

    pub fn accepted() -> Self {
        Self { status: "accepted".to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountResponse {
    pub unread_notification_count: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationRequest {
    #[schema(value_type = Object)]
    pub user: Option<RawUserId>,
    #[validate(length(max = 2000))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[aliases(NotificationPage = PaginatedResponse<Notification>)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}
