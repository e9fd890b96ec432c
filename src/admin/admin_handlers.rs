use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::admin_site::{AdminSite, ADMIN_SITE};
use crate::{
    error::Result,
    notification::{
        notification_dto::{
            CreateNotificationRequest, PaginatedResponse, PaginationParams, StatusResponse,
        },
        Notification, UserRef,
    },
    state::AppState,
};

/// Admin site branding and registered record types
#[utoipa::path(
    get,
    path = "/api/admin/site",
    responses(
        (status = 200, description = "Admin site configuration", body = AdminSite),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(("bearer_auth" = []))
)]
pub async fn get_admin_site() -> Json<AdminSite> {
    Json(ADMIN_SITE)
}

/// List every notification (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("limit" = Option<u32>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated notifications", body = NotificationPage),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(("bearer_auth" = []))
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Notification>>> {
    let page = state
        .notification_service
        .list_all(params.page.unwrap_or(1), params.limit.unwrap_or(20))
        .await?;

    Ok(Json(page))
}

/// Send a notification to a user (admin only)
///
/// Delivery is best-effort: an unknown user or an empty message is dropped
/// and the request is still accepted.
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 202, description = "Notification accepted", body = StatusResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(("bearer_auth" = []))
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<StatusResponse>)> {
    payload.validate()?;

    state
        .notification_service
        .create(payload.user.map(UserRef::Unresolved), &payload.message)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(StatusResponse::accepted())))
}
