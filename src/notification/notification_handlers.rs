use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive},
        Redirect, Sse,
    },
    Json,
};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;

use super::{
    notification_dto::{StatusResponse, UnreadCountResponse},
    notification_models::Notification,
};
use crate::{
    error::{AppError, Result},
    middleware::AuthUser,
    state::AppState,
};

/// Get all notifications for the authenticated user
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "List of notifications", body = Vec<Notification>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Notification>>> {
    let notifications = state.notification_service.list_for_user(user_id).await?;

    Ok(Json(notifications))
}

/// Count unread notifications for the authenticated user
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, description = "Unread notification count", body = UnreadCountResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UnreadCountResponse>> {
    let unread_notification_count = state.notification_service.count_unread(user_id).await?;

    Ok(Json(UnreadCountResponse {
        unread_notification_count,
    }))
}

/// Subscribe to new notifications via Server-Sent Events
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    responses(
        (status = 200, description = "SSE stream of notifications"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn notification_stream(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let rx = state.notification_service.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(move |msg| async move {
        match msg {
            Ok(notification) if notification.user_id == user_id => {
                Event::default().json_data(&notification).ok().map(Ok::<_, Infallible>)
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Notification stream for user {} lagged: {}", user_id, e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Mark every unread notification of the authenticated user as read
#[utoipa::path(
    post,
    path = "/api/notifications/mark-read",
    responses(
        (status = 200, description = "Notifications marked as read", body = StatusResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Method not allowed")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<StatusResponse>> {
    state.notification_service.mark_all_read(user_id).await?;

    Ok(Json(StatusResponse::success()))
}

/// Delete every notification of the authenticated user
#[utoipa::path(
    post,
    path = "/api/notifications/clear",
    responses(
        (status = 200, description = "Notifications cleared", body = StatusResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Method not allowed")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn clear_all_notifications(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<StatusResponse>> {
    state.notification_service.clear_all(user_id).await?;

    Ok(Json(StatusResponse::success()))
}

/// Form-post variant of mark-read that sends the browser back to the dashboard.
pub async fn mark_all_read_and_redirect(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Redirect> {
    state.notification_service.mark_all_read(user_id).await?;

    Ok(Redirect::to("/dashboard"))
}

/// Fallback for the mutating routes when called with any method but POST.
pub async fn method_forbidden() -> AppError {
    AppError::Forbidden("Method not allowed".to_string())
}
