use axum::{extract::State, response::Html};
use serde_json::json;

use super::{render, Context, DASHBOARD_TEMPLATE, LOGIN_TEMPLATE};
use crate::{admin::ADMIN_SITE, error::Result, middleware::AuthUser, state::AppState};

/// Login page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let mut context = Context::new();
    context.insert("site_header".to_string(), json!(ADMIN_SITE.site_header));
    context.insert("site_title".to_string(), json!(ADMIN_SITE.site_title));

    Ok(Html(render(&state.templates, LOGIN_TEMPLATE, &context)?))
}

/// Student dashboard with the unread notification badge.
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Html<String>> {
    let unread_notification_count = state.notification_service.count_unread(user_id).await?;

    let mut context = Context::new();
    context.insert(
        "unread_notification_count".to_string(),
        json!(unread_notification_count),
    );

    Ok(Html(render(&state.templates, DASHBOARD_TEMPLATE, &context)?))
}
