use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    error::{AppError, Result},
    middleware::AuthUser,
    state::AppState,
};

/// Lets the request through only when the actor's current role is admin.
/// The role is read from the user store on every request so revocations take
/// effect immediately.
pub async fn admin_authorization(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    request: Request,
    next: Next,
) -> Result<Response> {
    let user = state
        .user_repository
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::Unauthorized("Unknown user".to_string()))?;

    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}
