//! Notification handlers
//!
//! Endpoints for the authenticated user's notification feed.

use axum::extract::{Path, Query, State};
use citadel_service::dto::NotificationResponse;
use citadel_service::services::NotificationService;
use serde::Deserialize;

use crate::extractors::{AuthUser, NotificationIdPath};
use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Default page size for the notification feed
const DEFAULT_LIST_LIMIT: i64 = 50;

/// Query parameters for notification listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// List the authenticated user's notifications, newest first
///
/// GET /users/@me/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<ApiJson<Vec<NotificationResponse>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.user_id, limit).await?;
    Ok(ApiJson(response))
}

/// Mark one notification as read
///
/// POST /users/@me/notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<NotificationIdPath>,
) -> ApiResult<NoContent> {
    let notification_id = path.notification_id()?;

    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.user_id, notification_id).await?;
    Ok(NoContent)
}

/// Delete all of the authenticated user's notifications
///
/// DELETE /users/@me/notifications
pub async fn clear_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.clear(auth.user_id).await?;
    Ok(NoContent)
}
