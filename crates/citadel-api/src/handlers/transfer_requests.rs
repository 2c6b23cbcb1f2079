//! Transfer request resolution handlers
//!
//! Admin endpoints for approving and denying pending transfer requests.

use axum::extract::{Path, State};
use citadel_service::dto::TransferRequestResponse;
use citadel_service::services::TransferService;

use crate::extractors::{AdminUser, RequestIdPath};
use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Approve a pending transfer request; a raced double-approve loses
///
/// POST /transfer-requests/{request_id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<RequestIdPath>,
) -> ApiResult<ApiJson<TransferRequestResponse>> {
    let request_id = path.request_id()?;

    let service = TransferService::new(state.service_context());
    let response = service.approve(admin.user_id, request_id).await?;
    Ok(ApiJson(response))
}

/// Deny a pending transfer request; the row is deleted
///
/// POST /transfer-requests/{request_id}/deny
pub async fn deny_request(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<RequestIdPath>,
) -> ApiResult<NoContent> {
    let request_id = path.request_id()?;

    let service = TransferService::new(state.service_context());
    service.deny(admin.user_id, request_id).await?;
    Ok(NoContent)
}
