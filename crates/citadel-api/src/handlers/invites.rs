//! Invite handlers
//!
//! Endpoints for the invited user's side of team invites.

use axum::extract::{Path, State};
use citadel_service::dto::TeamInviteResponse;
use citadel_service::services::InviteService;

use crate::extractors::{AuthUser, InviteIdPath};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List pending invites addressed to the authenticated user
///
/// GET /users/@me/invites
pub async fn my_invites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<TeamInviteResponse>>> {
    let service = InviteService::new(state.service_context());
    let response = service.my_invites(auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Accept a pending invite; joins the team atomically
///
/// POST /invites/{invite_id}/accept
pub async fn accept_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<InviteIdPath>,
) -> ApiResult<ApiJson<TeamInviteResponse>> {
    let invite_id = path.invite_id()?;

    let service = InviteService::new(state.service_context());
    let response = service.accept(auth.user_id, invite_id).await?;
    Ok(ApiJson(response))
}

/// Decline a pending invite
///
/// POST /invites/{invite_id}/decline
pub async fn decline_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<InviteIdPath>,
) -> ApiResult<ApiJson<TeamInviteResponse>> {
    let invite_id = path.invite_id()?;

    let service = InviteService::new(state.service_context());
    let response = service.decline(auth.user_id, invite_id).await?;
    Ok(ApiJson(response))
}
