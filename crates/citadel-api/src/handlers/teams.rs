//! Team handlers
//!
//! Endpoints for team management, team membership, the transfer ledger,
//! and team-scoped invites.

use axum::extract::{Path, Query, State};
use citadel_service::dto::{
    CreateInviteRequest, CreateTeamRequest, RosterResponse, TeamInviteResponse, TeamResponse,
    TeamTransferResponse, UpdateTeamRequest, UserResponse,
};
use citadel_service::services::{InviteService, RosterService, TeamService};
use serde::Deserialize;

use crate::extractors::{AuthUser, TeamIdPath, TeamUserPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Default page size for team listing
const DEFAULT_LIST_LIMIT: i64 = 100;

/// Query parameters for team listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// Create a new team; the creator becomes captain
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.create_team(auth.user_id, request).await?;
    Ok(Created(response))
}

/// List teams
///
/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<ApiJson<Vec<TeamResponse>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let service = TeamService::new(state.service_context());
    let response = service.list_teams(limit).await?;
    Ok(ApiJson(response))
}

/// Get a team by ID
///
/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    path: Path<TeamIdPath>,
) -> ApiResult<ApiJson<TeamResponse>> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    let response = service.get_team(team_id).await?;
    Ok(ApiJson(response))
}

/// Update team settings (captain or admin)
///
/// PATCH /teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateTeamRequest>,
) -> ApiResult<ApiJson<TeamResponse>> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    let response = service.update_team(auth.user_id, team_id, request).await?;
    Ok(ApiJson(response))
}

/// Destroy a team (captain or admin; refused while rosters are active)
///
/// DELETE /teams/{team_id}
pub async fn destroy_team(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamIdPath>,
) -> ApiResult<NoContent> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    service.destroy_team(auth.user_id, team_id).await?;
    Ok(NoContent)
}

/// List a team's players
///
/// GET /teams/{team_id}/players
pub async fn list_players(
    State(state): State<AppState>,
    path: Path<TeamIdPath>,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    let response = service.players(team_id).await?;
    Ok(ApiJson(response))
}

/// Leave the team (any player but the captain)
///
/// DELETE /teams/{team_id}/players/@me
pub async fn leave_team(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamIdPath>,
) -> ApiResult<NoContent> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    service.leave_team(auth.user_id, team_id).await?;
    Ok(NoContent)
}

/// Kick a player off the team (captain or admin)
///
/// DELETE /teams/{team_id}/players/{user_id}
pub async fn kick_player(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamUserPath>,
) -> ApiResult<NoContent> {
    let team_id = path.team_id()?;
    let user_id = path.user_id()?;

    let service = TeamService::new(state.service_context());
    service.kick_player(auth.user_id, team_id, user_id).await?;
    Ok(NoContent)
}

/// List a team's transfer ledger (joins and leaves, newest first)
///
/// GET /teams/{team_id}/transfers
pub async fn list_transfers(
    State(state): State<AppState>,
    path: Path<TeamIdPath>,
) -> ApiResult<ApiJson<Vec<TeamTransferResponse>>> {
    let team_id = path.team_id()?;

    let service = TeamService::new(state.service_context());
    let response = service.transfers(team_id).await?;
    Ok(ApiJson(response))
}

/// List a team's rosters across leagues
///
/// GET /teams/{team_id}/rosters
pub async fn list_rosters(
    State(state): State<AppState>,
    path: Path<TeamIdPath>,
) -> ApiResult<ApiJson<Vec<RosterResponse>>> {
    let team_id = path.team_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.list_by_team(team_id).await?;
    Ok(ApiJson(response))
}

/// Invite a user to the team (captain or admin)
///
/// POST /teams/{team_id}/invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamIdPath>,
    ValidatedJson(request): ValidatedJson<CreateInviteRequest>,
) -> ApiResult<Created<TeamInviteResponse>> {
    let team_id = path.team_id()?;

    let service = InviteService::new(state.service_context());
    let response = service.create_invite(auth.user_id, team_id, request).await?;
    Ok(Created(response))
}

/// List a team's invites (captain or admin)
///
/// GET /teams/{team_id}/invites
pub async fn list_invites(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<TeamIdPath>,
) -> ApiResult<ApiJson<Vec<TeamInviteResponse>>> {
    let team_id = path.team_id()?;

    let service = InviteService::new(state.service_context());
    let response = service.list_team_invites(auth.user_id, team_id).await?;
    Ok(ApiJson(response))
}
