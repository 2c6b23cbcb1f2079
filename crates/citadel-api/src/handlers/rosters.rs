//! Roster handlers
//!
//! Endpoints for the roster lifecycle (signup, approval, disband,
//! undisband, destroy), roster membership, the roster transfer ledger,
//! and roster-scoped transfer requests and matches.

use axum::extract::{Path, State};
use citadel_service::dto::{
    ApproveRosterRequest, CreateRosterRequest, CreateTransferRequest, MatchResponse,
    RosterResponse, RosterTransferResponse, TransferRequestResponse, UpdateRosterRequest,
    UserResponse,
};
use citadel_service::services::{MatchService, RosterService, TransferService};

use crate::extractors::{
    AdminUser, AuthUser, DivisionIdPath, OptionalValidatedJson, RosterIdPath, RosterUserPath,
    ValidatedJson,
};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Sign a roster up for a division (captain or admin)
///
/// POST /rosters
pub async fn create_roster(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRosterRequest>,
) -> ApiResult<Created<RosterResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(response))
}

/// Get a roster by ID
///
/// GET /rosters/{roster_id}
pub async fn get_roster(
    State(state): State<AppState>,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<RosterResponse>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.get_roster(roster_id).await?;
    Ok(ApiJson(response))
}

/// List a division's rosters
///
/// GET /divisions/{division_id}/rosters
pub async fn list_division_rosters(
    State(state): State<AppState>,
    path: Path<DivisionIdPath>,
) -> ApiResult<ApiJson<Vec<RosterResponse>>> {
    let division_id = path.division_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.list_by_division(division_id).await?;
    Ok(ApiJson(response))
}

/// Update roster settings (captain or admin)
///
/// PATCH /rosters/{roster_id}
pub async fn update_roster(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateRosterRequest>,
) -> ApiResult<ApiJson<RosterResponse>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.update(auth.user_id, roster_id, request).await?;
    Ok(ApiJson(response))
}

/// Destroy a roster outright (admin)
///
/// DELETE /rosters/{roster_id}
pub async fn destroy_roster(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<RosterIdPath>,
) -> ApiResult<NoContent> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    service.destroy(admin.user_id, roster_id).await?;
    Ok(NoContent)
}

/// Approve a pending roster, optionally adjusting it (admin)
///
/// POST /rosters/{roster_id}/approve
pub async fn approve_roster(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<RosterIdPath>,
    OptionalValidatedJson(request): OptionalValidatedJson<ApproveRosterRequest>,
) -> ApiResult<ApiJson<RosterResponse>> {
    let roster_id = path.roster_id()?;
    let request = request.unwrap_or_default();

    let service = RosterService::new(state.service_context());
    let response = service.approve(admin.user_id, roster_id, request).await?;
    Ok(ApiJson(response))
}

/// Disband a roster (captain or admin); cascades per league policy
///
/// POST /rosters/{roster_id}/disband
pub async fn disband_roster(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<RosterResponse>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.disband(auth.user_id, roster_id).await?;
    Ok(ApiJson(response))
}

/// Reinstate a disbanded roster (admin); forfeits are not undone
///
/// POST /rosters/{roster_id}/undisband
pub async fn undisband_roster(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<RosterResponse>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.undisband(admin.user_id, roster_id).await?;
    Ok(ApiJson(response))
}

/// List a roster's players
///
/// GET /rosters/{roster_id}/players
pub async fn list_players(
    State(state): State<AppState>,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.players(roster_id).await?;
    Ok(ApiJson(response))
}

/// Add a team player to the roster directly (captain or admin)
///
/// PUT /rosters/{roster_id}/players/{user_id}
pub async fn add_player(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterUserPath>,
) -> ApiResult<NoContent> {
    let roster_id = path.roster_id()?;
    let user_id = path.user_id()?;

    let service = RosterService::new(state.service_context());
    service.add_player(auth.user_id, roster_id, user_id).await?;
    Ok(NoContent)
}

/// Remove a player from the roster directly (captain or admin)
///
/// DELETE /rosters/{roster_id}/players/{user_id}
pub async fn remove_player(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterUserPath>,
) -> ApiResult<NoContent> {
    let roster_id = path.roster_id()?;
    let user_id = path.user_id()?;

    let service = RosterService::new(state.service_context());
    service.remove_player(auth.user_id, roster_id, user_id).await?;
    Ok(NoContent)
}

/// List a roster's transfer ledger (joins and leaves, newest first)
///
/// GET /rosters/{roster_id}/transfers
pub async fn list_transfers(
    State(state): State<AppState>,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<Vec<RosterTransferResponse>>> {
    let roster_id = path.roster_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.transfers(roster_id).await?;
    Ok(ApiJson(response))
}

/// List matches the roster plays in
///
/// GET /rosters/{roster_id}/matches
pub async fn list_matches(
    State(state): State<AppState>,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<Vec<MatchResponse>>> {
    let roster_id = path.roster_id()?;

    let service = MatchService::new(state.service_context());
    let response = service.list_by_roster(roster_id).await?;
    Ok(ApiJson(response))
}

/// List matches of a division
///
/// GET /divisions/{division_id}/matches
pub async fn list_division_matches(
    State(state): State<AppState>,
    path: Path<DivisionIdPath>,
) -> ApiResult<ApiJson<Vec<MatchResponse>>> {
    let division_id = path.division_id()?;

    let service = MatchService::new(state.service_context());
    let response = service.list_by_division(division_id).await?;
    Ok(ApiJson(response))
}

/// File a transfer request for the roster (captain or admin)
///
/// POST /rosters/{roster_id}/transfer-requests
pub async fn create_transfer_request(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterIdPath>,
    ValidatedJson(request): ValidatedJson<CreateTransferRequest>,
) -> ApiResult<Created<TransferRequestResponse>> {
    let roster_id = path.roster_id()?;

    let service = TransferService::new(state.service_context());
    let response = service.create(auth.user_id, roster_id, request).await?;
    Ok(Created(response))
}

/// List pending transfer requests for the roster (captain or admin)
///
/// GET /rosters/{roster_id}/transfer-requests
pub async fn list_transfer_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<RosterIdPath>,
) -> ApiResult<ApiJson<Vec<TransferRequestResponse>>> {
    let roster_id = path.roster_id()?;

    let service = TransferService::new(state.service_context());
    let response = service.list_pending_by_roster(auth.user_id, roster_id).await?;
    Ok(ApiJson(response))
}
