//! League and division handlers
//!
//! Endpoints for league administration, public league browsing, and
//! division management. Hidden leagues are only visible to admins.

use axum::extract::{Path, State};
use citadel_service::dto::{
    CreateDivisionRequest, CreateLeagueRequest, DivisionResponse, LeagueResponse,
    TransferRequestResponse, UpdateLeagueRequest,
};
use citadel_service::services::{LeagueService, TransferService};

use crate::extractors::{AdminUser, AuthUser, LeagueIdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// List leagues visible to the caller
///
/// GET /leagues
pub async fn list_leagues(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
) -> ApiResult<ApiJson<Vec<LeagueResponse>>> {
    let service = LeagueService::new(state.service_context());
    let response = service.list(viewer.user_id()).await?;
    Ok(ApiJson(response))
}

/// Create a new league
///
/// POST /leagues
pub async fn create_league(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateLeagueRequest>,
) -> ApiResult<Created<LeagueResponse>> {
    let service = LeagueService::new(state.service_context());
    let response = service.create(admin.user_id, request).await?;
    Ok(Created(response))
}

/// Get a league by ID
///
/// GET /leagues/{league_id}
pub async fn get_league(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    path: Path<LeagueIdPath>,
) -> ApiResult<ApiJson<LeagueResponse>> {
    let league_id = path.league_id()?;

    let service = LeagueService::new(state.service_context());
    let response = service.get(league_id, viewer.user_id()).await?;
    Ok(ApiJson(response))
}

/// Update league settings
///
/// PATCH /leagues/{league_id}
pub async fn update_league(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<LeagueIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateLeagueRequest>,
) -> ApiResult<ApiJson<LeagueResponse>> {
    let league_id = path.league_id()?;

    let service = LeagueService::new(state.service_context());
    let response = service.update(admin.user_id, league_id, request).await?;
    Ok(ApiJson(response))
}

/// Create a division within a league
///
/// POST /leagues/{league_id}/divisions
pub async fn create_division(
    State(state): State<AppState>,
    admin: AdminUser,
    path: Path<LeagueIdPath>,
    ValidatedJson(request): ValidatedJson<CreateDivisionRequest>,
) -> ApiResult<Created<DivisionResponse>> {
    let league_id = path.league_id()?;

    let service = LeagueService::new(state.service_context());
    let response = service.create_division(admin.user_id, league_id, request).await?;
    Ok(Created(response))
}

/// List a league's divisions
///
/// GET /leagues/{league_id}/divisions
pub async fn list_divisions(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    path: Path<LeagueIdPath>,
) -> ApiResult<ApiJson<Vec<DivisionResponse>>> {
    let league_id = path.league_id()?;

    let service = LeagueService::new(state.service_context());
    let response = service.list_divisions(league_id, viewer.user_id()).await?;
    Ok(ApiJson(response))
}

/// List pending transfer requests across a league (admin review queue)
///
/// GET /leagues/{league_id}/transfer-requests
pub async fn list_transfer_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    path: Path<LeagueIdPath>,
) -> ApiResult<ApiJson<Vec<TransferRequestResponse>>> {
    let league_id = path.league_id()?;

    let service = TransferService::new(state.service_context());
    let response = service.list_pending_by_league(auth.user_id, league_id).await?;
    Ok(ApiJson(response))
}
