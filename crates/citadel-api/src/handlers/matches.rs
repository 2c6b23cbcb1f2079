//! Match handlers
//!
//! Admin creates matches; reads are public.

use axum::extract::{Path, State};
use citadel_service::dto::{CreateMatchRequest, MatchResponse};
use citadel_service::services::MatchService;

use crate::extractors::{AdminUser, MatchIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Create a match between two rosters of one division, or a bye
///
/// POST /matches
pub async fn create_match(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateMatchRequest>,
) -> ApiResult<Created<MatchResponse>> {
    let service = MatchService::new(state.service_context());
    let response = service.create(admin.user_id, request).await?;
    Ok(Created(response))
}

/// Get a match by ID
///
/// GET /matches/{match_id}
pub async fn get_match(
    State(state): State<AppState>,
    path: Path<MatchIdPath>,
) -> ApiResult<ApiJson<MatchResponse>> {
    let match_id = path.match_id()?;

    let service = MatchService::new(state.service_context());
    let response = service.get_match(match_id).await?;
    Ok(ApiJson(response))
}
