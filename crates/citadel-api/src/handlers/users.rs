//! User handlers
//!
//! Endpoints for token identity, user lookup, and name-prefix search.

use axum::extract::{Path, Query, State};
use citadel_service::dto::{TeamResponse, UserResponse};
use citadel_service::services::{TeamService, UserService};
use serde::Deserialize;

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Default result count for user search
const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Upper bound on user search results per request
const MAX_SEARCH_LIMIT: i64 = 100;

/// Query parameters for user search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub limit: Option<i64>,
}

/// Get the authenticated user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Get a user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: Path<UserIdPath>,
) -> ApiResult<ApiJson<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(ApiJson(response))
}

/// Search users by name prefix (invite autocomplete)
///
/// GET /users?query=...
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(ApiError::invalid_query(format!(
            "limit must be between 1 and {MAX_SEARCH_LIMIT}"
        )));
    }

    let service = UserService::new(state.service_context());
    let response = service.search(&params.query, limit).await?;
    Ok(ApiJson(response))
}

/// List teams the authenticated user plays on
///
/// GET /users/@me/teams
pub async fn get_current_user_teams(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<TeamResponse>>> {
    let service = TeamService::new(state.service_context());
    let response = service.list_teams_for_player(auth.user_id).await?;
    Ok(ApiJson(response))
}
