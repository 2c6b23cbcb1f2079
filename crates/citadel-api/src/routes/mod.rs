//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    health, invites, leagues, matches, notifications, rosters, teams, transfer_requests, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (health mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(league_routes())
        .merge(division_routes())
        .merge(team_routes())
        .merge(invite_routes())
        .merge(roster_routes())
        .merge(transfer_request_routes())
        .merge(match_routes())
}

/// User routes (identity, lookup, notifications)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::search_users))
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/teams", get(users::get_current_user_teams))
        .route("/users/@me/invites", get(invites::my_invites))
        .route("/users/@me/notifications", get(notifications::list_notifications))
        .route("/users/@me/notifications", delete(notifications::clear_notifications))
        .route(
            "/users/@me/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
        .route("/users/:user_id", get(users::get_user))
}

/// League routes
fn league_routes() -> Router<AppState> {
    Router::new()
        .route("/leagues", get(leagues::list_leagues))
        .route("/leagues", post(leagues::create_league))
        .route("/leagues/:league_id", get(leagues::get_league))
        .route("/leagues/:league_id", patch(leagues::update_league))
        .route("/leagues/:league_id/divisions", get(leagues::list_divisions))
        .route("/leagues/:league_id/divisions", post(leagues::create_division))
        .route(
            "/leagues/:league_id/transfer-requests",
            get(leagues::list_transfer_requests),
        )
}

/// Division routes (roster and match listings)
fn division_routes() -> Router<AppState> {
    Router::new()
        .route("/divisions/:division_id/rosters", get(rosters::list_division_rosters))
        .route("/divisions/:division_id/matches", get(rosters::list_division_matches))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team))
        .route("/teams", get(teams::list_teams))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id", patch(teams::update_team))
        .route("/teams/:team_id", delete(teams::destroy_team))
        .route("/teams/:team_id/players", get(teams::list_players))
        .route("/teams/:team_id/players/@me", delete(teams::leave_team))
        .route("/teams/:team_id/players/:user_id", delete(teams::kick_player))
        .route("/teams/:team_id/transfers", get(teams::list_transfers))
        .route("/teams/:team_id/rosters", get(teams::list_rosters))
        .route("/teams/:team_id/invites", get(teams::list_invites))
        .route("/teams/:team_id/invites", post(teams::create_invite))
}

/// Invite routes (the invited user's side)
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route("/invites/:invite_id/accept", post(invites::accept_invite))
        .route("/invites/:invite_id/decline", post(invites::decline_invite))
}

/// Roster routes (lifecycle verbs as POST subresources)
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/rosters", post(rosters::create_roster))
        .route("/rosters/:roster_id", get(rosters::get_roster))
        .route("/rosters/:roster_id", patch(rosters::update_roster))
        .route("/rosters/:roster_id", delete(rosters::destroy_roster))
        .route("/rosters/:roster_id/approve", post(rosters::approve_roster))
        .route("/rosters/:roster_id/disband", post(rosters::disband_roster))
        .route("/rosters/:roster_id/undisband", post(rosters::undisband_roster))
        .route("/rosters/:roster_id/players", get(rosters::list_players))
        .route("/rosters/:roster_id/players/:user_id", put(rosters::add_player))
        .route("/rosters/:roster_id/players/:user_id", delete(rosters::remove_player))
        .route("/rosters/:roster_id/transfers", get(rosters::list_transfers))
        .route("/rosters/:roster_id/matches", get(rosters::list_matches))
        .route(
            "/rosters/:roster_id/transfer-requests",
            get(rosters::list_transfer_requests),
        )
        .route(
            "/rosters/:roster_id/transfer-requests",
            post(rosters::create_transfer_request),
        )
}

/// Transfer request resolution routes (admin)
fn transfer_request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transfer-requests/:request_id/approve",
            post(transfer_requests::approve_request),
        )
        .route(
            "/transfer-requests/:request_id/deny",
            post(transfer_requests::deny_request),
        )
}

/// Match routes
fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", post(matches::create_match))
        .route("/matches/:match_id", get(matches::get_match))
}
