//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use anyhow::Result;
use integration_tests::{
    assert_error_code, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Setup helpers
// ============================================================================

/// Seed a captain, create a team for them, and return both
async fn setup_team(server: &TestServer) -> Result<(String, TeamBody)> {
    let (_, token) = server
        .seed_user(&format!("captain{}", unique_suffix()), false)
        .await?;

    let response = server
        .post_auth("/api/v1/teams", &token, &CreateTeamReq::unique())
        .await?;
    let team: TeamBody = assert_json(response, StatusCode::CREATED).await?;

    Ok((token, team))
}

/// Create a league and one division as the given admin
async fn setup_league(
    server: &TestServer,
    admin_token: &str,
    request: &CreateLeagueReq,
) -> Result<(LeagueBody, DivisionBody)> {
    let response = server.post_auth("/api/v1/leagues", admin_token, request).await?;
    let league: LeagueBody = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            &format!("/api/v1/leagues/{}/divisions", league.id),
            admin_token,
            &CreateDivisionReq::unique(),
        )
        .await?;
    let division: DivisionBody = assert_json(response, StatusCode::CREATED).await?;

    Ok((league, division))
}

/// Invite a fresh user onto the team and accept the invite
async fn add_team_member(
    server: &TestServer,
    captain_token: &str,
    team: &TeamBody,
) -> Result<(i64, String)> {
    let (user_id, token) = server
        .seed_user(&format!("player{}", unique_suffix()), false)
        .await?;
    let raw_id: i64 = user_id.to_string().parse()?;

    let response = server
        .post_auth(
            &format!("/api/v1/teams/{}/invites", team.id),
            captain_token,
            &CreateInviteReq { user_id: raw_id },
        )
        .await?;
    let invite: InviteBody = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth_empty(&format!("/api/v1/invites/{}/accept", invite.id), &token)
        .await?;
    assert_json::<InviteBody>(response, StatusCode::OK).await?;

    Ok((raw_id, token))
}

/// Create an approved single-player roster for the captain's team
async fn setup_approved_roster(
    server: &TestServer,
    admin_token: &str,
    captain_token: &str,
    team: &TeamBody,
    division: &DivisionBody,
) -> Result<RosterBody> {
    let team_id: i64 = team.id.parse()?;
    let division_id: i64 = division.id.parse()?;
    let captain_id: i64 = team.captain_id.parse()?;

    let response = server
        .post_auth(
            "/api/v1/rosters",
            captain_token,
            &CreateRosterReq::new(team_id, division_id, vec![captain_id]),
        )
        .await?;
    let roster: RosterBody = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/approve", roster.id), admin_token)
        .await?;
    let approved: RosterBody = assert_json(response, StatusCode::OK).await?;

    Ok(approved)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User / Identity Tests
// ============================================================================

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_and_user_lookup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = format!("lookup{}", unique_suffix());
    let (user_id, token) = server.seed_user(&name, false).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.name, name);
    assert!(!me.admin);

    let response = server
        .get_auth(&format!("/api/v1/users/{user_id}"), &token)
        .await
        .unwrap();
    let user: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, user_id.to_string());
}

#[tokio::test]
async fn test_user_search_by_prefix() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = format!("searchable{}", unique_suffix());
    let (_, token) = server.seed_user(&name, false).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/users?query={}", &name[..10]), &token)
        .await
        .unwrap();
    let users: Vec<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.name == name));
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_create_team_captain_joins() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, team) = setup_team(&server).await.unwrap();

    // Captain is a player from the start
    let response = server
        .get_auth(&format!("/api/v1/teams/{}/players", team.id), &token)
        .await
        .unwrap();
    let players: Vec<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, team.captain_id);

    // And the team shows up under /users/@me/teams
    let response = server.get_auth("/api/v1/users/@me/teams", &token).await.unwrap();
    let teams: Vec<TeamBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(teams.iter().any(|t| t.id == team.id));

    // The joining is recorded in the ledger
    let response = server
        .get_auth(&format!("/api/v1/teams/{}/transfers", team.id), &token)
        .await
        .unwrap();
    let ledger: Vec<TransferBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ledger.len(), 1);
    assert!(ledger[0].is_joining);
}

#[tokio::test]
async fn test_duplicate_team_name_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, team) = setup_team(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/teams",
            &token,
            &CreateTeamReq {
                name: team.name.clone(),
                description: None,
            },
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "TEAM_NAME_TAKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_team_requires_captain() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, team) = setup_team(&server).await.unwrap();
    let (_, outsider_token) = server
        .seed_user(&format!("outsider{}", unique_suffix()), false)
        .await
        .unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/teams/{}", team.id),
            &outsider_token,
            &json!({ "notice": "scrims tonight" }),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "PERMISSION_DENIED")
        .await
        .unwrap();
}

// ============================================================================
// Invite Tests
// ============================================================================

#[tokio::test]
async fn test_invite_accept_joins_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (user_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/teams/{}/players", team.id), &captain_token)
        .await
        .unwrap();
    let players: Vec<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(players.iter().any(|p| p.id == user_id.to_string()));
}

#[tokio::test]
async fn test_invite_is_single_use() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (user_id, user_token) = server
        .seed_user(&format!("invitee{}", unique_suffix()), false)
        .await
        .unwrap();
    let raw_id: i64 = user_id.to_string().parse().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/teams/{}/invites", team.id),
            &captain_token,
            &CreateInviteReq { user_id: raw_id },
        )
        .await
        .unwrap();
    let invite: InviteBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(invite.status, "pending");

    let response = server
        .post_auth_empty(&format!("/api/v1/invites/{}/decline", invite.id), &user_token)
        .await
        .unwrap();
    let declined: InviteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(declined.status, "declined");

    // A declined invite can no longer be accepted
    let response = server
        .post_auth_empty(&format!("/api/v1/invites/{}/accept", invite.id), &user_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "INVITE_RESOLVED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invite_only_addressee_can_accept() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (user_id, _) = server
        .seed_user(&format!("invitee{}", unique_suffix()), false)
        .await
        .unwrap();
    let (_, interloper_token) = server
        .seed_user(&format!("interloper{}", unique_suffix()), false)
        .await
        .unwrap();
    let raw_id: i64 = user_id.to_string().parse().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/teams/{}/invites", team.id),
            &captain_token,
            &CreateInviteReq { user_id: raw_id },
        )
        .await
        .unwrap();
    let invite: InviteBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/invites/{}/accept", invite.id), &interloper_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// League Tests
// ============================================================================

#[tokio::test]
async fn test_league_creation_is_admin_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user_token) = server
        .seed_user(&format!("user{}", unique_suffix()), false)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/leagues", &user_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "PERMISSION_DENIED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_hidden_league_visibility() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();

    let request = CreateLeagueReq::unique(1, 5).hidden();
    let response = server.post_auth("/api/v1/leagues", &admin_token, &request).await.unwrap();
    let league: LeagueBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(league.status, "hidden");

    // Anonymous viewers see neither the listing entry nor the league
    let response = server.get("/api/v1/leagues").await.unwrap();
    let leagues: Vec<LeagueBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!leagues.iter().any(|l| l.id == league.id));

    let response = server.get(&format!("/api/v1/leagues/{}", league.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Admins see it
    let response = server.get_auth("/api/v1/leagues", &admin_token).await.unwrap();
    let leagues: Vec<LeagueBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(leagues.iter().any(|l| l.id == league.id));
}

// ============================================================================
// Roster Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_roster_signup_and_approval() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    let team_id: i64 = team.id.parse().unwrap();
    let division_id: i64 = division.id.parse().unwrap();
    let captain_id: i64 = team.captain_id.parse().unwrap();

    let response = server
        .post_auth(
            "/api/v1/rosters",
            &captain_token,
            &CreateRosterReq::new(team_id, division_id, vec![captain_id]),
        )
        .await
        .unwrap();
    let roster: RosterBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!roster.approved);
    assert!(!roster.disbanded);
    assert_eq!(roster.player_count, 1);

    // Approval is admin-only
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/approve", roster.id), &captain_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/approve", roster.id), &admin_token)
        .await
        .unwrap();
    let approved: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(approved.approved);

    // Visible in the division listing
    let response = server
        .get(&format!("/api/v1/divisions/{}/rosters", division.id))
        .await
        .unwrap();
    let rosters: Vec<RosterBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rosters.iter().any(|r| r.id == roster.id));
}

#[tokio::test]
async fn test_roster_signup_rejected_when_closed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(
        &server,
        &admin_token,
        &CreateLeagueReq::unique(1, 5).signups_closed(),
    )
    .await
    .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/rosters",
            &captain_token,
            &CreateRosterReq::new(
                team.id.parse().unwrap(),
                division.id.parse().unwrap(),
                vec![team.captain_id.parse().unwrap()],
            ),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "SIGNUPS_CLOSED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_one_roster_per_team_per_league() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (league, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    // Second division in the same league
    let response = server
        .post_auth(
            &format!("/api/v1/leagues/{}/divisions", league.id),
            &admin_token,
            &CreateDivisionReq::unique(),
        )
        .await
        .unwrap();
    let second_division: DivisionBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let team_id: i64 = team.id.parse().unwrap();
    let captain_id: i64 = team.captain_id.parse().unwrap();

    let response = server
        .post_auth(
            "/api/v1/rosters",
            &captain_token,
            &CreateRosterReq::new(team_id, division.id.parse().unwrap(), vec![captain_id]),
        )
        .await
        .unwrap();
    assert_json::<RosterBody>(response, StatusCode::CREATED).await.unwrap();

    // Same team cannot enter the league again, even in another division
    let response = server
        .post_auth(
            "/api/v1/rosters",
            &captain_token,
            &CreateRosterReq::new(team_id, second_division.id.parse().unwrap(), vec![captain_id]),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "TEAM_ALREADY_ROSTERED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_roster_player_management() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    // Add the team member to the roster
    let response = server
        .put_auth_empty(
            &format!("/api/v1/rosters/{}/players/{member_id}", roster.id),
            &captain_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/rosters/{}", roster.id))
        .await
        .unwrap();
    let updated: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.player_count, 2);

    // The ledger has both joins
    let response = server
        .get(&format!("/api/v1/rosters/{}/transfers", roster.id))
        .await
        .unwrap();
    let ledger: Vec<TransferBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ledger.len(), 2);

    // Remove them again
    let response = server
        .delete_auth(
            &format!("/api/v1/rosters/{}/players/{member_id}", roster.id),
            &captain_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/rosters/{}/transfers", roster.id))
        .await
        .unwrap();
    let ledger: Vec<TransferBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ledger.len(), 3);
}

#[tokio::test]
async fn test_roster_competitive_attributes_are_admin_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    // The captain may reword the description
    let response = server
        .patch_auth(
            &format!("/api/v1/rosters/{}", roster.id),
            &captain_token,
            &json!({ "description": "updated blurb" }),
        )
        .await
        .unwrap();
    assert_json::<RosterBody>(response, StatusCode::OK).await.unwrap();

    // But not set the ranking
    let response = server
        .patch_auth(
            &format!("/api/v1/rosters/{}", roster.id),
            &captain_token,
            &json!({ "ranking": 1 }),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "PERMISSION_DENIED")
        .await
        .unwrap();

    // Admins set it freely
    let response = server
        .patch_auth(
            &format!("/api/v1/rosters/{}", roster.id),
            &admin_token,
            &json!({ "ranking": 1 }),
        )
        .await
        .unwrap();
    assert_json::<RosterBody>(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_roster_min_size_enforced_on_removal() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    // Removing the last player would leave the roster below minimum
    let response = server
        .delete_auth(
            &format!("/api/v1/rosters/{}/players/{}", roster.id, team.captain_id),
            &captain_token,
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "PLAYER_COUNT_OUT_OF_BOUNDS")
        .await
        .unwrap();
}

// ============================================================================
// Transfer Request Tests
// ============================================================================

#[tokio::test]
async fn test_transfer_request_approval_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (league, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    // Captain files a joining request
    let response = server
        .post_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
            &CreateTransferReq {
                user_id: member_id,
                is_joining: true,
                propagate: false,
            },
        )
        .await
        .unwrap();
    let request: TransferRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(request.approved_by.is_none());

    // Visible in the league review queue
    let response = server
        .get_auth(
            &format!("/api/v1/leagues/{}/transfer-requests", league.id),
            &admin_token,
        )
        .await
        .unwrap();
    let queue: Vec<TransferRequestBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(queue.iter().any(|r| r.id == request.id));

    // Admin approves; the membership change lands
    let response = server
        .post_auth_empty(
            &format!("/api/v1/transfer-requests/{}/approve", request.id),
            &admin_token,
        )
        .await
        .unwrap();
    let approved: TransferRequestBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(approved.approved_by.is_some());

    let response = server
        .get(&format!("/api/v1/rosters/{}", roster.id))
        .await
        .unwrap();
    let updated: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.player_count, 2);

    // A second approve loses the race that already finished
    let response = server
        .post_auth_empty(
            &format!("/api/v1/transfer-requests/{}/approve", request.id),
            &admin_token,
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "TRANSFER_REQUEST_RESOLVED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_transfer_executes_immediately_without_approval() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(
        &server,
        &admin_token,
        &CreateLeagueReq::unique(1, 5).without_transfer_approval(),
    )
    .await
    .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
            &CreateTransferReq {
                user_id: member_id,
                is_joining: true,
                propagate: false,
            },
        )
        .await
        .unwrap();
    let request: TransferRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(request.approved_by.is_some());

    let response = server
        .get(&format!("/api/v1/rosters/{}", roster.id))
        .await
        .unwrap();
    let updated: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.player_count, 2);
}

#[tokio::test]
async fn test_transfer_deny_deletes_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
            &CreateTransferReq {
                user_id: member_id,
                is_joining: true,
                propagate: false,
            },
        )
        .await
        .unwrap();
    let request: TransferRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/transfer-requests/{}/deny", request.id),
            &admin_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The denial left no trace; membership unchanged
    let response = server
        .get_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
        )
        .await
        .unwrap();
    let pending: Vec<TransferRequestBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());

    let response = server
        .get(&format!("/api/v1/rosters/{}", roster.id))
        .await
        .unwrap();
    let unchanged: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.player_count, 1);
}

#[tokio::test]
async fn test_transfer_rejected_when_rosters_locked() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (league, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/leagues/{}", league.id),
            &admin_token,
            &json!({ "roster_locked": true }),
        )
        .await
        .unwrap();
    assert_json::<LeagueBody>(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
            &CreateTransferReq {
                user_id: member_id,
                is_joining: true,
                propagate: false,
            },
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "ROSTERS_LOCKED")
        .await
        .unwrap();
}

// ============================================================================
// Disband Cascade Tests
// ============================================================================

#[tokio::test]
async fn test_disband_cascade() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (member_id, _) = add_team_member(&server, &captain_token, &team).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    // Schedule a bye match for the roster
    let response = server
        .post_auth(
            "/api/v1/matches",
            &admin_token,
            &CreateMatchReq {
                division_id: division.id.parse().unwrap(),
                home_roster_id: roster.id.parse().unwrap(),
                away_roster_id: None,
                round: 1,
            },
        )
        .await
        .unwrap();
    let game: MatchBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(game.forfeit_by, "no_forfeit");

    // Leave a pending transfer request behind
    let response = server
        .post_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
            &CreateTransferReq {
                user_id: member_id,
                is_joining: true,
                propagate: false,
            },
        )
        .await
        .unwrap();
    assert_json::<TransferRequestBody>(response, StatusCode::CREATED).await.unwrap();

    // Outsiders cannot disband
    let (_, outsider_token) = server
        .seed_user(&format!("outsider{}", unique_suffix()), false)
        .await
        .unwrap();
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/disband", roster.id), &outsider_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Captain disbands
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/disband", roster.id), &captain_token)
        .await
        .unwrap();
    let disbanded: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(disbanded.disbanded);

    // The scheduled match was forfeited
    let response = server
        .get(&format!("/api/v1/matches/{}", game.id))
        .await
        .unwrap();
    let forfeited: MatchBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(forfeited.forfeit_by, "home_team_forfeit");

    // The pending transfer request is gone
    let response = server
        .get_auth(
            &format!("/api/v1/rosters/{}/transfer-requests", roster.id),
            &captain_token,
        )
        .await
        .unwrap();
    let pending: Vec<TransferRequestBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());

    // Disbanding is one-shot
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/disband", roster.id), &captain_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "ROSTER_DISBANDED")
        .await
        .unwrap();

    // Admin reinstates; forfeits stay
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/undisband", roster.id), &admin_token)
        .await
        .unwrap();
    let reinstated: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!reinstated.disbanded);

    let response = server
        .get(&format!("/api/v1/matches/{}", game.id))
        .await
        .unwrap();
    let still_forfeited: MatchBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(still_forfeited.forfeit_by, "home_team_forfeit");
}

#[tokio::test]
async fn test_destroy_team_blocked_by_active_roster() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (captain_token, team) = setup_team(&server).await.unwrap();

    let roster = setup_approved_roster(&server, &admin_token, &captain_token, &team, &division)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/teams/{}", team.id), &captain_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "TEAM_HAS_ACTIVE_ROSTERS")
        .await
        .unwrap();

    // After disbanding the roster the team can go
    let response = server
        .post_auth_empty(&format!("/api/v1/rosters/{}/disband", roster.id), &captain_token)
        .await
        .unwrap();
    assert_json::<RosterBody>(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/teams/{}", team.id), &captain_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Match Tests
// ============================================================================

#[tokio::test]
async fn test_match_rosters_must_share_division() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = server
        .seed_user(&format!("admin{}", unique_suffix()), true)
        .await
        .unwrap();
    let (_, division_a) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();
    let (_, division_b) = setup_league(&server, &admin_token, &CreateLeagueReq::unique(1, 5))
        .await
        .unwrap();

    let (captain_a, team_a) = setup_team(&server).await.unwrap();
    let (captain_b, team_b) = setup_team(&server).await.unwrap();
    let roster_a = setup_approved_roster(&server, &admin_token, &captain_a, &team_a, &division_a)
        .await
        .unwrap();
    let roster_b = setup_approved_roster(&server, &admin_token, &captain_b, &team_b, &division_b)
        .await
        .unwrap();

    let response = server
        .post_auth(
            "/api/v1/matches",
            &admin_token,
            &CreateMatchReq {
                division_id: division_a.id.parse().unwrap(),
                home_roster_id: roster_a.id.parse().unwrap(),
                away_roster_id: Some(roster_b.id.parse().unwrap()),
                round: 1,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_notification_feed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (captain_token, team) = setup_team(&server).await.unwrap();
    let (user_id, user_token) = server
        .seed_user(&format!("notified{}", unique_suffix()), false)
        .await
        .unwrap();
    let raw_id: i64 = user_id.to_string().parse().unwrap();

    // An invite produces a notification for the invitee
    let response = server
        .post_auth(
            &format!("/api/v1/teams/{}/invites", team.id),
            &captain_token,
            &CreateInviteReq { user_id: raw_id },
        )
        .await
        .unwrap();
    assert_json::<InviteBody>(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/notifications", &user_token)
        .await
        .unwrap();
    let feed: Vec<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert!(!feed[0].read);

    // Mark it read
    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/@me/notifications/{}/read", feed[0].id),
            &user_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/notifications", &user_token)
        .await
        .unwrap();
    let feed: Vec<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed[0].read);

    // Clear the feed
    let response = server
        .delete_auth("/api/v1/users/@me/notifications", &user_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/notifications", &user_token)
        .await
        .unwrap();
    let feed: Vec<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.is_empty());
}
