//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Ids are allocated by the store, so creation
//! methods take a `New*` description and return the stored entity.
//!
//! Lifecycle methods that touch several tables (roster creation with its
//! initial players, the disband cascade, membership changes with their
//! ledger rows, invite acceptance, transfer-request approval) are single
//! operations here precisely because they must be atomic: one call, one
//! transaction.

use async_trait::async_trait;

use crate::entities::{
    Division, League, LeagueStatus, Match, MatchStatus, Notification, Roster, RosterTransfer,
    Team, TeamInvite, TeamTransfer, TransferRequest, User,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields for creating a user
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub admin: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;

    /// Search users by name prefix (for invite autocomplete)
    async fn search_by_name(&self, query: &str, limit: i64) -> RepoResult<Vec<User>>;

    /// Check if a name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: NewUser<'_>) -> RepoResult<User>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// League Repository
// ============================================================================

/// Fields for creating a league
#[derive(Debug, Clone, Copy)]
pub struct NewLeague<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub signuppable: bool,
    pub roster_locked: bool,
    pub matches_submittable: bool,
    pub transfers_require_approval: bool,
    pub forfeit_all_matches_when_roster_disbands: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub status: LeagueStatus,
}

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Find league by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<League>>;

    /// List leagues, optionally including hidden ones
    async fn find_all(&self, include_hidden: bool) -> RepoResult<Vec<League>>;

    /// Find the league owning a division
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Option<League>>;

    /// Find the league owning a roster
    async fn find_by_roster(&self, roster_id: Id) -> RepoResult<Option<League>>;

    /// Create a new league
    async fn create(&self, league: NewLeague<'_>) -> RepoResult<League>;

    /// Update an existing league
    async fn update(&self, league: &League) -> RepoResult<()>;
}

// ============================================================================
// Division Repository
// ============================================================================

/// Fields for creating a division
#[derive(Debug, Clone, Copy)]
pub struct NewDivision<'a> {
    pub league_id: Id,
    pub name: &'a str,
}

#[async_trait]
pub trait DivisionRepository: Send + Sync {
    /// Find division by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Division>>;

    /// List divisions of a league
    async fn find_by_league(&self, league_id: Id) -> RepoResult<Vec<Division>>;

    /// Check if a division name is taken within a league
    async fn name_exists(&self, league_id: Id, name: &str) -> RepoResult<bool>;

    /// Create a new division
    async fn create(&self, division: NewDivision<'_>) -> RepoResult<Division>;
}

// ============================================================================
// Team Repository
// ============================================================================

/// Fields for creating a team
#[derive(Debug, Clone, Copy)]
pub struct NewTeam<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub captain_id: Id,
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find team by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Team>>;

    /// List teams a user currently plays on
    async fn find_by_player(&self, user_id: Id) -> RepoResult<Vec<Team>>;

    /// List all teams
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<Team>>;

    /// Check if a team name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a team; the captain joins as the first player, with a
    /// joining ledger row, in the same transaction
    async fn create(&self, team: NewTeam<'_>) -> RepoResult<Team>;

    /// Update an existing team
    async fn update(&self, team: &Team) -> RepoResult<()>;

    /// Delete a team (callers guard on active rosters first)
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Check if a user is currently on the team
    async fn is_player(&self, team_id: Id, user_id: Id) -> RepoResult<bool>;

    /// List the team's current players
    async fn players(&self, team_id: Id) -> RepoResult<Vec<User>>;

    /// Current player count
    async fn player_count(&self, team_id: Id) -> RepoResult<i64>;

    /// Add a player, appending a joining ledger row atomically
    async fn add_player(&self, team_id: Id, user_id: Id) -> RepoResult<()>;

    /// Remove a player, appending a leaving ledger row atomically
    async fn remove_player(&self, team_id: Id, user_id: Id) -> RepoResult<()>;

    /// The team's transfer ledger, newest first
    async fn transfers(&self, team_id: Id) -> RepoResult<Vec<TeamTransfer>>;
}

// ============================================================================
// Invite Repository
// ============================================================================

/// Fields for creating a team invite
#[derive(Debug, Clone, Copy)]
pub struct NewInvite {
    pub team_id: Id,
    pub user_id: Id,
}

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find invite by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<TeamInvite>>;

    /// Find the pending invite for a user on a team, if any
    async fn find_pending(&self, team_id: Id, user_id: Id) -> RepoResult<Option<TeamInvite>>;

    /// List invites for a team
    async fn find_by_team(&self, team_id: Id) -> RepoResult<Vec<TeamInvite>>;

    /// List pending invites addressed to a user
    async fn find_pending_by_user(&self, user_id: Id) -> RepoResult<Vec<TeamInvite>>;

    /// Create a new invite
    async fn create(&self, invite: NewInvite) -> RepoResult<TeamInvite>;

    /// Accept a pending invite: mark it accepted and add the user to the
    /// team (with a joining ledger row) in one transaction
    async fn accept(&self, id: Id) -> RepoResult<TeamInvite>;

    /// Decline a pending invite
    async fn decline(&self, id: Id) -> RepoResult<TeamInvite>;
}

// ============================================================================
// Roster Repository
// ============================================================================

/// Fields for creating a roster, including its initial player list
#[derive(Debug, Clone, Copy)]
pub struct NewRoster<'a> {
    pub team_id: Id,
    pub division_id: Id,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub players: &'a [Id],
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Find roster by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Roster>>;

    /// List rosters of a division
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Vec<Roster>>;

    /// List rosters of a team
    async fn find_by_team(&self, team_id: Id) -> RepoResult<Vec<Roster>>;

    /// Find a team's roster within a league, if any
    async fn find_by_team_and_league(&self, team_id: Id, league_id: Id)
        -> RepoResult<Option<Roster>>;

    /// Check if a team holds any non-disbanded roster
    async fn team_has_active_roster(&self, team_id: Id) -> RepoResult<bool>;

    /// Check if a roster name is taken within a division
    async fn name_exists_in_division(&self, division_id: Id, name: &str) -> RepoResult<bool>;

    /// Create a roster with its initial players; membership and joining
    /// ledger rows are written in the same transaction
    async fn create(&self, roster: NewRoster<'_>) -> RepoResult<Roster>;

    /// Update an existing roster's attributes and flags
    async fn update(&self, roster: &Roster) -> RepoResult<()>;

    /// Disband a roster: flip the flag, forfeit its matches per the
    /// league policy, and delete its pending transfer requests, all in
    /// one transaction. The disbanded precondition is re-checked inside
    /// the transaction; a raced second call fails with `RosterDisbanded`.
    async fn disband(&self, id: Id) -> RepoResult<()>;

    /// Reverse a disband (admin override); fails with
    /// `RosterNotDisbanded` unless the roster is currently disbanded
    async fn undisband(&self, id: Id) -> RepoResult<()>;

    /// Delete a roster and its dependent rows
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Check if a user is currently on the roster
    async fn is_player(&self, roster_id: Id, user_id: Id) -> RepoResult<bool>;

    /// List the roster's current players
    async fn players(&self, roster_id: Id) -> RepoResult<Vec<User>>;

    /// Add a player, appending a joining ledger row atomically
    async fn add_player(&self, roster_id: Id, user_id: Id) -> RepoResult<()>;

    /// Remove a player, appending a leaving ledger row atomically
    async fn remove_player(&self, roster_id: Id, user_id: Id) -> RepoResult<()>;

    /// The roster's transfer ledger, newest first
    async fn transfers(&self, roster_id: Id) -> RepoResult<Vec<RosterTransfer>>;
}

// ============================================================================
// Match Repository
// ============================================================================

/// Fields for creating a match
#[derive(Debug, Clone, Copy)]
pub struct NewMatch {
    pub division_id: Id,
    pub home_roster_id: Id,
    pub away_roster_id: Option<Id>,
    pub round: i32,
}

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Find match by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Match>>;

    /// List matches a roster plays in (either side)
    async fn find_by_roster(&self, roster_id: Id) -> RepoResult<Vec<Match>>;

    /// List matches of a division
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Vec<Match>>;

    /// Check if a roster has any confirmed match
    async fn has_confirmed_for_roster(&self, roster_id: Id) -> RepoResult<bool>;

    /// Create a new match
    async fn create(&self, game: NewMatch) -> RepoResult<Match>;

    /// Set a match's status (used by result tooling)
    async fn set_status(&self, id: Id, status: MatchStatus) -> RepoResult<()>;
}

// ============================================================================
// Transfer Request Repository
// ============================================================================

/// Fields for creating a transfer request
#[derive(Debug, Clone, Copy)]
pub struct NewTransferRequest {
    pub roster_id: Id,
    pub user_id: Id,
    pub is_joining: bool,
    pub propagate: bool,
}

#[async_trait]
pub trait TransferRequestRepository: Send + Sync {
    /// Find request by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<TransferRequest>>;

    /// List pending requests for a roster
    async fn find_pending_by_roster(&self, roster_id: Id) -> RepoResult<Vec<TransferRequest>>;

    /// List pending requests across a league (admin review queue)
    async fn find_pending_by_league(&self, league_id: Id) -> RepoResult<Vec<TransferRequest>>;

    /// Find the pending request for a user on a roster, if any
    async fn find_pending_for_user(&self, roster_id: Id, user_id: Id)
        -> RepoResult<Option<TransferRequest>>;

    /// Create a pending request
    async fn create(&self, request: NewTransferRequest) -> RepoResult<TransferRequest>;

    /// Create an already-approved request and apply its membership and
    /// ledger effects in one transaction (leagues that waive approval)
    async fn create_resolved(
        &self,
        request: NewTransferRequest,
        approver_id: Id,
    ) -> RepoResult<TransferRequest>;

    /// Approve a pending request: claim it (fails with
    /// `TransferRequestResolved` if a racing approval won), apply the
    /// membership mutation and ledger row, and propagate team
    /// membership when requested, all in one transaction
    async fn approve(&self, id: Id, approver_id: Id) -> RepoResult<TransferRequest>;

    /// Deny a pending request by deleting it
    async fn delete_pending(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

/// Fields for creating a notification
#[derive(Debug, Clone, Copy)]
pub struct NewNotification<'a> {
    pub user_id: Id,
    pub message: &'a str,
    pub link: Option<&'a str>,
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// List a user's notifications, newest first
    async fn find_by_user(&self, user_id: Id, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Create a notification
    async fn create(&self, notification: NewNotification<'_>) -> RepoResult<Notification>;

    /// Mark one of the user's notifications read
    async fn mark_read(&self, id: Id, user_id: Id) -> RepoResult<()>;

    /// Delete all of a user's notifications, returning how many
    async fn clear(&self, user_id: Id) -> RepoResult<u64>;
}
