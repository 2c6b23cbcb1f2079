//! Roster service
//!
//! The roster lifecycle: league signup, admin approval, membership changes
//! within league bounds, disband with its cascade, undisband, destroy.
//! Permission predicates run here; the atomic multi-table writes live in
//! the repository.

use std::collections::HashSet;

use citadel_core::entities::{League, Roster, Team, User};
use citadel_core::error::DomainError;
use citadel_core::traits::NewRoster;
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{
    ApproveRosterRequest, CreateRosterRequest, RosterResponse, RosterTransferResponse,
    UpdateRosterRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::permission::{is_admin, PermissionService};
use super::team::TeamService;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the roster entity
    #[instrument(skip(self))]
    pub async fn get_entity(&self, roster_id: Id) -> ServiceResult<Roster> {
        self.ctx
            .roster_repo()
            .find_by_id(roster_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Roster", roster_id.to_string()))
    }

    /// The league owning a roster
    async fn owning_league(&self, roster_id: Id) -> ServiceResult<League> {
        self.ctx
            .league_repo()
            .find_by_roster(roster_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Roster", roster_id.to_string()))
    }

    /// Load the roster with its owning team, requiring the actor to manage it
    async fn get_managed(
        &self,
        actor: Id,
        roster_id: Id,
    ) -> ServiceResult<(Roster, Team, User)> {
        let roster = self.get_entity(roster_id).await?;
        let team = TeamService::new(self.ctx).get_entity(roster.team_id).await?;
        let user = PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "manage this roster")
            .await?;
        Ok((roster, team, user))
    }

    /// League signup: create a roster with its initial players (captain
    /// or admin of the team)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Id,
        request: CreateRosterRequest,
    ) -> ServiceResult<RosterResponse> {
        let team_id = Id::new(request.team_id);
        let division_id = Id::new(request.division_id);

        let team = TeamService::new(self.ctx).get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "sign this team up")
            .await?;

        self.ctx
            .division_repo()
            .find_by_id(division_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Division", division_id.to_string()))?;

        let league = self
            .ctx
            .league_repo()
            .find_by_division(division_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Division", division_id.to_string()))?;

        if !league.signuppable || !league.is_running() {
            return Err(DomainError::SignupsClosed.into());
        }

        let players: Vec<Id> = request.players.iter().copied().map(Id::new).collect();

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(*player) {
                return Err(ServiceError::validation("duplicate players in signup"));
            }
            if !self.ctx.team_repo().is_player(team_id, *player).await? {
                return Err(ServiceError::validation(format!(
                    "user {player} is not on the team"
                )));
            }
        }

        let count = players.len() as i64;
        if !league.accepts_player_count(count) {
            return Err(DomainError::PlayerCountOutOfBounds {
                count,
                min: league.min_players,
                max: league.max_players,
            }
            .into());
        }

        let roster = self
            .ctx
            .roster_repo()
            .create(NewRoster {
                team_id,
                division_id,
                name: &request.name,
                description: request.description.as_deref(),
                players: &players,
            })
            .await?;

        info!(roster_id = %roster.id, team_id = %team_id, league_id = %league.id, "Roster created");

        Ok(RosterResponse::from(&roster))
    }

    /// Get a roster by ID
    #[instrument(skip(self))]
    pub async fn get_roster(&self, roster_id: Id) -> ServiceResult<RosterResponse> {
        let roster = self.get_entity(roster_id).await?;
        Ok(RosterResponse::from(&roster))
    }

    /// List rosters of a division
    #[instrument(skip(self))]
    pub async fn list_by_division(&self, division_id: Id) -> ServiceResult<Vec<RosterResponse>> {
        self.ctx
            .division_repo()
            .find_by_id(division_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Division", division_id.to_string()))?;

        let rosters = self.ctx.roster_repo().find_by_division(division_id).await?;
        Ok(rosters.iter().map(RosterResponse::from).collect())
    }

    /// List rosters of a team
    #[instrument(skip(self))]
    pub async fn list_by_team(&self, team_id: Id) -> ServiceResult<Vec<RosterResponse>> {
        TeamService::new(self.ctx).get_entity(team_id).await?;
        let rosters = self.ctx.roster_repo().find_by_team(team_id).await?;
        Ok(rosters.iter().map(RosterResponse::from).collect())
    }

    /// Update roster attributes (captain or admin)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Id,
        roster_id: Id,
        request: UpdateRosterRequest,
    ) -> ServiceResult<RosterResponse> {
        let (mut roster, _team, user) = self.get_managed(actor, roster_id).await?;

        // Captains only get the description; name, notice, ranking, and
        // seeding are admin-set attributes
        if !is_admin(&user)
            && (request.name.is_some()
                || request.notice.is_some()
                || request.ranking.is_some()
                || request.seeding.is_some())
        {
            return Err(ServiceError::permission_denied("edit roster attributes"));
        }

        if let Some(name) = request.name {
            roster.name = name;
        }
        if let Some(description) = request.description {
            roster.description = Some(description);
        }
        if let Some(notice) = request.notice {
            roster.notice = Some(notice);
        }
        if let Some(ranking) = request.ranking {
            roster.ranking = Some(ranking);
        }
        if let Some(seeding) = request.seeding {
            roster.seeding = Some(seeding);
        }

        self.ctx.roster_repo().update(&roster).await?;

        info!(roster_id = %roster.id, "Roster updated");

        Ok(RosterResponse::from(&roster))
    }

    /// Approve a pending roster (admin), optionally adjusting name,
    /// division, and seeding in the same update
    #[instrument(skip(self, request))]
    pub async fn approve(
        &self,
        actor: Id,
        roster_id: Id,
        request: ApproveRosterRequest,
    ) -> ServiceResult<RosterResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "approve rosters")
            .await?;

        let mut roster = self.get_entity(roster_id).await?;
        if roster.disbanded {
            return Err(DomainError::RosterDisbanded.into());
        }
        if roster.approved {
            return Err(DomainError::RosterAlreadyApproved.into());
        }

        if let Some(name) = request.name {
            roster.name = name;
        }
        if let Some(division_id) = request.division_id {
            let division_id = Id::new(division_id);
            self.ctx
                .division_repo()
                .find_by_id(division_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Division", division_id.to_string()))?;
            roster.division_id = division_id;
        }
        if let Some(seeding) = request.seeding {
            roster.seeding = Some(seeding);
        }
        roster.approved = true;

        self.ctx.roster_repo().update(&roster).await?;

        info!(roster_id = %roster.id, "Roster approved");

        Ok(RosterResponse::from(&roster))
    }

    /// Disband a roster (captain or admin): flips the flag, forfeits
    /// matches per league policy, and drops pending transfer requests
    #[instrument(skip(self))]
    pub async fn disband(&self, actor: Id, roster_id: Id) -> ServiceResult<RosterResponse> {
        self.get_managed(actor, roster_id).await?;

        self.ctx.roster_repo().disband(roster_id).await?;

        info!(roster_id = %roster_id, "Roster disbanded");

        let roster = self.get_entity(roster_id).await?;
        Ok(RosterResponse::from(&roster))
    }

    /// Reverse a disband (admin override); forfeited matches and deleted
    /// requests stay as they are
    #[instrument(skip(self))]
    pub async fn undisband(&self, actor: Id, roster_id: Id) -> ServiceResult<RosterResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "undisband rosters")
            .await?;

        self.ctx.roster_repo().undisband(roster_id).await?;

        info!(roster_id = %roster_id, "Roster undisbanded");

        let roster = self.get_entity(roster_id).await?;
        Ok(RosterResponse::from(&roster))
    }

    /// Destroy a roster and its dependent rows (admin)
    #[instrument(skip(self))]
    pub async fn destroy(&self, actor: Id, roster_id: Id) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "destroy rosters")
            .await?;

        self.ctx.roster_repo().delete(roster_id).await?;

        info!(roster_id = %roster_id, "Roster destroyed");

        Ok(())
    }

    /// List a roster's current players
    #[instrument(skip(self))]
    pub async fn players(&self, roster_id: Id) -> ServiceResult<Vec<UserResponse>> {
        self.get_entity(roster_id).await?;
        let players = self.ctx.roster_repo().players(roster_id).await?;
        Ok(players.iter().map(UserResponse::from).collect())
    }

    /// The roster's transfer ledger, newest first
    #[instrument(skip(self))]
    pub async fn transfers(&self, roster_id: Id) -> ServiceResult<Vec<RosterTransferResponse>> {
        self.get_entity(roster_id).await?;
        let transfers = self.ctx.roster_repo().transfers(roster_id).await?;
        Ok(transfers.iter().map(RosterTransferResponse::from).collect())
    }

    /// Add a player (captain or admin); bounded by the league and frozen
    /// while disbanded
    #[instrument(skip(self))]
    pub async fn add_player(&self, actor: Id, roster_id: Id, user_id: Id) -> ServiceResult<()> {
        let (roster, team, _user) = self.get_managed(actor, roster_id).await?;

        if roster.disbanded {
            return Err(DomainError::RosterDisbanded.into());
        }
        if !self.ctx.team_repo().is_player(roster.team_id, user_id).await? {
            return Err(ServiceError::validation(format!(
                "user {user_id} is not on the team"
            )));
        }

        let league = self.owning_league(roster_id).await?;
        let count = roster.player_count + 1;
        if !league.accepts_player_count(count) {
            return Err(DomainError::PlayerCountOutOfBounds {
                count,
                min: league.min_players,
                max: league.max_players,
            }
            .into());
        }

        self.ctx.roster_repo().add_player(roster_id, user_id).await?;

        info!(roster_id = %roster_id, user_id = %user_id, "Player added to roster");

        let notifier = NotificationService::new(self.ctx);
        notifier
            .notify(
                user_id,
                &format!("You were added to the roster {}", roster.name),
                Some(&format!("/rosters/{roster_id}")),
            )
            .await;
        notifier
            .notify(
                team.captain_id,
                &format!("Roster {} gained a player", roster.name),
                Some(&format!("/rosters/{roster_id}")),
            )
            .await;

        Ok(())
    }

    /// Remove a player (captain or admin); bounded by the league and
    /// frozen while disbanded
    #[instrument(skip(self))]
    pub async fn remove_player(&self, actor: Id, roster_id: Id, user_id: Id) -> ServiceResult<()> {
        let (roster, team, _user) = self.get_managed(actor, roster_id).await?;

        if roster.disbanded {
            return Err(DomainError::RosterDisbanded.into());
        }

        let league = self.owning_league(roster_id).await?;
        let count = roster.player_count - 1;
        if !league.accepts_player_count(count) {
            return Err(DomainError::PlayerCountOutOfBounds {
                count,
                min: league.min_players,
                max: league.max_players,
            }
            .into());
        }

        self.ctx.roster_repo().remove_player(roster_id, user_id).await?;

        info!(roster_id = %roster_id, user_id = %user_id, "Player removed from roster");

        let notifier = NotificationService::new(self.ctx);
        notifier
            .notify(
                user_id,
                &format!("You were removed from the roster {}", roster.name),
                Some(&format!("/rosters/{roster_id}")),
            )
            .await;
        notifier
            .notify(
                team.captain_id,
                &format!("Roster {} lost a player", roster.name),
                Some(&format!("/rosters/{roster_id}")),
            )
            .await;

        Ok(())
    }
}
