//! Team service
//!
//! Team creation, management, membership, and destruction. Destroying a
//! team is refused while it still holds a non-disbanded roster.

use citadel_core::entities::Team;
use citadel_core::error::DomainError;
use citadel_core::traits::NewTeam;
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{
    CreateTeamRequest, TeamResponse, TeamTransferResponse, UpdateTeamRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::permission::PermissionService;

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team; the creator becomes captain and first player
    #[instrument(skip(self, request))]
    pub async fn create_team(
        &self,
        actor: Id,
        request: CreateTeamRequest,
    ) -> ServiceResult<TeamResponse> {
        // Token identity must exist
        PermissionService::new(self.ctx).actor(actor).await?;

        let team = self
            .ctx
            .team_repo()
            .create(NewTeam {
                name: &request.name,
                description: request.description.as_deref(),
                captain_id: actor,
            })
            .await?;

        info!(team_id = %team.id, captain_id = %actor, "Team created");

        Ok(TeamResponse::from(&team))
    }

    /// Get a team by ID
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: Id) -> ServiceResult<TeamResponse> {
        let team = self.get_entity(team_id).await?;
        Ok(TeamResponse::from(&team))
    }

    /// Get the team entity
    #[instrument(skip(self))]
    pub async fn get_entity(&self, team_id: Id) -> ServiceResult<Team> {
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))
    }

    /// List teams
    #[instrument(skip(self))]
    pub async fn list_teams(&self, limit: i64) -> ServiceResult<Vec<TeamResponse>> {
        let teams = self.ctx.team_repo().find_all(limit).await?;
        Ok(teams.iter().map(TeamResponse::from).collect())
    }

    /// List teams the user plays on
    #[instrument(skip(self))]
    pub async fn list_teams_for_player(&self, user_id: Id) -> ServiceResult<Vec<TeamResponse>> {
        let teams = self.ctx.team_repo().find_by_player(user_id).await?;
        Ok(teams.iter().map(TeamResponse::from).collect())
    }

    /// Update a team (captain or admin)
    #[instrument(skip(self, request))]
    pub async fn update_team(
        &self,
        actor: Id,
        team_id: Id,
        request: UpdateTeamRequest,
    ) -> ServiceResult<TeamResponse> {
        let mut team = self.get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "update this team")
            .await?;

        if let Some(name) = request.name {
            team.name = name;
        }
        if let Some(description) = request.description {
            team.description = Some(description);
        }
        if let Some(notice) = request.notice {
            team.notice = Some(notice);
        }

        self.ctx.team_repo().update(&team).await?;

        info!(team_id = %team.id, "Team updated");

        Ok(TeamResponse::from(&team))
    }

    /// Destroy a team (captain or admin); refused while any non-disbanded
    /// roster remains
    #[instrument(skip(self))]
    pub async fn destroy_team(&self, actor: Id, team_id: Id) -> ServiceResult<()> {
        let team = self.get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "destroy this team")
            .await?;

        if self.ctx.roster_repo().team_has_active_roster(team_id).await? {
            return Err(DomainError::TeamHasActiveRosters.into());
        }

        self.ctx.team_repo().delete(team_id).await?;

        info!(team_id = %team_id, "Team destroyed");

        Ok(())
    }

    /// List a team's players
    #[instrument(skip(self))]
    pub async fn players(&self, team_id: Id) -> ServiceResult<Vec<UserResponse>> {
        self.get_entity(team_id).await?;
        let players = self.ctx.team_repo().players(team_id).await?;
        Ok(players.iter().map(UserResponse::from).collect())
    }

    /// The team's transfer ledger, newest first
    #[instrument(skip(self))]
    pub async fn transfers(&self, team_id: Id) -> ServiceResult<Vec<TeamTransferResponse>> {
        self.get_entity(team_id).await?;
        let transfers = self.ctx.team_repo().transfers(team_id).await?;
        Ok(transfers.iter().map(TeamTransferResponse::from).collect())
    }

    /// Kick a player (captain or admin; never the captain themselves)
    #[instrument(skip(self))]
    pub async fn kick_player(&self, actor: Id, team_id: Id, user_id: Id) -> ServiceResult<()> {
        let team = self.get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "kick players from this team")
            .await?;

        if user_id == team.captain_id {
            return Err(DomainError::CannotRemoveCaptain.into());
        }

        self.ctx.team_repo().remove_player(team_id, user_id).await?;

        info!(team_id = %team_id, user_id = %user_id, "Player kicked from team");

        NotificationService::new(self.ctx)
            .notify(
                user_id,
                &format!("You were removed from the team {}", team.name),
                Some(&format!("/teams/{team_id}")),
            )
            .await;

        Ok(())
    }

    /// Leave a team (any member except the captain)
    #[instrument(skip(self))]
    pub async fn leave_team(&self, actor: Id, team_id: Id) -> ServiceResult<()> {
        let team = self.get_entity(team_id).await?;

        if actor == team.captain_id {
            return Err(DomainError::CannotRemoveCaptain.into());
        }

        self.ctx.team_repo().remove_player(team_id, actor).await?;

        info!(team_id = %team_id, user_id = %actor, "Player left team");

        NotificationService::new(self.ctx)
            .notify(
                team.captain_id,
                &format!("A player left your team {}", team.name),
                Some(&format!("/teams/{team_id}")),
            )
            .await;

        Ok(())
    }
}
