//! Team invite service
//!
//! Captains invite users; the invited user accepts (joining the team
//! atomically with the invite being marked accepted) or declines.

use citadel_core::error::DomainError;
use citadel_core::traits::NewInvite;
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{CreateInviteRequest, TeamInviteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::permission::PermissionService;
use super::team::TeamService;

/// Invite service
pub struct InviteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InviteService<'a> {
    /// Create a new InviteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Invite a user to a team (captain or admin)
    #[instrument(skip(self, request))]
    pub async fn create_invite(
        &self,
        actor: Id,
        team_id: Id,
        request: CreateInviteRequest,
    ) -> ServiceResult<TeamInviteResponse> {
        let team = TeamService::new(self.ctx).get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "invite players to this team")
            .await?;

        let user_id = Id::new(request.user_id);
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if self.ctx.team_repo().is_player(team_id, user_id).await? {
            return Err(DomainError::AlreadyOnTeam.into());
        }

        let invite = self
            .ctx
            .invite_repo()
            .create(NewInvite { team_id, user_id })
            .await?;

        info!(invite_id = %invite.id, team_id = %team_id, user_id = %user_id, "Invite created");

        NotificationService::new(self.ctx)
            .notify(
                user.id,
                &format!("You have been invited to join the team {}", team.name),
                Some(&format!("/teams/{team_id}")),
            )
            .await;

        Ok(TeamInviteResponse::from(&invite))
    }

    /// List a team's invites (captain or admin)
    #[instrument(skip(self))]
    pub async fn list_team_invites(
        &self,
        actor: Id,
        team_id: Id,
    ) -> ServiceResult<Vec<TeamInviteResponse>> {
        let team = TeamService::new(self.ctx).get_entity(team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "view this team's invites")
            .await?;

        let invites = self.ctx.invite_repo().find_by_team(team_id).await?;
        Ok(invites.iter().map(TeamInviteResponse::from).collect())
    }

    /// List pending invites addressed to the acting user
    #[instrument(skip(self))]
    pub async fn my_invites(&self, actor: Id) -> ServiceResult<Vec<TeamInviteResponse>> {
        let invites = self.ctx.invite_repo().find_pending_by_user(actor).await?;
        Ok(invites.iter().map(TeamInviteResponse::from).collect())
    }

    /// Accept a pending invite addressed to the acting user
    #[instrument(skip(self))]
    pub async fn accept(&self, actor: Id, invite_id: Id) -> ServiceResult<TeamInviteResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        if invite.user_id != actor {
            return Err(ServiceError::permission_denied("accept this invite"));
        }

        let accepted = self.ctx.invite_repo().accept(invite_id).await?;

        info!(invite_id = %invite_id, team_id = %accepted.team_id, "Invite accepted");

        if let Some(team) = self.ctx.team_repo().find_by_id(accepted.team_id).await? {
            NotificationService::new(self.ctx)
                .notify(
                    team.captain_id,
                    &format!("A player joined your team {}", team.name),
                    Some(&format!("/teams/{}", team.id)),
                )
                .await;
        }

        Ok(TeamInviteResponse::from(&accepted))
    }

    /// Decline a pending invite addressed to the acting user
    #[instrument(skip(self))]
    pub async fn decline(&self, actor: Id, invite_id: Id) -> ServiceResult<TeamInviteResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        if invite.user_id != actor {
            return Err(ServiceError::permission_denied("decline this invite"));
        }

        let declined = self.ctx.invite_repo().decline(invite_id).await?;

        info!(invite_id = %invite_id, "Invite declined");

        Ok(TeamInviteResponse::from(&declined))
    }
}
