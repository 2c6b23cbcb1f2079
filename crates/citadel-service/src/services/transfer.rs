//! Transfer request service
//!
//! Captains file join/leave requests for their rosters; admins approve or
//! deny. Leagues that waive approval execute the request immediately,
//! recorded as approved by the requester.

use citadel_core::entities::{Roster, Team};
use citadel_core::error::DomainError;
use citadel_core::traits::NewTransferRequest;
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{CreateTransferRequest, TransferRequestResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::permission::PermissionService;
use super::roster::RosterService;
use super::team::TeamService;

/// Transfer request service
pub struct TransferService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransferService<'a> {
    /// Create a new TransferService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a transfer request for a roster (captain or admin)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Id,
        roster_id: Id,
        request: CreateTransferRequest,
    ) -> ServiceResult<TransferRequestResponse> {
        let roster = RosterService::new(self.ctx).get_entity(roster_id).await?;
        let team = TeamService::new(self.ctx).get_entity(roster.team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "file transfer requests for this roster")
            .await?;

        if roster.disbanded {
            return Err(DomainError::RosterDisbanded.into());
        }

        let league = self
            .ctx
            .league_repo()
            .find_by_roster(roster_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Roster", roster_id.to_string()))?;

        if league.roster_locked {
            return Err(DomainError::RostersLocked.into());
        }

        let user_id = Id::new(request.user_id);
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Direction must be consistent with current membership
        let on_roster = self.ctx.roster_repo().is_player(roster_id, user_id).await?;
        if request.is_joining && on_roster {
            return Err(DomainError::AlreadyOnRoster.into());
        }
        if !request.is_joining && !on_roster {
            return Err(DomainError::NotOnRoster.into());
        }

        let count = if request.is_joining {
            roster.player_count + 1
        } else {
            roster.player_count - 1
        };
        if !league.accepts_player_count(count) {
            return Err(DomainError::PlayerCountOutOfBounds {
                count,
                min: league.min_players,
                max: league.max_players,
            }
            .into());
        }

        let new_request = NewTransferRequest {
            roster_id,
            user_id,
            is_joining: request.is_joining,
            propagate: request.propagate,
        };

        if league.transfers_require_approval {
            let created = self.ctx.transfer_request_repo().create(new_request).await?;

            info!(request_id = %created.id, roster_id = %roster_id, "Transfer request filed");

            Ok(TransferRequestResponse::from(&created))
        } else {
            // Executed immediately, recorded as approved by the requester
            let created = self
                .ctx
                .transfer_request_repo()
                .create_resolved(new_request, actor)
                .await?;

            info!(request_id = %created.id, roster_id = %roster_id, "Transfer executed without approval");

            self.notify_outcome(&created.user_id, &roster, &team, created.is_joining).await;

            Ok(TransferRequestResponse::from(&created))
        }
    }

    /// Approve a pending request (admin); a raced double-approve loses
    #[instrument(skip(self))]
    pub async fn approve(
        &self,
        actor: Id,
        request_id: Id,
    ) -> ServiceResult<TransferRequestResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "approve transfer requests")
            .await?;

        let approved = self.ctx.transfer_request_repo().approve(request_id, actor).await?;

        info!(request_id = %request_id, approver_id = %actor, "Transfer request approved");

        let roster = RosterService::new(self.ctx).get_entity(approved.roster_id).await?;
        let team = TeamService::new(self.ctx).get_entity(roster.team_id).await?;
        self.notify_outcome(&approved.user_id, &roster, &team, approved.is_joining).await;

        Ok(TransferRequestResponse::from(&approved))
    }

    /// Deny a pending request (admin): deletes the row
    #[instrument(skip(self))]
    pub async fn deny(&self, actor: Id, request_id: Id) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "deny transfer requests")
            .await?;

        let request = self
            .ctx
            .transfer_request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Transfer request", request_id.to_string()))?;

        self.ctx.transfer_request_repo().delete_pending(request_id).await?;

        info!(request_id = %request_id, "Transfer request denied");

        NotificationService::new(self.ctx)
            .notify(
                request.user_id,
                "Your transfer request was denied",
                Some(&format!("/rosters/{}", request.roster_id)),
            )
            .await;

        Ok(())
    }

    /// List pending requests across a league (admin review queue)
    #[instrument(skip(self))]
    pub async fn list_pending_by_league(
        &self,
        actor: Id,
        league_id: Id,
    ) -> ServiceResult<Vec<TransferRequestResponse>> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "review transfer requests")
            .await?;

        let requests = self
            .ctx
            .transfer_request_repo()
            .find_pending_by_league(league_id)
            .await?;
        Ok(requests.iter().map(TransferRequestResponse::from).collect())
    }

    /// List pending requests for a roster (captain or admin)
    #[instrument(skip(self))]
    pub async fn list_pending_by_roster(
        &self,
        actor: Id,
        roster_id: Id,
    ) -> ServiceResult<Vec<TransferRequestResponse>> {
        let roster = RosterService::new(self.ctx).get_entity(roster_id).await?;
        let team = TeamService::new(self.ctx).get_entity(roster.team_id).await?;
        PermissionService::new(self.ctx)
            .require_team_manager(actor, &team, "view this roster's transfer requests")
            .await?;

        let requests = self
            .ctx
            .transfer_request_repo()
            .find_pending_by_roster(roster_id)
            .await?;
        Ok(requests.iter().map(TransferRequestResponse::from).collect())
    }

    /// Notify the affected user and the team captain of an executed
    /// transfer (fire-and-forget)
    async fn notify_outcome(&self, user_id: &Id, roster: &Roster, team: &Team, joining: bool) {
        let link = format!("/rosters/{}", roster.id);
        let user_message = if joining {
            format!("Your transfer onto the roster {} went through", roster.name)
        } else {
            format!("Your transfer off the roster {} went through", roster.name)
        };

        let notifier = NotificationService::new(self.ctx);
        notifier.notify(*user_id, &user_message, Some(&link)).await;
        notifier
            .notify(
                team.captain_id,
                &format!("A transfer for the roster {} was executed", roster.name),
                Some(&link),
            )
            .await;
    }
}
