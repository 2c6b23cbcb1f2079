//! Match service
//!
//! Minimal surface: admins create matches; reads are public. Result
//! submission and confirmation run through operational tooling, so the
//! disband cascade is the only API-reachable mutation of forfeit state.

use citadel_core::traits::NewMatch;
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{CreateMatchRequest, MatchResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;
use super::roster::RosterService;

/// Match service
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    /// Create a new MatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a match between two rosters of one division, or a bye (admin)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Id,
        request: CreateMatchRequest,
    ) -> ServiceResult<MatchResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "create matches")
            .await?;

        let division_id = Id::new(request.division_id);
        let home_roster_id = Id::new(request.home_roster_id);

        let roster_service = RosterService::new(self.ctx);
        let home = roster_service.get_entity(home_roster_id).await?;
        if home.division_id != division_id {
            return Err(ServiceError::validation(
                "home roster is not in the given division",
            ));
        }

        let away_roster_id = match request.away_roster_id {
            Some(raw) => {
                let away_id = Id::new(raw);
                if away_id == home_roster_id {
                    return Err(ServiceError::validation(
                        "a roster cannot play against itself",
                    ));
                }
                let away = roster_service.get_entity(away_id).await?;
                if away.division_id != division_id {
                    return Err(ServiceError::validation(
                        "away roster is not in the given division",
                    ));
                }
                Some(away_id)
            }
            None => None,
        };

        let game = self
            .ctx
            .match_repo()
            .create(NewMatch {
                division_id,
                home_roster_id,
                away_roster_id,
                round: request.round,
            })
            .await?;

        info!(match_id = %game.id, division_id = %division_id, "Match created");

        Ok(MatchResponse::from(&game))
    }

    /// Get a match by ID
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: Id) -> ServiceResult<MatchResponse> {
        let game = self
            .ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Match", match_id.to_string()))?;

        Ok(MatchResponse::from(&game))
    }

    /// List matches a roster plays in
    #[instrument(skip(self))]
    pub async fn list_by_roster(&self, roster_id: Id) -> ServiceResult<Vec<MatchResponse>> {
        RosterService::new(self.ctx).get_entity(roster_id).await?;
        let matches = self.ctx.match_repo().find_by_roster(roster_id).await?;
        Ok(matches.iter().map(MatchResponse::from).collect())
    }

    /// List matches of a division
    #[instrument(skip(self))]
    pub async fn list_by_division(&self, division_id: Id) -> ServiceResult<Vec<MatchResponse>> {
        let matches = self.ctx.match_repo().find_by_division(division_id).await?;
        Ok(matches.iter().map(MatchResponse::from).collect())
    }
}
