//! League and division service
//!
//! Leagues carry the policy knobs the roster lifecycle consults. Creation
//! and mutation are admin-only; hidden leagues are invisible to everyone
//! else.

use citadel_core::entities::{League, LeagueStatus};
use citadel_core::traits::{NewDivision, NewLeague};
use citadel_core::Id;
use tracing::{info, instrument};

use crate::dto::{
    CreateDivisionRequest, CreateLeagueRequest, DivisionResponse, LeagueResponse,
    UpdateLeagueRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::{is_admin, PermissionService};

/// Parse a request status string, rejecting unknown values
fn parse_status(status: &str) -> ServiceResult<LeagueStatus> {
    match status {
        "hidden" => Ok(LeagueStatus::Hidden),
        "running" => Ok(LeagueStatus::Running),
        "completed" => Ok(LeagueStatus::Completed),
        other => Err(ServiceError::validation(format!(
            "unknown league status: {other}"
        ))),
    }
}

/// League service
pub struct LeagueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeagueService<'a> {
    /// Create a new LeagueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the viewer may see hidden leagues
    async fn viewer_is_admin(&self, viewer: Option<Id>) -> ServiceResult<bool> {
        let Some(viewer) = viewer else {
            return Ok(false);
        };
        let user = PermissionService::new(self.ctx).actor(viewer).await?;
        Ok(is_admin(&user))
    }

    /// List leagues; hidden ones only for admins
    #[instrument(skip(self))]
    pub async fn list(&self, viewer: Option<Id>) -> ServiceResult<Vec<LeagueResponse>> {
        let include_hidden = self.viewer_is_admin(viewer).await?;
        let leagues = self.ctx.league_repo().find_all(include_hidden).await?;
        Ok(leagues.iter().map(LeagueResponse::from).collect())
    }

    /// Get a league; hidden leagues look absent to non-admins
    #[instrument(skip(self))]
    pub async fn get(&self, league_id: Id, viewer: Option<Id>) -> ServiceResult<LeagueResponse> {
        let league = self.get_entity(league_id, viewer).await?;
        Ok(LeagueResponse::from(&league))
    }

    /// Get the league entity, applying hidden-league visibility
    #[instrument(skip(self))]
    pub async fn get_entity(&self, league_id: Id, viewer: Option<Id>) -> ServiceResult<League> {
        let league = self
            .ctx
            .league_repo()
            .find_by_id(league_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("League", league_id.to_string()))?;

        if league.status == LeagueStatus::Hidden && !self.viewer_is_admin(viewer).await? {
            return Err(ServiceError::not_found("League", league_id.to_string()));
        }

        Ok(league)
    }

    /// Create a league (admin)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Id,
        request: CreateLeagueRequest,
    ) -> ServiceResult<LeagueResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "create leagues")
            .await?;

        if request.max_players != 0 && request.max_players < request.min_players {
            return Err(ServiceError::validation(
                "max_players must be 0 or at least min_players",
            ));
        }

        let status = match request.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => LeagueStatus::Hidden,
        };

        let league = self
            .ctx
            .league_repo()
            .create(NewLeague {
                name: &request.name,
                description: request.description.as_deref(),
                signuppable: request.signuppable,
                roster_locked: request.roster_locked,
                matches_submittable: request.matches_submittable,
                transfers_require_approval: request.transfers_require_approval,
                forfeit_all_matches_when_roster_disbands: request
                    .forfeit_all_matches_when_roster_disbands,
                min_players: request.min_players,
                max_players: request.max_players,
                status,
            })
            .await?;

        info!(league_id = %league.id, "League created");

        Ok(LeagueResponse::from(&league))
    }

    /// Update a league (admin); absent fields keep their values
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Id,
        league_id: Id,
        request: UpdateLeagueRequest,
    ) -> ServiceResult<LeagueResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "update leagues")
            .await?;

        let mut league = self
            .ctx
            .league_repo()
            .find_by_id(league_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("League", league_id.to_string()))?;

        if let Some(name) = request.name {
            league.name = name;
        }
        if let Some(description) = request.description {
            league.description = Some(description);
        }
        if let Some(signuppable) = request.signuppable {
            league.signuppable = signuppable;
        }
        if let Some(roster_locked) = request.roster_locked {
            league.roster_locked = roster_locked;
        }
        if let Some(matches_submittable) = request.matches_submittable {
            league.matches_submittable = matches_submittable;
        }
        if let Some(transfers_require_approval) = request.transfers_require_approval {
            league.transfers_require_approval = transfers_require_approval;
        }
        if let Some(forfeit_all) = request.forfeit_all_matches_when_roster_disbands {
            league.forfeit_all_matches_when_roster_disbands = forfeit_all;
        }
        if let Some(min_players) = request.min_players {
            league.min_players = min_players;
        }
        if let Some(max_players) = request.max_players {
            league.max_players = max_players;
        }
        if let Some(status) = request.status.as_deref() {
            league.status = parse_status(status)?;
        }

        if league.max_players != 0 && league.max_players < league.min_players {
            return Err(ServiceError::validation(
                "max_players must be 0 or at least min_players",
            ));
        }

        self.ctx.league_repo().update(&league).await?;

        info!(league_id = %league.id, "League updated");

        Ok(LeagueResponse::from(&league))
    }

    /// Create a division under a league (admin)
    #[instrument(skip(self, request))]
    pub async fn create_division(
        &self,
        actor: Id,
        league_id: Id,
        request: CreateDivisionRequest,
    ) -> ServiceResult<DivisionResponse> {
        PermissionService::new(self.ctx)
            .require_admin(actor, "create divisions")
            .await?;

        let division = self
            .ctx
            .division_repo()
            .create(NewDivision { league_id, name: &request.name })
            .await?;

        info!(division_id = %division.id, league_id = %league_id, "Division created");

        Ok(DivisionResponse::from(&division))
    }

    /// List a league's divisions
    #[instrument(skip(self))]
    pub async fn list_divisions(
        &self,
        league_id: Id,
        viewer: Option<Id>,
    ) -> ServiceResult<Vec<DivisionResponse>> {
        // Visibility follows the league's
        self.get_entity(league_id, viewer).await?;

        let divisions = self.ctx.division_repo().find_by_league(league_id).await?;
        Ok(divisions.iter().map(DivisionResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("hidden").unwrap(), LeagueStatus::Hidden);
        assert_eq!(parse_status("running").unwrap(), LeagueStatus::Running);
        assert_eq!(parse_status("completed").unwrap(), LeagueStatus::Completed);
        assert!(parse_status("archived").is_err());
    }
}
