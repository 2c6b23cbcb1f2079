//! Permission predicates and checks
//!
//! The predicates themselves are pure functions over entities, so they can
//! be unit tested without a database. `PermissionService` loads the acting
//! user and applies them before lifecycle operations run.

use citadel_core::entities::{Team, User};
use citadel_core::Id;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Site admins may do anything
#[inline]
pub fn is_admin(user: &User) -> bool {
    user.admin
}

/// Team management: the captain, or an admin
#[inline]
pub fn can_manage_team(user: &User, team: &Team) -> bool {
    user.admin || team.captain_id == user.id
}

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the acting user, failing if the token points nowhere
    #[instrument(skip(self))]
    pub async fn actor(&self, user_id: Id) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Require the acting user to be an admin
    #[instrument(skip(self))]
    pub async fn require_admin(&self, user_id: Id, action: &str) -> ServiceResult<User> {
        let user = self.actor(user_id).await?;
        if !is_admin(&user) {
            return Err(ServiceError::permission_denied(action));
        }
        Ok(user)
    }

    /// Require the acting user to be the team's captain or an admin
    #[instrument(skip(self, team))]
    pub async fn require_team_manager(
        &self,
        user_id: Id,
        team: &Team,
        action: &str,
    ) -> ServiceResult<User> {
        let user = self.actor(user_id).await?;
        if !can_manage_team(&user, team) {
            return Err(ServiceError::permission_denied(action));
        }
        Ok(user)
    }
}
