//! User service
//!
//! Account provisioning happens upstream; this service only reads.

use citadel_core::Id;
use tracing::instrument;

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's own profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Id) -> ServiceResult<UserResponse> {
        self.get_user(user_id).await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Search users by name prefix (invite autocomplete)
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: i64) -> ServiceResult<Vec<UserResponse>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let users = self.ctx.user_repo().search_by_name(query.trim(), limit).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }
}
