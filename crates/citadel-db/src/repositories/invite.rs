//! PostgreSQL implementation of InviteRepository
//!
//! An invite is pending while both `accepted_at` and `declined_at` are NULL.
//! Accept and decline claim the row with that predicate in the UPDATE, so a
//! raced second resolution fails with `InviteResolved`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::TeamInvite;
use citadel_core::error::DomainError;
use citadel_core::traits::{InviteRepository, NewInvite, RepoResult};
use citadel_core::Id;

use crate::models::TeamInviteModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation};

const INVITE_COLUMNS: &str = "id, team_id, user_id, accepted_at, declined_at, created_at";

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<TeamInvite>> {
        let result = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM team_invites WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TeamInvite::from))
    }

    #[instrument(skip(self))]
    async fn find_pending(&self, team_id: Id, user_id: Id) -> RepoResult<Option<TeamInvite>> {
        let result = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM team_invites
             WHERE team_id = $1 AND user_id = $2
               AND accepted_at IS NULL AND declined_at IS NULL"
        ))
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TeamInvite::from))
    }

    #[instrument(skip(self))]
    async fn find_by_team(&self, team_id: Id) -> RepoResult<Vec<TeamInvite>> {
        let results = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM team_invites
             WHERE team_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TeamInvite::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending_by_user(&self, user_id: Id) -> RepoResult<Vec<TeamInvite>> {
        let results = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM team_invites
             WHERE user_id = $1 AND accepted_at IS NULL AND declined_at IS NULL
             ORDER BY created_at DESC"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TeamInvite::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, invite: NewInvite) -> RepoResult<TeamInvite> {
        let user_id = invite.user_id;
        let model = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "INSERT INTO team_invites (team_id, user_id)
             VALUES ($1, $2)
             RETURNING {INVITE_COLUMNS}"
        ))
        .bind(invite.team_id.into_inner())
        .bind(invite.user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DomainError::DuplicateInvite;
                }
            }
            map_fk_violation(e, || DomainError::UserNotFound(user_id))
        })?;

        Ok(TeamInvite::from(model))
    }

    #[instrument(skip(self))]
    async fn accept(&self, id: Id) -> RepoResult<TeamInvite> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let claimed = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "UPDATE team_invites
             SET accepted_at = NOW()
             WHERE id = $1 AND accepted_at IS NULL AND declined_at IS NULL
             RETURNING {INVITE_COLUMNS}"
        ))
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = claimed else {
            return Err(resolved_or_missing(&mut tx, id).await?);
        };

        sqlx::query(
            r"
            INSERT INTO team_players (team_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(model.team_id)
        .bind(model.user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyOnTeam))?;

        sqlx::query(
            r"
            INSERT INTO team_transfers (team_id, user_id, is_joining) VALUES ($1, $2, TRUE)
            ",
        )
        .bind(model.team_id)
        .bind(model.user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(TeamInvite::from(model))
    }

    #[instrument(skip(self))]
    async fn decline(&self, id: Id) -> RepoResult<TeamInvite> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let claimed = sqlx::query_as::<_, TeamInviteModel>(&format!(
            "UPDATE team_invites
             SET declined_at = NOW()
             WHERE id = $1 AND accepted_at IS NULL AND declined_at IS NULL
             RETURNING {INVITE_COLUMNS}"
        ))
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = claimed else {
            return Err(resolved_or_missing(&mut tx, id).await?);
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(TeamInvite::from(model))
    }
}

/// Distinguish an already-resolved invite from a missing one after a
/// claim UPDATE matched no rows
async fn resolved_or_missing(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    id: Id,
) -> RepoResult<DomainError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r"
        SELECT EXISTS(SELECT 1 FROM team_invites WHERE id = $1)
        ",
    )
    .bind(id.into_inner())
    .fetch_one(&mut **tx)
    .await
    .map_err(map_db_error)?;

    if exists {
        Ok(DomainError::InviteResolved)
    } else {
        Ok(DomainError::InviteNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgInviteRepository>();
    }
}
