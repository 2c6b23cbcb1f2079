//! PostgreSQL implementation of TeamRepository
//!
//! Membership changes and their ledger rows are written in one transaction;
//! the ledger is append-only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::{Team, TeamTransfer, User};
use citadel_core::error::DomainError;
use citadel_core::traits::{NewTeam, RepoResult, TeamRepository};
use citadel_core::Id;

use crate::models::{TeamModel, TeamTransferModel, UserModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT id, name, description, notice, captain_id, created_at, updated_at
            FROM teams
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, user_id: Id) -> RepoResult<Vec<Team>> {
        let results = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT t.id, t.name, t.description, t.notice, t.captain_id, t.created_at, t.updated_at
            FROM teams t
            JOIN team_players tp ON tp.team_id = t.id
            WHERE tp.user_id = $1
            ORDER BY tp.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Team::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<Team>> {
        let limit = limit.clamp(1, 500);

        let results = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT id, name, description, notice, captain_id, created_at, updated_at
            FROM teams
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Team::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM teams WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, team))]
    async fn create(&self, team: NewTeam<'_>) -> RepoResult<Team> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, TeamModel>(
            r"
            INSERT INTO teams (name, description, captain_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, notice, captain_id, created_at, updated_at
            ",
        )
        .bind(team.name)
        .bind(team.description)
        .bind(team.captain_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamNameTaken))?;

        // The captain joins as the first player, with a joining ledger row
        sqlx::query(
            r"
            INSERT INTO team_players (team_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(model.id)
        .bind(team.captain_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO team_transfers (team_id, user_id, is_joining) VALUES ($1, $2, TRUE)
            ",
        )
        .bind(model.id)
        .bind(team.captain_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Team::from(model))
    }

    #[instrument(skip(self, team))]
    async fn update(&self, team: &Team) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teams
            SET name = $2, description = $3, notice = $4, captain_id = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(team.id.into_inner())
        .bind(&team.name)
        .bind(&team.description)
        .bind(&team.notice)
        .bind(team.captain_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamNameTaken))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TeamNotFound(team.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM teams WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TeamNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_player(&self, team_id: Id, user_id: Id) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM team_players WHERE team_id = $1 AND user_id = $2)
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn players(&self, team_id: Id) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.name, u.admin, u.created_at, u.updated_at
            FROM users u
            JOIN team_players tp ON tp.user_id = u.id
            WHERE tp.team_id = $1
            ORDER BY tp.created_at
            ",
        )
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn player_count(&self, team_id: Id) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM team_players WHERE team_id = $1
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn add_player(&self, team_id: Id, user_id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO team_players (team_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyOnTeam))?;

        sqlx::query(
            r"
            INSERT INTO team_transfers (team_id, user_id, is_joining) VALUES ($1, $2, TRUE)
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_player(&self, team_id: Id, user_id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM team_players WHERE team_id = $1 AND user_id = $2
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotOnTeam);
        }

        sqlx::query(
            r"
            INSERT INTO team_transfers (team_id, user_id, is_joining) VALUES ($1, $2, FALSE)
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn transfers(&self, team_id: Id) -> RepoResult<Vec<TeamTransfer>> {
        let results = sqlx::query_as::<_, TeamTransferModel>(
            r"
            SELECT id, team_id, user_id, is_joining, created_at
            FROM team_transfers
            WHERE team_id = $1
            ORDER BY id DESC
            ",
        )
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TeamTransfer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTeamRepository>();
    }
}
