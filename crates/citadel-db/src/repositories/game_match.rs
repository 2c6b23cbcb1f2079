//! PostgreSQL implementation of MatchRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::{Match, MatchStatus};
use citadel_core::error::DomainError;
use citadel_core::traits::{MatchRepository, NewMatch, RepoResult};
use citadel_core::Id;

use crate::mappers::match_status_to_str;
use crate::models::MatchModel;

use super::error::{map_db_error, map_fk_violation};

const MATCH_COLUMNS: &str = "id, division_id, home_roster_id, away_roster_id, round, \
     status, forfeit_by, created_at, updated_at";

/// PostgreSQL implementation of MatchRepository
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    /// Create a new PgMatchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Match>> {
        let result = sqlx::query_as::<_, MatchModel>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Match::from))
    }

    #[instrument(skip(self))]
    async fn find_by_roster(&self, roster_id: Id) -> RepoResult<Vec<Match>> {
        let results = sqlx::query_as::<_, MatchModel>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches
             WHERE home_roster_id = $1 OR away_roster_id = $1
             ORDER BY round, id"
        ))
        .bind(roster_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Match::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Vec<Match>> {
        let results = sqlx::query_as::<_, MatchModel>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches
             WHERE division_id = $1
             ORDER BY round, id"
        ))
        .bind(division_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Match::from).collect())
    }

    #[instrument(skip(self))]
    async fn has_confirmed_for_roster(&self, roster_id: Id) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM matches
                WHERE (home_roster_id = $1 OR away_roster_id = $1)
                  AND status = 'confirmed'
            )
            ",
        )
        .bind(roster_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, game: NewMatch) -> RepoResult<Match> {
        let home_roster_id = game.home_roster_id;
        let model = sqlx::query_as::<_, MatchModel>(&format!(
            "INSERT INTO matches (division_id, home_roster_id, away_roster_id, round)
             VALUES ($1, $2, $3, $4)
             RETURNING {MATCH_COLUMNS}"
        ))
        .bind(game.division_id.into_inner())
        .bind(game.home_roster_id.into_inner())
        .bind(game.away_roster_id.map(Id::into_inner))
        .bind(game.round)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::RosterNotFound(home_roster_id)))?;

        Ok(Match::from(model))
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Id, status: MatchStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE matches SET status = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(match_status_to_str(status))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MatchNotFound(id));
        }

        Ok(())
    }
}
