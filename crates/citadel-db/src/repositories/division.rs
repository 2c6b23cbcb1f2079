//! PostgreSQL implementation of DivisionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::Division;
use citadel_core::error::DomainError;
use citadel_core::traits::{DivisionRepository, NewDivision, RepoResult};
use citadel_core::Id;

use crate::models::DivisionModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of DivisionRepository
#[derive(Clone)]
pub struct PgDivisionRepository {
    pool: PgPool,
}

impl PgDivisionRepository {
    /// Create a new PgDivisionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DivisionRepository for PgDivisionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Division>> {
        let result = sqlx::query_as::<_, DivisionModel>(
            r"
            SELECT id, league_id, name, created_at, updated_at
            FROM divisions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Division::from))
    }

    #[instrument(skip(self))]
    async fn find_by_league(&self, league_id: Id) -> RepoResult<Vec<Division>> {
        let results = sqlx::query_as::<_, DivisionModel>(
            r"
            SELECT id, league_id, name, created_at, updated_at
            FROM divisions
            WHERE league_id = $1
            ORDER BY name
            ",
        )
        .bind(league_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Division::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, league_id: Id, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM divisions WHERE league_id = $1 AND name = $2)
            ",
        )
        .bind(league_id.into_inner())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, division))]
    async fn create(&self, division: NewDivision<'_>) -> RepoResult<Division> {
        let league_id = division.league_id;
        let model = sqlx::query_as::<_, DivisionModel>(
            r"
            INSERT INTO divisions (league_id, name)
            VALUES ($1, $2)
            RETURNING id, league_id, name, created_at, updated_at
            ",
        )
        .bind(division.league_id.into_inner())
        .bind(division.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DomainError::DivisionNameTaken;
                }
            }
            map_fk_violation(e, || DomainError::LeagueNotFound(league_id))
        })?;

        Ok(Division::from(model))
    }
}
