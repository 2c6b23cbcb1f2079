//! PostgreSQL implementation of LeagueRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::League;
use citadel_core::error::DomainError;
use citadel_core::traits::{LeagueRepository, NewLeague, RepoResult};
use citadel_core::Id;

use crate::mappers::league_status_to_str;
use crate::models::LeagueModel;

use super::error::map_db_error;

const LEAGUE_COLUMNS: &str = "id, name, description, signuppable, roster_locked, \
     matches_submittable, transfers_require_approval, \
     forfeit_all_matches_when_roster_disbands, min_players, max_players, status, \
     created_at, updated_at";

/// PostgreSQL implementation of LeagueRepository
#[derive(Clone)]
pub struct PgLeagueRepository {
    pool: PgPool,
}

impl PgLeagueRepository {
    /// Create a new PgLeagueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueRepository for PgLeagueRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<League>> {
        let result = sqlx::query_as::<_, LeagueModel>(&format!(
            "SELECT {LEAGUE_COLUMNS} FROM leagues WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(League::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, include_hidden: bool) -> RepoResult<Vec<League>> {
        let results = sqlx::query_as::<_, LeagueModel>(&format!(
            "SELECT {LEAGUE_COLUMNS} FROM leagues
             WHERE $1 OR status <> 'hidden'
             ORDER BY created_at DESC"
        ))
        .bind(include_hidden)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(League::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Option<League>> {
        let result = sqlx::query_as::<_, LeagueModel>(
            r"
            SELECT l.id, l.name, l.description, l.signuppable, l.roster_locked,
                   l.matches_submittable, l.transfers_require_approval,
                   l.forfeit_all_matches_when_roster_disbands, l.min_players,
                   l.max_players, l.status, l.created_at, l.updated_at
            FROM leagues l
            JOIN divisions d ON d.league_id = l.id
            WHERE d.id = $1
            ",
        )
        .bind(division_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(League::from))
    }

    #[instrument(skip(self))]
    async fn find_by_roster(&self, roster_id: Id) -> RepoResult<Option<League>> {
        let result = sqlx::query_as::<_, LeagueModel>(
            r"
            SELECT l.id, l.name, l.description, l.signuppable, l.roster_locked,
                   l.matches_submittable, l.transfers_require_approval,
                   l.forfeit_all_matches_when_roster_disbands, l.min_players,
                   l.max_players, l.status, l.created_at, l.updated_at
            FROM leagues l
            JOIN rosters r ON r.league_id = l.id
            WHERE r.id = $1
            ",
        )
        .bind(roster_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(League::from))
    }

    #[instrument(skip(self, league))]
    async fn create(&self, league: NewLeague<'_>) -> RepoResult<League> {
        let model = sqlx::query_as::<_, LeagueModel>(&format!(
            "INSERT INTO leagues (name, description, signuppable, roster_locked,
                 matches_submittable, transfers_require_approval,
                 forfeit_all_matches_when_roster_disbands, min_players, max_players, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {LEAGUE_COLUMNS}"
        ))
        .bind(league.name)
        .bind(league.description)
        .bind(league.signuppable)
        .bind(league.roster_locked)
        .bind(league.matches_submittable)
        .bind(league.transfers_require_approval)
        .bind(league.forfeit_all_matches_when_roster_disbands)
        .bind(league.min_players)
        .bind(league.max_players)
        .bind(league_status_to_str(league.status))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(League::from(model))
    }

    #[instrument(skip(self, league))]
    async fn update(&self, league: &League) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE leagues
            SET name = $2, description = $3, signuppable = $4, roster_locked = $5,
                matches_submittable = $6, transfers_require_approval = $7,
                forfeit_all_matches_when_roster_disbands = $8, min_players = $9,
                max_players = $10, status = $11, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(league.id.into_inner())
        .bind(&league.name)
        .bind(&league.description)
        .bind(league.signuppable)
        .bind(league.roster_locked)
        .bind(league.matches_submittable)
        .bind(league.transfers_require_approval)
        .bind(league.forfeit_all_matches_when_roster_disbands)
        .bind(league.min_players)
        .bind(league.max_players)
        .bind(league_status_to_str(league.status))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LeagueNotFound(league.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLeagueRepository>();
    }
}
