//! PostgreSQL implementation of RosterRepository
//!
//! The lifecycle operations here are the ones that must not be torn apart:
//! creation writes the roster, its memberships, and their ledger rows in one
//! transaction; disband flips the flag, forfeits matches per the league
//! policy, and clears pending transfer requests in one transaction, with the
//! disbanded precondition re-checked by the claiming UPDATE itself.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::{Roster, RosterTransfer, User};
use citadel_core::error::DomainError;
use citadel_core::traits::{NewRoster, RepoResult, RosterRepository};
use citadel_core::Id;

use crate::models::{RosterModel, RosterTransferModel, UserModel};

use super::error::{map_db_error, map_unique_violation};

// player_count is computed from the membership rows at read time so it
// cannot drift; league_id stays internal to the schema.
const ROSTER_COLUMNS: &str = "id, team_id, division_id, name, description, notice, \
     ranking, seeding, approved, disbanded, \
     (SELECT COUNT(*) FROM roster_players rp WHERE rp.roster_id = rosters.id) AS player_count, \
     created_at, updated_at";

/// PostgreSQL implementation of RosterRepository
#[derive(Clone)]
pub struct PgRosterRepository {
    pool: PgPool,
}

impl PgRosterRepository {
    /// Create a new PgRosterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique violation on the rosters table to the conflict it guards
fn map_roster_unique(e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(c) if c.contains("league") => DomainError::TeamAlreadyRostered,
                _ => DomainError::RosterNameTaken,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl RosterRepository for PgRosterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Roster>> {
        let result = sqlx::query_as::<_, RosterModel>(&format!(
            "SELECT {ROSTER_COLUMNS} FROM rosters WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Roster::from))
    }

    #[instrument(skip(self))]
    async fn find_by_division(&self, division_id: Id) -> RepoResult<Vec<Roster>> {
        let results = sqlx::query_as::<_, RosterModel>(&format!(
            "SELECT {ROSTER_COLUMNS} FROM rosters
             WHERE division_id = $1
             ORDER BY name"
        ))
        .bind(division_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Roster::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_team(&self, team_id: Id) -> RepoResult<Vec<Roster>> {
        let results = sqlx::query_as::<_, RosterModel>(&format!(
            "SELECT {ROSTER_COLUMNS} FROM rosters
             WHERE team_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Roster::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_team_and_league(
        &self,
        team_id: Id,
        league_id: Id,
    ) -> RepoResult<Option<Roster>> {
        let result = sqlx::query_as::<_, RosterModel>(&format!(
            "SELECT {ROSTER_COLUMNS} FROM rosters
             WHERE team_id = $1 AND league_id = $2"
        ))
        .bind(team_id.into_inner())
        .bind(league_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Roster::from))
    }

    #[instrument(skip(self))]
    async fn team_has_active_roster(&self, team_id: Id) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM rosters WHERE team_id = $1 AND disbanded = FALSE)
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn name_exists_in_division(&self, division_id: Id, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM rosters WHERE division_id = $1 AND name = $2)
            ",
        )
        .bind(division_id.into_inner())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, roster))]
    async fn create(&self, roster: NewRoster<'_>) -> RepoResult<Roster> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let league_id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT league_id FROM divisions WHERE id = $1
            ",
        )
        .bind(roster.division_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::DivisionNotFound(roster.division_id))?;

        let roster_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO rosters (team_id, division_id, league_id, name, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(roster.team_id.into_inner())
        .bind(roster.division_id.into_inner())
        .bind(league_id)
        .bind(roster.name)
        .bind(roster.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_roster_unique)?;

        for &player_id in roster.players {
            sqlx::query(
                r"
                INSERT INTO roster_players (roster_id, user_id) VALUES ($1, $2)
                ",
            )
            .bind(roster_id)
            .bind(player_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::AlreadyOnRoster))?;

            sqlx::query(
                r"
                INSERT INTO roster_transfers (roster_id, user_id, is_joining)
                VALUES ($1, $2, TRUE)
                ",
            )
            .bind(roster_id)
            .bind(player_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        let model = sqlx::query_as::<_, RosterModel>(&format!(
            "SELECT {ROSTER_COLUMNS} FROM rosters WHERE id = $1"
        ))
        .bind(roster_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Roster::from(model))
    }

    #[instrument(skip(self, roster))]
    async fn update(&self, roster: &Roster) -> RepoResult<()> {
        // Approval may move the roster to another division; league_id is
        // recomputed so the one-roster-per-league constraint stays honest
        let result = sqlx::query(
            r"
            UPDATE rosters
            SET name = $2, description = $3, notice = $4, ranking = $5,
                seeding = $6, approved = $7, division_id = $8,
                league_id = (SELECT league_id FROM divisions WHERE id = $8),
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(roster.id.into_inner())
        .bind(&roster.name)
        .bind(&roster.description)
        .bind(&roster.notice)
        .bind(roster.ranking)
        .bind(roster.seeding)
        .bind(roster.approved)
        .bind(roster.division_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_roster_unique)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RosterNotFound(roster.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn disband(&self, id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Claiming UPDATE doubles as the precondition check: a raced second
        // disband matches no rows and fails below
        let claimed = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE rosters
            SET disbanded = TRUE, updated_at = NOW()
            WHERE id = $1 AND disbanded = FALSE
            RETURNING league_id
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(league_id) = claimed else {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM rosters WHERE id = $1)
                ",
            )
            .bind(id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::RosterDisbanded
            } else {
                DomainError::RosterNotFound(id)
            });
        };

        let forfeit_all = sqlx::query_scalar::<_, bool>(
            r"
            SELECT forfeit_all_matches_when_roster_disbands FROM leagues WHERE id = $1
            ",
        )
        .bind(league_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Forfeit the roster's matches: all of them when the league says so,
        // otherwise only those not yet confirmed. Matches already forfeited
        // some other way are left alone.
        sqlx::query(
            r"
            UPDATE matches
            SET forfeit_by = 'home_team_forfeit', updated_at = NOW()
            WHERE home_roster_id = $1
              AND forfeit_by = 'no_forfeit'
              AND ($2 OR status <> 'confirmed')
            ",
        )
        .bind(id.into_inner())
        .bind(forfeit_all)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE matches
            SET forfeit_by = 'away_team_forfeit', updated_at = NOW()
            WHERE away_roster_id = $1
              AND forfeit_by = 'no_forfeit'
              AND ($2 OR status <> 'confirmed')
            ",
        )
        .bind(id.into_inner())
        .bind(forfeit_all)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // A disbanded roster has nothing pending; resolved requests stay
        sqlx::query(
            r"
            DELETE FROM transfer_requests WHERE roster_id = $1 AND approved_by IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn undisband(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rosters
            SET disbanded = FALSE, updated_at = NOW()
            WHERE id = $1 AND disbanded = TRUE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM rosters WHERE id = $1)
                ",
            )
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::RosterNotDisbanded
            } else {
                DomainError::RosterNotFound(id)
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM rosters WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RosterNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_player(&self, roster_id: Id, user_id: Id) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM roster_players WHERE roster_id = $1 AND user_id = $2)
            ",
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn players(&self, roster_id: Id) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.name, u.admin, u.created_at, u.updated_at
            FROM users u
            JOIN roster_players rp ON rp.user_id = u.id
            WHERE rp.roster_id = $1
            ORDER BY rp.created_at
            ",
        )
        .bind(roster_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn add_player(&self, roster_id: Id, user_id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO roster_players (roster_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyOnRoster))?;

        sqlx::query(
            r"
            INSERT INTO roster_transfers (roster_id, user_id, is_joining) VALUES ($1, $2, TRUE)
            ",
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_player(&self, roster_id: Id, user_id: Id) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM roster_players WHERE roster_id = $1 AND user_id = $2
            ",
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotOnRoster);
        }

        sqlx::query(
            r"
            INSERT INTO roster_transfers (roster_id, user_id, is_joining) VALUES ($1, $2, FALSE)
            ",
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn transfers(&self, roster_id: Id) -> RepoResult<Vec<RosterTransfer>> {
        let results = sqlx::query_as::<_, RosterTransferModel>(
            r"
            SELECT id, roster_id, user_id, is_joining, created_at
            FROM roster_transfers
            WHERE roster_id = $1
            ORDER BY id DESC
            ",
        )
        .bind(roster_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RosterTransfer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRosterRepository>();
    }
}
