//! PostgreSQL implementation of TransferRequestRepository
//!
//! A request is pending while `approved_by` is NULL. Approval claims the row
//! with `WHERE approved_by IS NULL`, so of two racing approvals exactly one
//! wins; the loser gets `TransferRequestResolved`. The membership mutation
//! and its ledger row land in the same transaction as the claim.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use citadel_core::entities::TransferRequest;
use citadel_core::error::DomainError;
use citadel_core::traits::{NewTransferRequest, RepoResult, TransferRequestRepository};
use citadel_core::Id;

use crate::models::TransferRequestModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation};

const REQUEST_COLUMNS: &str =
    "id, roster_id, user_id, is_joining, propagate, approved_by, created_at, updated_at";

/// PostgreSQL implementation of TransferRequestRepository
#[derive(Clone)]
pub struct PgTransferRequestRepository {
    pool: PgPool,
}

impl PgTransferRequestRepository {
    /// Create a new PgTransferRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Apply an approved request's membership and ledger effects inside the
/// caller's transaction
async fn apply_effects(
    tx: &mut Transaction<'_, Postgres>,
    roster_id: i64,
    user_id: i64,
    is_joining: bool,
    propagate: bool,
) -> RepoResult<()> {
    if is_joining {
        sqlx::query(
            r"
            INSERT INTO roster_players (roster_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(roster_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyOnRoster))?;

        sqlx::query(
            r"
            INSERT INTO roster_transfers (roster_id, user_id, is_joining) VALUES ($1, $2, TRUE)
            ",
        )
        .bind(roster_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        // Propagation also puts the player on the roster's team, unless
        // they are already there
        if propagate {
            let team_id = sqlx::query_scalar::<_, i64>(
                r"
                SELECT team_id FROM rosters WHERE id = $1
                ",
            )
            .bind(roster_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_db_error)?;

            let inserted = sqlx::query(
                r"
                INSERT INTO team_players (team_id, user_id) VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(team_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

            if inserted.rows_affected() > 0 {
                sqlx::query(
                    r"
                    INSERT INTO team_transfers (team_id, user_id, is_joining)
                    VALUES ($1, $2, TRUE)
                    ",
                )
                .bind(team_id)
                .bind(user_id)
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?;
            }
        }
    } else {
        let removed = sqlx::query(
            r"
            DELETE FROM roster_players WHERE roster_id = $1 AND user_id = $2
            ",
        )
        .bind(roster_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        if removed.rows_affected() == 0 {
            return Err(DomainError::NotOnRoster);
        }

        sqlx::query(
            r"
            INSERT INTO roster_transfers (roster_id, user_id, is_joining) VALUES ($1, $2, FALSE)
            ",
        )
        .bind(roster_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;
    }

    Ok(())
}

#[async_trait]
impl TransferRequestRepository for PgTransferRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<TransferRequest>> {
        let result = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM transfer_requests WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TransferRequest::from))
    }

    #[instrument(skip(self))]
    async fn find_pending_by_roster(&self, roster_id: Id) -> RepoResult<Vec<TransferRequest>> {
        let results = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM transfer_requests
             WHERE roster_id = $1 AND approved_by IS NULL
             ORDER BY created_at"
        ))
        .bind(roster_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TransferRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending_by_league(&self, league_id: Id) -> RepoResult<Vec<TransferRequest>> {
        let results = sqlx::query_as::<_, TransferRequestModel>(
            r"
            SELECT tr.id, tr.roster_id, tr.user_id, tr.is_joining, tr.propagate,
                   tr.approved_by, tr.created_at, tr.updated_at
            FROM transfer_requests tr
            JOIN rosters r ON r.id = tr.roster_id
            WHERE r.league_id = $1 AND tr.approved_by IS NULL
            ORDER BY tr.created_at
            ",
        )
        .bind(league_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TransferRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending_for_user(
        &self,
        roster_id: Id,
        user_id: Id,
    ) -> RepoResult<Option<TransferRequest>> {
        let result = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM transfer_requests
             WHERE roster_id = $1 AND user_id = $2 AND approved_by IS NULL"
        ))
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TransferRequest::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, request: NewTransferRequest) -> RepoResult<TransferRequest> {
        let roster_id = request.roster_id;
        let model = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "INSERT INTO transfer_requests (roster_id, user_id, is_joining, propagate)
             VALUES ($1, $2, $3, $4)
             RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(request.roster_id.into_inner())
        .bind(request.user_id.into_inner())
        .bind(request.is_joining)
        .bind(request.propagate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DomainError::DuplicateTransferRequest;
                }
            }
            map_fk_violation(e, || DomainError::RosterNotFound(roster_id))
        })?;

        Ok(TransferRequest::from(model))
    }

    #[instrument(skip(self))]
    async fn create_resolved(
        &self,
        request: NewTransferRequest,
        approver_id: Id,
    ) -> RepoResult<TransferRequest> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "INSERT INTO transfer_requests (roster_id, user_id, is_joining, propagate, approved_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(request.roster_id.into_inner())
        .bind(request.user_id.into_inner())
        .bind(request.is_joining)
        .bind(request.propagate)
        .bind(approver_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        apply_effects(
            &mut tx,
            model.roster_id,
            model.user_id,
            model.is_joining,
            model.propagate,
        )
        .await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(TransferRequest::from(model))
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: Id, approver_id: Id) -> RepoResult<TransferRequest> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let claimed = sqlx::query_as::<_, TransferRequestModel>(&format!(
            "UPDATE transfer_requests
             SET approved_by = $2, updated_at = NOW()
             WHERE id = $1 AND approved_by IS NULL
             RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(approver_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = claimed else {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM transfer_requests WHERE id = $1)
                ",
            )
            .bind(id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::TransferRequestResolved
            } else {
                DomainError::TransferRequestNotFound(id)
            });
        };

        apply_effects(
            &mut tx,
            model.roster_id,
            model.user_id,
            model.is_joining,
            model.propagate,
        )
        .await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(TransferRequest::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_pending(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM transfer_requests WHERE id = $1 AND approved_by IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM transfer_requests WHERE id = $1)
                ",
            )
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::TransferRequestResolved
            } else {
                DomainError::TransferRequestNotFound(id)
            });
        }

        Ok(())
    }
}
