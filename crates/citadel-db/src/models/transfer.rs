//! Transfer ledger database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the team_transfers table
#[derive(Debug, Clone, FromRow)]
pub struct TeamTransferModel {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for the roster_transfers table
#[derive(Debug, Clone, FromRow)]
pub struct RosterTransferModel {
    pub id: i64,
    pub roster_id: i64,
    pub user_id: i64,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}
