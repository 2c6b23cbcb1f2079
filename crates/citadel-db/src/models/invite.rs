//! Team invite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the team_invites table
#[derive(Debug, Clone, FromRow)]
pub struct TeamInviteModel {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
    pub accepted_at: Option<DateTime<Utc>>,
    pub declined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
