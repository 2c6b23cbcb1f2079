//! Transfer request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the transfer_requests table
#[derive(Debug, Clone, FromRow)]
pub struct TransferRequestModel {
    pub id: i64,
    pub roster_id: i64,
    pub user_id: i64,
    pub is_joining: bool,
    pub propagate: bool,
    pub approved_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
