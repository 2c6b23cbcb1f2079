//! Division database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the divisions table
#[derive(Debug, Clone, FromRow)]
pub struct DivisionModel {
    pub id: i64,
    pub league_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
