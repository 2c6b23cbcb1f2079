//! Transfer ledger entries - immutable records of players joining or leaving
//!
//! One row is appended for every membership change; rows are never updated
//! or deleted, so repeated join/leave cycles for the same user accumulate.
//! Teams and rosters keep separate ledgers.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Ledger entry for a team membership change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTransfer {
    pub id: Id,
    pub team_id: Id,
    pub user_id: Id,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}

impl TeamTransfer {
    /// Create a new TeamTransfer entry
    pub fn new(id: Id, team_id: Id, user_id: Id, is_joining: bool) -> Self {
        Self {
            id,
            team_id,
            user_id,
            is_joining,
            created_at: Utc::now(),
        }
    }
}

/// Ledger entry for a roster membership change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTransfer {
    pub id: Id,
    pub roster_id: Id,
    pub user_id: Id,
    pub is_joining: bool,
    pub created_at: DateTime<Utc>,
}

impl RosterTransfer {
    /// Create a new RosterTransfer entry
    pub fn new(id: Id, roster_id: Id, user_id: Id, is_joining: bool) -> Self {
        Self {
            id,
            roster_id,
            user_id,
            is_joining,
            created_at: Utc::now(),
        }
    }
}
