//! Team invite entity - a captain's offer for a user to join the team

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Team invite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInvite {
    pub id: Id,
    pub team_id: Id,
    pub user_id: Id,
    pub accepted_at: Option<DateTime<Utc>>,
    pub declined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TeamInvite {
    /// Create a new pending TeamInvite
    pub fn new(id: Id, team_id: Id, user_id: Id) -> Self {
        Self {
            id,
            team_id,
            user_id,
            accepted_at: None,
            declined_at: None,
            created_at: Utc::now(),
        }
    }

    /// An invite is pending until it is accepted or declined
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.accepted_at.is_none() && self.declined_at.is_none()
    }

    /// Mark the invite accepted
    pub fn accept(&mut self) {
        self.accepted_at = Some(Utc::now());
    }

    /// Mark the invite declined
    pub fn decline(&mut self) {
        self.declined_at = Some(Utc::now());
    }
}
