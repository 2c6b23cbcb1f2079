//! Transfer request - an approvable request to move a player onto/off a roster
//!
//! A request is pending exactly while `approved_by` is null. Pending requests
//! are deleted when their roster disbands; approved ones survive as history.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Transfer request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub id: Id,
    pub roster_id: Id,
    pub user_id: Id,
    /// Direction: true = joining the roster, false = leaving it
    pub is_joining: bool,
    /// On approval of a joining request, also add the user to the owning team
    pub propagate: bool,
    pub approved_by: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransferRequest {
    /// Create a new pending TransferRequest
    pub fn new(id: Id, roster_id: Id, user_id: Id, is_joining: bool, propagate: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            roster_id,
            user_id,
            is_joining,
            propagate,
            approved_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// A request is pending iff nobody has approved it
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.approved_by.is_none()
    }

    /// Record the approving user
    pub fn approve(&mut self, approver_id: Id) {
        self.approved_by = Some(approver_id);
        self.updated_at = Utc::now();
    }
}
