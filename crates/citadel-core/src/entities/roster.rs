//! Roster entity - a team's registered entry within one division of a league
//!
//! Lifecycle: created unapproved on signup, approved by a league admin,
//! disbanded by the captain or an admin, optionally undisbanded by an admin
//! while still disbanded, or destroyed outright. `approved` and `disbanded`
//! together encode the state machine; the cascading effects of each
//! transition live in the persistence layer so they stay atomic.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Roster entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub id: Id,
    pub team_id: Id,
    pub division_id: Id,
    pub name: String,
    pub description: Option<String>,
    pub notice: Option<String>,
    pub ranking: Option<i32>,
    pub seeding: Option<i32>,
    pub approved: bool,
    pub disbanded: bool,
    /// Derived from the roster-player associations at load time
    pub player_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Roster {
    /// Create a new Roster awaiting approval
    pub fn new(id: Id, team_id: Id, division_id: Id, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_id,
            division_id,
            name,
            description: None,
            notice: None,
            ranking: None,
            seeding: None,
            approved: false,
            disbanded: false,
            player_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the roster is awaiting approval
    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.approved && !self.disbanded
    }

    /// Check if the roster is still playing (not disbanded)
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.disbanded
    }

    /// Mark the roster approved
    pub fn approve(&mut self) {
        self.approved = true;
        self.updated_at = Utc::now();
    }

    /// Mark the roster disbanded
    pub fn disband(&mut self) {
        self.disbanded = true;
        self.updated_at = Utc::now();
    }

    /// Reverse a disband; the roster returns to whichever of
    /// pending/approved its `approved` flag encodes
    pub fn undisband(&mut self) {
        self.disbanded = false;
        self.updated_at = Utc::now();
    }

    /// Update the roster name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the roster description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Update the roster notice board text
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
        self.updated_at = Utc::now();
    }

    /// Update the admin-assigned ranking
    pub fn set_ranking(&mut self, ranking: Option<i32>) {
        self.ranking = ranking;
        self.updated_at = Utc::now();
    }

    /// Update the admin-assigned seeding
    pub fn set_seeding(&mut self, seeding: Option<i32>) {
        self.seeding = seeding;
        self.updated_at = Utc::now();
    }

    /// Move the roster to another division
    pub fn set_division(&mut self, division_id: Id) {
        self.division_id = division_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(Id::new(1), Id::new(10), Id::new(20), "Main".to_string())
    }

    #[test]
    fn test_new_roster_is_pending() {
        let roster = roster();
        assert!(roster.is_pending());
        assert!(roster.is_active());
        assert!(!roster.approved);
        assert!(!roster.disbanded);
    }

    #[test]
    fn test_approve_leaves_pending() {
        let mut roster = roster();
        roster.approve();
        assert!(roster.approved);
        assert!(!roster.is_pending());
        assert!(roster.is_active());
    }

    #[test]
    fn test_disband_and_undisband_keep_approval() {
        let mut roster = roster();
        roster.approve();
        roster.disband();
        assert!(!roster.is_active());
        assert!(roster.approved);

        roster.undisband();
        assert!(roster.is_active());
        assert!(roster.approved, "undisband restores the prior approved state");
    }

    #[test]
    fn test_undisband_of_pending_roster_stays_pending() {
        let mut roster = roster();
        roster.disband();
        roster.undisband();
        assert!(roster.is_pending());
    }
}
