//! League entity - a competition with divisions, rosters, and matches
//!
//! The league carries the policy knobs that gate the roster lifecycle:
//! signup availability, roster size bounds, transfer approval, and what
//! happens to a disbanded roster's matches.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Visibility / progression state of a league
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueStatus {
    Hidden,
    Running,
    Completed,
}

impl LeagueStatus {
    /// String representation used in storage and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

/// League entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub signuppable: bool,
    pub roster_locked: bool,
    pub matches_submittable: bool,
    pub transfers_require_approval: bool,
    pub forfeit_all_matches_when_roster_disbands: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub status: LeagueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl League {
    /// Create a new League with default policies
    pub fn new(id: Id, name: String, min_players: i32, max_players: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            signuppable: false,
            roster_locked: false,
            matches_submittable: false,
            transfers_require_approval: true,
            forfeit_all_matches_when_roster_disbands: true,
            min_players,
            max_players,
            status: LeagueStatus::Hidden,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a roster of `count` players fits the league bounds.
    /// `max_players == 0` means unbounded.
    #[inline]
    pub fn accepts_player_count(&self, count: i64) -> bool {
        count >= i64::from(self.min_players)
            && (self.max_players == 0 || count <= i64::from(self.max_players))
    }

    /// Check if the league is visible and in progress
    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == LeagueStatus::Running
    }

    /// Check if the league is hidden from non-admins
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.status == LeagueStatus::Hidden
    }

    /// Check if teams may currently sign up
    #[inline]
    pub fn signups_open(&self) -> bool {
        self.signuppable && self.is_running()
    }

    /// Update the league name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the league description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Update the progression status
    pub fn set_status(&mut self, status: LeagueStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Open or close team signups
    pub fn set_signuppable(&mut self, signuppable: bool) {
        self.signuppable = signuppable;
        self.updated_at = Utc::now();
    }

    /// Lock or unlock roster membership changes
    pub fn set_roster_locked(&mut self, locked: bool) {
        self.roster_locked = locked;
        self.updated_at = Utc::now();
    }

    /// Allow or disallow match result submission
    pub fn set_matches_submittable(&mut self, submittable: bool) {
        self.matches_submittable = submittable;
        self.updated_at = Utc::now();
    }

    /// Require or waive admin approval for transfers
    pub fn set_transfers_require_approval(&mut self, required: bool) {
        self.transfers_require_approval = required;
        self.updated_at = Utc::now();
    }

    /// Set whether disbanding a roster forfeits its settled matches too
    pub fn set_forfeit_on_disband(&mut self, forfeit_all: bool) {
        self.forfeit_all_matches_when_roster_disbands = forfeit_all;
        self.updated_at = Utc::now();
    }

    /// Update the roster size bounds
    pub fn set_player_bounds(&mut self, min_players: i32, max_players: i32) {
        self.min_players = min_players;
        self.max_players = max_players;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league(min: i32, max: i32) -> League {
        League::new(Id::new(1), "Premier".to_string(), min, max)
    }

    #[test]
    fn test_player_count_bounds() {
        let league = league(1, 2);
        assert!(league.accepts_player_count(1));
        assert!(league.accepts_player_count(2));
        assert!(!league.accepts_player_count(3));
        assert!(!league.accepts_player_count(0));
    }

    #[test]
    fn test_zero_max_is_unbounded() {
        let league = league(2, 0);
        assert!(!league.accepts_player_count(1));
        assert!(league.accepts_player_count(2));
        assert!(league.accepts_player_count(500));
    }

    #[test]
    fn test_new_league_defaults() {
        let league = league(1, 6);
        assert!(!league.signuppable);
        assert!(league.transfers_require_approval);
        assert!(league.forfeit_all_matches_when_roster_disbands);
        assert_eq!(league.status, LeagueStatus::Hidden);
    }

    #[test]
    fn test_signups_open() {
        let mut league = league(1, 6);
        assert!(!league.signups_open());

        league.set_signuppable(true);
        assert!(!league.signups_open(), "hidden league never accepts signups");

        league.set_status(LeagueStatus::Running);
        assert!(league.signups_open());

        league.set_status(LeagueStatus::Completed);
        assert!(!league.signups_open());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(LeagueStatus::Hidden.as_str(), "hidden");
        assert_eq!(LeagueStatus::Running.as_str(), "running");
        assert_eq!(LeagueStatus::Completed.as_str(), "completed");
    }
}
