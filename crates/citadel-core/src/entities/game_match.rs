//! Match entity - a scheduled game between two rosters of a division
//!
//! Matches are created by scheduling and mutated by the roster-disband
//! cascade; result submission flows are handled elsewhere. A match with no
//! away roster is a bye.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Progression state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Pending,
    SubmittedByHome,
    SubmittedByAway,
    Confirmed,
}

impl MatchStatus {
    /// String representation used in storage and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::SubmittedByHome => "submitted_by_home",
            Self::SubmittedByAway => "submitted_by_away",
            Self::Confirmed => "confirmed",
        }
    }
}

/// Which side of a match forfeited, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForfeitBy {
    NoForfeit,
    HomeTeamForfeit,
    AwayTeamForfeit,
    MutualForfeit,
    TechnicalForfeit,
}

impl ForfeitBy {
    /// String representation used in storage and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoForfeit => "no_forfeit",
            Self::HomeTeamForfeit => "home_team_forfeit",
            Self::AwayTeamForfeit => "away_team_forfeit",
            Self::MutualForfeit => "mutual_forfeit",
            Self::TechnicalForfeit => "technical_forfeit",
        }
    }

    /// The forfeit recorded against the given side
    pub fn against(side: MatchSide) -> Self {
        match side {
            MatchSide::Home => Self::HomeTeamForfeit,
            MatchSide::Away => Self::AwayTeamForfeit,
        }
    }
}

/// Side of a match a roster occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    Home,
    Away,
}

/// Match entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: Id,
    pub division_id: Id,
    pub home_roster_id: Id,
    /// Absent for a bye week
    pub away_roster_id: Option<Id>,
    pub round: i32,
    pub status: MatchStatus,
    pub forfeit_by: ForfeitBy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Create a new pending Match
    pub fn new(
        id: Id,
        division_id: Id,
        home_roster_id: Id,
        away_roster_id: Option<Id>,
        round: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            division_id,
            home_roster_id,
            away_roster_id,
            round,
            status: MatchStatus::Pending,
            forfeit_by: ForfeitBy::NoForfeit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this match is a bye week
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.away_roster_id.is_none()
    }

    /// Check if the result has been confirmed
    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.status == MatchStatus::Confirmed
    }

    /// Which side the given roster occupies, if it plays in this match
    pub fn side_of(&self, roster_id: Id) -> Option<MatchSide> {
        if self.home_roster_id == roster_id {
            Some(MatchSide::Home)
        } else if self.away_roster_id == Some(roster_id) {
            Some(MatchSide::Away)
        } else {
            None
        }
    }
}
