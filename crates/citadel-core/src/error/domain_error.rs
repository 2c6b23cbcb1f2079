//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("League not found: {0}")]
    LeagueNotFound(Id),

    #[error("Division not found: {0}")]
    DivisionNotFound(Id),

    #[error("Team not found: {0}")]
    TeamNotFound(Id),

    #[error("Roster not found: {0}")]
    RosterNotFound(Id),

    #[error("Match not found: {0}")]
    MatchNotFound(Id),

    #[error("Transfer request not found: {0}")]
    TransferRequestNotFound(Id),

    #[error("Invite not found: {0}")]
    InviteNotFound(Id),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Description too long: max {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("Player count {count} outside league bounds [{min}, {max}]")]
    PlayerCountOutOfBounds { count: i64, min: i32, max: i32 },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Team name already in use")]
    TeamNameTaken,

    #[error("Roster name already in use within this division")]
    RosterNameTaken,

    #[error("Division name already in use within this league")]
    DivisionNameTaken,

    #[error("Team already has a roster in this league")]
    TeamAlreadyRostered,

    #[error("User is already on this team")]
    AlreadyOnTeam,

    #[error("User is already on this roster")]
    AlreadyOnRoster,

    #[error("A pending transfer request already exists for this user")]
    DuplicateTransferRequest,

    #[error("A pending invite already exists for this user")]
    DuplicateInvite,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Roster is already approved")]
    RosterAlreadyApproved,

    #[error("Roster is disbanded")]
    RosterDisbanded,

    #[error("Roster is not disbanded")]
    RosterNotDisbanded,

    #[error("Team still has active rosters")]
    TeamHasActiveRosters,

    #[error("Transfer request has already been resolved")]
    TransferRequestResolved,

    #[error("Invite has already been resolved")]
    InviteResolved,

    #[error("User is not on this team")]
    NotOnTeam,

    #[error("User is not on this roster")]
    NotOnRoster,

    #[error("Captain cannot be removed from the team")]
    CannotRemoveCaptain,

    #[error("League signups are closed")]
    SignupsClosed,

    #[error("League rosters are locked")]
    RostersLocked,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::LeagueNotFound(_) => "UNKNOWN_LEAGUE",
            Self::DivisionNotFound(_) => "UNKNOWN_DIVISION",
            Self::TeamNotFound(_) => "UNKNOWN_TEAM",
            Self::RosterNotFound(_) => "UNKNOWN_ROSTER",
            Self::MatchNotFound(_) => "UNKNOWN_MATCH",
            Self::TransferRequestNotFound(_) => "UNKNOWN_TRANSFER_REQUEST",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidName(_) => "INVALID_NAME",
            Self::DescriptionTooLong { .. } => "DESCRIPTION_TOO_LONG",
            Self::PlayerCountOutOfBounds { .. } => "PLAYER_COUNT_OUT_OF_BOUNDS",

            // Conflict
            Self::TeamNameTaken => "TEAM_NAME_TAKEN",
            Self::RosterNameTaken => "ROSTER_NAME_TAKEN",
            Self::DivisionNameTaken => "DIVISION_NAME_TAKEN",
            Self::TeamAlreadyRostered => "TEAM_ALREADY_ROSTERED",
            Self::AlreadyOnTeam => "ALREADY_ON_TEAM",
            Self::AlreadyOnRoster => "ALREADY_ON_ROSTER",
            Self::DuplicateTransferRequest => "DUPLICATE_TRANSFER_REQUEST",
            Self::DuplicateInvite => "DUPLICATE_INVITE",

            // Business Rules
            Self::RosterAlreadyApproved => "ROSTER_ALREADY_APPROVED",
            Self::RosterDisbanded => "ROSTER_DISBANDED",
            Self::RosterNotDisbanded => "ROSTER_NOT_DISBANDED",
            Self::TeamHasActiveRosters => "TEAM_HAS_ACTIVE_ROSTERS",
            Self::TransferRequestResolved => "TRANSFER_REQUEST_RESOLVED",
            Self::InviteResolved => "INVITE_RESOLVED",
            Self::NotOnTeam => "NOT_ON_TEAM",
            Self::NotOnRoster => "NOT_ON_ROSTER",
            Self::CannotRemoveCaptain => "CANNOT_REMOVE_CAPTAIN",
            Self::SignupsClosed => "SIGNUPS_CLOSED",
            Self::RostersLocked => "ROSTERS_LOCKED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::LeagueNotFound(_)
                | Self::DivisionNotFound(_)
                | Self::TeamNotFound(_)
                | Self::RosterNotFound(_)
                | Self::MatchNotFound(_)
                | Self::TransferRequestNotFound(_)
                | Self::InviteNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidName(_)
                | Self::DescriptionTooLong { .. }
                | Self::PlayerCountOutOfBounds { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::TeamNameTaken
                | Self::RosterNameTaken
                | Self::DivisionNameTaken
                | Self::TeamAlreadyRostered
                | Self::AlreadyOnTeam
                | Self::AlreadyOnRoster
                | Self::DuplicateTransferRequest
                | Self::DuplicateInvite
        )
    }

    /// Check if this is a state-precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::RosterAlreadyApproved
                | Self::RosterDisbanded
                | Self::RosterNotDisbanded
                | Self::TeamHasActiveRosters
                | Self::TransferRequestResolved
                | Self::InviteResolved
                | Self::NotOnTeam
                | Self::NotOnRoster
                | Self::CannotRemoveCaptain
                | Self::SignupsClosed
                | Self::RostersLocked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::RosterNotFound(Id::new(1));
        assert_eq!(err.code(), "UNKNOWN_ROSTER");

        let err = DomainError::TeamAlreadyRostered;
        assert_eq!(err.code(), "TEAM_ALREADY_ROSTERED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::RosterNotFound(Id::new(1)).is_not_found());
        assert!(DomainError::LeagueNotFound(Id::new(1)).is_not_found());
        assert!(!DomainError::TeamNameTaken.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::PlayerCountOutOfBounds { count: 3, min: 1, max: 2 }.is_validation());
        assert!(DomainError::InvalidName("empty".to_string()).is_validation());
        assert!(!DomainError::RosterDisbanded.is_validation());
    }

    #[test]
    fn test_is_precondition() {
        assert!(DomainError::RosterAlreadyApproved.is_precondition());
        assert!(DomainError::TeamHasActiveRosters.is_precondition());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_precondition());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::RosterNotFound(Id::new(123));
        assert_eq!(err.to_string(), "Roster not found: 123");

        let err = DomainError::PlayerCountOutOfBounds { count: 3, min: 1, max: 2 };
        assert_eq!(
            err.to_string(),
            "Player count 3 outside league bounds [1, 2]"
        );
    }
}
