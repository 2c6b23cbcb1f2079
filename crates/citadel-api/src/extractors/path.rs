//! Path parameter extractors
//!
//! Type-safe parsing of numeric ids from path parameters. Ids arrive as
//! strings (they are serialized as strings in responses) and are parsed
//! through `Id::parse`.

use citadel_core::Id;

use crate::response::ApiError;

fn parse_id(raw: &str, what: &str) -> Result<Id, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}

/// Path parameters with league_id
#[derive(Debug, serde::Deserialize)]
pub struct LeagueIdPath {
    pub league_id: String,
}

impl LeagueIdPath {
    pub fn league_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.league_id, "league_id")
    }
}

/// Path parameters with division_id
#[derive(Debug, serde::Deserialize)]
pub struct DivisionIdPath {
    pub division_id: String,
}

impl DivisionIdPath {
    pub fn division_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.division_id, "division_id")
    }
}

/// Path parameters with team_id
#[derive(Debug, serde::Deserialize)]
pub struct TeamIdPath {
    pub team_id: String,
}

impl TeamIdPath {
    pub fn team_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.team_id, "team_id")
    }
}

/// Path parameters with team_id and user_id
#[derive(Debug, serde::Deserialize)]
pub struct TeamUserPath {
    pub team_id: String,
    pub user_id: String,
}

impl TeamUserPath {
    pub fn team_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.team_id, "team_id")
    }

    pub fn user_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}

/// Path parameters with roster_id
#[derive(Debug, serde::Deserialize)]
pub struct RosterIdPath {
    pub roster_id: String,
}

impl RosterIdPath {
    pub fn roster_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.roster_id, "roster_id")
    }
}

/// Path parameters with roster_id and user_id
#[derive(Debug, serde::Deserialize)]
pub struct RosterUserPath {
    pub roster_id: String,
    pub user_id: String,
}

impl RosterUserPath {
    pub fn roster_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.roster_id, "roster_id")
    }

    pub fn user_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    pub fn user_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}

/// Path parameters with invite_id
#[derive(Debug, serde::Deserialize)]
pub struct InviteIdPath {
    pub invite_id: String,
}

impl InviteIdPath {
    pub fn invite_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.invite_id, "invite_id")
    }
}

/// Path parameters with request_id (transfer requests)
#[derive(Debug, serde::Deserialize)]
pub struct RequestIdPath {
    pub request_id: String,
}

impl RequestIdPath {
    pub fn request_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.request_id, "request_id")
    }
}

/// Path parameters with match_id
#[derive(Debug, serde::Deserialize)]
pub struct MatchIdPath {
    pub match_id: String,
}

impl MatchIdPath {
    pub fn match_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.match_id, "match_id")
    }
}

/// Path parameters with notification_id
#[derive(Debug, serde::Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: String,
}

impl NotificationIdPath {
    pub fn notification_id(&self) -> Result<Id, ApiError> {
        parse_id(&self.notification_id, "notification_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_numeric_strings() {
        assert_eq!(parse_id("42", "league_id").unwrap(), Id::new(42));
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("not-a-number", "league_id").is_err());
    }
}
