//! Team entity - a persistent group of players that registers rosters

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub notice: Option<String>,
    pub captain_id: Id,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new Team captained by its founder
    pub fn new(id: Id, name: String, captain_id: Id) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            notice: None,
            captain_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the team captain
    #[inline]
    pub fn is_captain(&self, user_id: Id) -> bool {
        self.captain_id == user_id
    }

    /// Update the team name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the team description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Update the team notice board text
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new(Id::new(5), "Froyotech".to_string(), Id::new(100));
        assert_eq!(team.name, "Froyotech");
        assert!(team.is_captain(Id::new(100)));
        assert!(!team.is_captain(Id::new(200)));
    }
}
