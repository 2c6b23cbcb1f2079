//! Division entity - a grouping of rosters within a league (e.g. skill tier)

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Division entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub id: Id,
    pub league_id: Id,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Division {
    /// Create a new Division
    pub fn new(id: Id, league_id: Id, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            league_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the division name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_creation() {
        let division = Division::new(Id::new(10), Id::new(1), "Open".to_string());
        assert_eq!(division.league_id, Id::new(1));
        assert_eq!(division.name, "Open");
    }
}
