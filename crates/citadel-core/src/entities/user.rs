//! User entity - a platform account
//!
//! Accounts are provisioned by the upstream identity layer; the domain only
//! tracks the display name and whether the user holds league-admin rights.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Id, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the user holds league-admin rights
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Grant or revoke league-admin rights
    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(Id::new(1), "flame".to_string());
        assert_eq!(user.name, "flame");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_set_admin() {
        let mut user = User::new(Id::new(1), "flame".to_string());
        user.set_admin(true);
        assert!(user.is_admin());
    }
}
