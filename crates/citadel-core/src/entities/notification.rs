//! Notification entity - a persisted message for a user with an optional link

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Id,
    pub user_id: Id,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread Notification
    pub fn new(id: Id, user_id: Id, message: String, link: Option<String>) -> Self {
        Self {
            id,
            user_id,
            message,
            link,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the notification as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_starts_unread() {
        let mut n = Notification::new(
            Id::new(1),
            Id::new(2),
            "You were added to a roster".to_string(),
            Some("/rosters/7".to_string()),
        );
        assert!(!n.read);

        n.mark_read();
        assert!(n.read);
    }
}
