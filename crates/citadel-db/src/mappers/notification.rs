//! Notification entity <-> model mapper

use citadel_core::entities::Notification;
use citadel_core::Id;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            message: model.message,
            link: model.link,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
