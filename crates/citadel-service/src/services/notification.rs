//! Notification service
//!
//! Lifecycle events notify users through `notify`, which is fire-and-forget:
//! a failed insert is logged and swallowed so it can never roll back or fail
//! the mutation that triggered it.

use citadel_core::traits::NewNotification;
use citadel_core::Id;
use tracing::{instrument, warn};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Deliver a notification, swallowing failures
    #[instrument(skip(self, message, link))]
    pub async fn notify(&self, user_id: Id, message: &str, link: Option<&str>) {
        let result = self
            .ctx
            .notification_repo()
            .create(NewNotification { user_id, message, link })
            .await;

        if let Err(e) = result {
            warn!(user_id = %user_id, error = %e, "Failed to deliver notification");
        }
    }

    /// List the user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Id, limit: i64) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().find_by_user(user_id, limit).await?;
        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Mark one of the user's notifications read
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Id, notification_id: Id) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .mark_read(notification_id, user_id)
            .await
            .map_err(ServiceError::from)
    }

    /// Delete all of the user's notifications
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: Id) -> ServiceResult<u64> {
        self.ctx
            .notification_repo()
            .clear(user_id)
            .await
            .map_err(ServiceError::from)
    }
}
