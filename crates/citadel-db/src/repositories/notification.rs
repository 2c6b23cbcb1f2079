//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use citadel_core::entities::Notification;
use citadel_core::error::DomainError;
use citadel_core::traits::{NewNotification, NotificationRepository, RepoResult};
use citadel_core::Id;

use crate::models::NotificationModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Id, limit: i64) -> RepoResult<Vec<Notification>> {
        let limit = limit.clamp(1, 200);

        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, message, link, "read", created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self, notification))]
    async fn create(&self, notification: NewNotification<'_>) -> RepoResult<Notification> {
        let user_id = notification.user_id;
        let model = sqlx::query_as::<_, NotificationModel>(
            r#"
            INSERT INTO notifications (user_id, message, link)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message, link, "read", created_at
            "#,
        )
        .bind(notification.user_id.into_inner())
        .bind(notification.message)
        .bind(notification.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::UserNotFound(user_id)))?;

        Ok(Notification::from(model))
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Id, user_id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET "read" = TRUE WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotificationNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self, user_id: Id) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM notifications WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
