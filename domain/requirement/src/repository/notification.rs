use architecture::{MutableRepository, Pagination};
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{entity::Notification, vo::UserNotificationView};

/// `insert` writes the notification and one unread row per recipient.
#[async_trait]
pub trait NotificationRepo: MutableRepository<Notification> + Send + Sync {
    /// Newest first.
    async fn get_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> anyhow::Result<Vec<UserNotificationView>>;

    /// Returns `false` when the user never received this notification.
    async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> anyhow::Result<bool>;
}
