use async_trait::async_trait;
use uuid::Uuid;

use crate::{exception::RequirementResult, model::vo::UserNotificationView};

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// `page` and `size` start at 1.
    async fn get_user_notifications(
        &self,
        user_id: Uuid,
        page: u64,
        size: u64,
    ) -> RequirementResult<Vec<UserNotificationView>>;

    async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> RequirementResult<()>;
}
