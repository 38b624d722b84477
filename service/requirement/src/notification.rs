use std::sync::Arc;

use architecture::Pagination;
use async_trait::async_trait;
use domain_requirement::{
    exception::{RequirementException, RequirementResult},
    model::vo::UserNotificationView,
    repository::NotificationRepo,
    service::NotificationService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn get_user_notifications(
        &self,
        user_id: Uuid,
        page: u64,
        size: u64,
    ) -> RequirementResult<Vec<UserNotificationView>> {
        let pagination =
            Pagination::new(page, size).ok_or(RequirementException::InvalidPagination)?;
        Ok(self.notification_repo.get_by_user(user_id, pagination).await?)
    }

    async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> RequirementResult<()> {
        if !self.notification_repo.mark_as_read(user_id, notification_id).await? {
            return Err(RequirementException::NotificationNotFound {
                id: notification_id,
            });
        }
        Ok(())
    }
}
