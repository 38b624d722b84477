use architecture::{MutableRepository, Pagination};
use async_trait::async_trait;
use database_model::{notification, prelude::*, user_notification};
use domain_requirement::{
    model::{entity::Notification, vo::UserNotificationView},
    repository::NotificationRepo,
};
use sea_orm::{prelude::*, sea_query::Expr, QueryOrder, QuerySelect, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl NotificationRepo for OrmRepo {
    async fn get_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> anyhow::Result<Vec<UserNotificationView>> {
        let rows = UserNotificationEntity::find()
            .filter(UserNotificationColumn::UserId.eq(user_id))
            .find_also_related(NotificationEntity)
            .order_by_desc(NotificationColumn::Timestamp)
            .offset(pagination.offset())
            .limit(pagination.size)
            .all(self.db.get_connection())
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(read_state, notification)| {
                notification.map(|notification| UserNotificationView {
                    notification_id: notification.id,
                    message: notification.message,
                    timestamp: notification.timestamp,
                    is_read: read_state.is_read,
                })
            })
            .collect())
    }

    async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> anyhow::Result<bool> {
        let result = UserNotificationEntity::update_many()
            .col_expr(UserNotificationColumn::IsRead, Expr::value(true))
            .filter(UserNotificationColumn::UserId.eq(user_id))
            .filter(UserNotificationColumn::NotificationId.eq(notification_id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl MutableRepository<Notification> for OrmRepo {
    async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid> {
        let backend = self.backend();
        let mut stmts = vec![NotificationEntity::insert(notification::ActiveModel {
            id: Set(entity.id),
            message: Set(entity.message.to_owned()),
            timestamp: Set(entity.timestamp),
        })
        .build(backend)];
        if !entity.recipient_ids.is_empty() {
            stmts.push(
                UserNotificationEntity::insert_many(entity.recipient_ids.iter().map(|user_id| {
                    user_notification::ActiveModel {
                        user_id: Set(*user_id),
                        notification_id: Set(entity.id),
                        is_read: Set(false),
                    }
                }))
                .build(backend),
            );
        }
        self.push(stmts).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
