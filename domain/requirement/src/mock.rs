use crate::{
    model::{
        entity::{
            Attachment, Category, Comment, Notification, Priority, Requirement,
            RequirementActionLog, RequirementType,
        },
        vo::{LookupRef, NotificationPayload, UserNotificationView},
    },
    repository::{
        AttachmentRepo, CategoryRepo, CommentRepo, NotificationRepo, RequirementActionLogRepo,
        RequirementRepo,
    },
    service::{AttachmentStorage, CommentBroadcaster, RequirementNotifier, RequirementObserver},
};
use architecture::{DBRepository, MutableRepository, Pagination, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

mock! {
    pub RequirementRepo {}
    #[async_trait]
    impl RequirementRepo for RequirementRepo {
        async fn get(&self, id: Uuid, include_deleted: bool) -> anyhow::Result<Option<Requirement>>;
        async fn list(&self, include_deleted: bool) -> anyhow::Result<Vec<Requirement>>;
        async fn list_deleted(&self) -> anyhow::Result<Vec<Requirement>>;
        async fn get_assigned_to_user(
            &self,
            user_id: Uuid,
            include_deleted: bool,
        ) -> anyhow::Result<Vec<Requirement>>;
        async fn get_created_by_user(
            &self,
            user_id: Uuid,
            include_deleted: bool,
        ) -> anyhow::Result<Vec<Requirement>>;
        async fn next_sequence(&self) -> anyhow::Result<i64>;
        async fn is_lookup_in_use(&self, lookup: LookupRef) -> anyhow::Result<bool>;
    }
    #[async_trait]
    impl MutableRepository<Requirement> for RequirementRepo {
        async fn insert(&self, entity: &Requirement) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Requirement) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub CategoryRepo {}
    #[async_trait]
    impl CategoryRepo for CategoryRepo {
        async fn get_by_requirement_type(&self, requirement_type_id: i32)
            -> anyhow::Result<Vec<Category>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Category> for CategoryRepo {
        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Category>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Category>>;
    }
    #[async_trait]
    impl MutableRepository<Category> for CategoryRepo {
        async fn insert(&self, entity: &Category) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Category) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
    }
    impl DBRepository<Category> for CategoryRepo {}
}

mock! {
    pub RequirementTypeRepo {}
    #[async_trait]
    impl ReadOnlyRepository<RequirementType> for RequirementTypeRepo {
        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<RequirementType>>;
        async fn get_all(&self) -> anyhow::Result<Vec<RequirementType>>;
    }
    #[async_trait]
    impl MutableRepository<RequirementType> for RequirementTypeRepo {
        async fn insert(&self, entity: &RequirementType) -> anyhow::Result<i32>;
        async fn update(&self, entity: &RequirementType) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
    }
    impl DBRepository<RequirementType> for RequirementTypeRepo {}
}

mock! {
    pub PriorityRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Priority> for PriorityRepo {
        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Priority>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Priority>>;
    }
    #[async_trait]
    impl MutableRepository<Priority> for PriorityRepo {
        async fn insert(&self, entity: &Priority) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Priority) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
    }
    impl DBRepository<Priority> for PriorityRepo {}
}

mock! {
    pub CommentRepo {}
    #[async_trait]
    impl CommentRepo for CommentRepo {
        async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Comment>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Comment> for CommentRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Comment>>;
    }
    #[async_trait]
    impl MutableRepository<Comment> for CommentRepo {
        async fn insert(&self, entity: &Comment) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Comment) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Comment> for CommentRepo {}
}

mock! {
    pub AttachmentRepo {}
    #[async_trait]
    impl AttachmentRepo for AttachmentRepo {
        async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Attachment>>;
        async fn count_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<u64>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Attachment> for AttachmentRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Attachment>>;
    }
    #[async_trait]
    impl MutableRepository<Attachment> for AttachmentRepo {
        async fn insert(&self, entity: &Attachment) -> anyhow::Result<Uuid>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Attachment> for AttachmentRepo {}
}

mock! {
    pub RequirementActionLogRepo {}
    #[async_trait]
    impl RequirementActionLogRepo for RequirementActionLogRepo {
        async fn get_by_requirement(
            &self,
            requirement_id: Uuid,
        ) -> anyhow::Result<Vec<RequirementActionLog>>;
    }
    #[async_trait]
    impl MutableRepository<RequirementActionLog> for RequirementActionLogRepo {
        async fn insert(&self, entity: &RequirementActionLog) -> anyhow::Result<Uuid>;
    }
}

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn get_by_user(
            &self,
            user_id: Uuid,
            pagination: Pagination,
        ) -> anyhow::Result<Vec<UserNotificationView>>;
        async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> anyhow::Result<bool>;
    }
    #[async_trait]
    impl MutableRepository<Notification> for NotificationRepo {
        async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub RequirementNotifier {}
    #[async_trait]
    impl RequirementNotifier for RequirementNotifier {
        async fn notify_all(&self, message: &str, payload: &NotificationPayload);
    }
}

mock! {
    pub RequirementObserver {}
    #[async_trait]
    impl RequirementObserver for RequirementObserver {
        fn name(&self) -> &'static str;
        async fn update(&self, message: &str, payload: &NotificationPayload) -> anyhow::Result<()>;
    }
}

mock! {
    pub CommentBroadcaster {}
    #[async_trait]
    impl CommentBroadcaster for CommentBroadcaster {
        async fn broadcast_comment(&self, comment: &Comment) -> anyhow::Result<()>;
    }
}

mock! {
    pub AttachmentStorage {}
    #[async_trait]
    impl AttachmentStorage for AttachmentStorage {
        async fn store(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()>;
        async fn remove(&self, path: &str) -> anyhow::Result<()>;
    }
}
