pub use sea_orm;

pub mod admin_user;
pub mod attachment;
pub mod category;
pub mod comment;
pub mod external_user;
pub mod internal_user;
pub mod notification;
pub mod priority;
pub mod requirement;
pub mod requirement_action_log;
pub mod requirement_assignment;
pub mod requirement_relation;
pub mod requirement_type;
pub mod role;
pub mod user;
pub mod user_notification;

pub mod prelude {
    pub use super::{
        admin_user::{Column as AdminUserColumn, Entity as AdminUserEntity},
        attachment::{Column as AttachmentColumn, Entity as AttachmentEntity},
        category::{Column as CategoryColumn, Entity as CategoryEntity},
        comment::{Column as CommentColumn, Entity as CommentEntity},
        external_user::{Column as ExternalUserColumn, Entity as ExternalUserEntity},
        internal_user::{Column as InternalUserColumn, Entity as InternalUserEntity},
        notification::{Column as NotificationColumn, Entity as NotificationEntity},
        priority::{Column as PriorityColumn, Entity as PriorityEntity},
        requirement::{Column as RequirementColumn, Entity as RequirementEntity},
        requirement_action_log::{
            Column as RequirementActionLogColumn, Entity as RequirementActionLogEntity,
        },
        requirement_assignment::{
            Column as RequirementAssignmentColumn, Entity as RequirementAssignmentEntity,
        },
        requirement_relation::{
            Column as RequirementRelationColumn, Entity as RequirementRelationEntity,
        },
        requirement_type::{Column as RequirementTypeColumn, Entity as RequirementTypeEntity},
        role::{Column as RoleColumn, Entity as RoleEntity},
        user::{Column as UserColumn, Entity as UserEntity},
        user_notification::{Column as UserNotificationColumn, Entity as UserNotificationEntity},
    };
}
