use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::{CreateRequirementCommand, UpdateRequirementCommand},
    exception::RequirementResult,
    model::{
        entity::{Requirement, RequirementActionLog},
        vo::{AssignedUser, RequirementView},
    },
};

/// Requirement lifecycle.
///
/// Every mutation writes exactly one audit row in the same transaction as the change.
/// Notifications are sent afterwards and never undo the change.
#[async_trait]
pub trait RequirementService: Send + Sync {
    async fn create_requirement(
        &self,
        command: CreateRequirementCommand,
        creator_id: Uuid,
    ) -> RequirementResult<Requirement>;

    async fn update_requirement(
        &self,
        id: Uuid,
        command: UpdateRequirementCommand,
        user_id: Uuid,
    ) -> RequirementResult<Requirement>;

    /// Soft delete.
    async fn delete_requirement(&self, id: Uuid, user_id: Uuid) -> RequirementResult<()>;

    async fn restore_requirement(&self, id: Uuid, user_id: Uuid) -> RequirementResult<()>;

    async fn get_requirement(&self, id: Uuid) -> RequirementResult<RequirementView>;

    async fn get_all_requirements_with_users(&self) -> RequirementResult<Vec<RequirementView>>;

    async fn get_deleted_requirements(&self) -> RequirementResult<Vec<RequirementView>>;

    async fn get_assigned_requirements_by_user_id(
        &self,
        user_id: Uuid,
    ) -> RequirementResult<Vec<RequirementView>>;

    async fn get_requirements_created_by_user_id(
        &self,
        user_id: Uuid,
    ) -> RequirementResult<Vec<RequirementView>>;

    async fn get_users_assigned_to_requirement(
        &self,
        id: Uuid,
    ) -> RequirementResult<Vec<AssignedUser>>;

    async fn get_requirement_logs(&self, id: Uuid) -> RequirementResult<Vec<RequirementActionLog>>;
}
