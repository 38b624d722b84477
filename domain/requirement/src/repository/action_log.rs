use architecture::MutableRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::RequirementActionLog;

/// Append-only, implementations only support `insert`.
#[async_trait]
pub trait RequirementActionLogRepo: MutableRepository<RequirementActionLog> + Send + Sync {
    /// Oldest first.
    async fn get_by_requirement(
        &self,
        requirement_id: Uuid,
    ) -> anyhow::Result<Vec<RequirementActionLog>>;
}
