use architecture::MutableRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{entity::Requirement, vo::LookupRef};

/// Requirements with their assignments and relations.
///
/// Every read states whether soft deleted rows take part. `insert` also writes the
/// assignment and relation rows, `update` rewrites the requirement columns only.
#[async_trait]
pub trait RequirementRepo: MutableRepository<Requirement> + Send + Sync {
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

    /// Next value of the code sequence, never handed out twice.
    async fn next_sequence(&self) -> anyhow::Result<i64>;

    /// Whether any requirement, soft deleted ones included, points at the lookup row.
    async fn is_lookup_in_use(&self, lookup: LookupRef) -> anyhow::Result<bool>;
}
