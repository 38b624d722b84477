use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Attachment;

#[async_trait]
pub trait AttachmentRepo: DBRepository<Attachment> + Send + Sync {
    async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Attachment>>;

    async fn count_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<u64>;
}
