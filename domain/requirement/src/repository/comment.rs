use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Comment;

#[async_trait]
pub trait CommentRepo: DBRepository<Comment> + Send + Sync {
    /// Oldest first.
    async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Comment>>;
}
