use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::{CommentActor, CreateCommentCommand},
    exception::RequirementResult,
    model::entity::Comment,
};

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Persist the comment and broadcast it to the requirement's listeners.
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
        actor: &CommentActor,
    ) -> RequirementResult<Comment>;

    async fn get_comments(&self, requirement_id: Uuid) -> RequirementResult<Vec<Comment>>;

    /// Only the author or an admin may edit.
    async fn update_comment(
        &self,
        id: Uuid,
        description: &str,
        actor: &CommentActor,
    ) -> RequirementResult<Comment>;

    /// Only the author or an admin may delete.
    async fn delete_comment(&self, id: Uuid, actor: &CommentActor) -> RequirementResult<()>;
}

/// Real-time delivery of new comments to clients watching a requirement.
#[async_trait]
pub trait CommentBroadcaster: Send + Sync {
    async fn broadcast_comment(&self, comment: &Comment) -> anyhow::Result<()>;
}
