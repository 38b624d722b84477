use std::sync::Arc;

use architecture::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_requirement::{
    command::{CommentActor, CreateCommentCommand},
    exception::{RequirementException, RequirementResult},
    model::entity::Comment,
    repository::{CommentRepo, RequirementRepo},
    service::{CommentBroadcaster, CommentService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct CommentServiceImpl {
    comment_repo: Arc<dyn CommentRepo>,
    requirement_repo: Arc<dyn RequirementRepo>,
    broadcaster: Arc<dyn CommentBroadcaster>,
}

fn validate_description(description: &str) -> RequirementResult<()> {
    if description.trim().is_empty() {
        return Err(RequirementException::Validation {
            message: "Comment description is required.".to_string(),
        });
    }
    Ok(())
}

impl CommentServiceImpl {
    async fn check_requirement(&self, id: Uuid) -> RequirementResult<()> {
        match self.requirement_repo.get(id, false).await? {
            Some(_) => Ok(()),
            None => Err(RequirementException::RequirementNotFound { id }),
        }
    }

    async fn owned_comment(&self, id: Uuid, actor: &CommentActor) -> RequirementResult<Comment> {
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or(RequirementException::CommentNotFound { id })?;
        if comment.user_id != actor.user_id && !actor.is_admin {
            return Err(RequirementException::Forbidden {
                reason: "Only the author or an administrator can change this comment.".to_string(),
            });
        }
        Ok(comment)
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
        actor: &CommentActor,
    ) -> RequirementResult<Comment> {
        validate_description(&command.description)?;
        self.check_requirement(command.requirement_id).await?;
        let comment = Comment {
            id: Uuid::new_v4(),
            requirement_id: command.requirement_id,
            user_id: actor.user_id,
            user_name: actor.user_name.clone(),
            description: command.description,
            created_time: Utc::now(),
        };
        self.comment_repo.insert(&comment).await?;
        self.comment_repo.save_changed().await?;

        if let Err(e) = self.broadcaster.broadcast_comment(&comment).await {
            tracing::warn!("Broadcast of comment {} failed: {e:?}", comment.id);
        }
        Ok(comment)
    }

    async fn get_comments(&self, requirement_id: Uuid) -> RequirementResult<Vec<Comment>> {
        self.check_requirement(requirement_id).await?;
        Ok(self.comment_repo.get_by_requirement(requirement_id).await?)
    }

    async fn update_comment(
        &self,
        id: Uuid,
        description: &str,
        actor: &CommentActor,
    ) -> RequirementResult<Comment> {
        validate_description(description)?;
        let mut comment = self.owned_comment(id, actor).await?;
        comment.description = description.to_string();
        self.comment_repo.update(&comment).await?;
        self.comment_repo.save_changed().await?;
        Ok(comment)
    }

    async fn delete_comment(&self, id: Uuid, actor: &CommentActor) -> RequirementResult<()> {
        self.owned_comment(id, actor).await?;
        self.comment_repo.delete_by_id(id).await?;
        self.comment_repo.save_changed().await?;
        Ok(())
    }
}
