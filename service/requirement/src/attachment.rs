use std::sync::Arc;

use architecture::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_requirement::{
    command::UploadAttachmentCommand,
    exception::{RequirementException, RequirementResult},
    model::entity::Attachment,
    repository::{AttachmentRepo, RequirementRepo},
    service::{AttachmentService, AttachmentStorage},
    MAX_ATTACHMENTS_PER_REQUIREMENT,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AttachmentServiceImpl {
    attachment_repo: Arc<dyn AttachmentRepo>,
    requirement_repo: Arc<dyn RequirementRepo>,
    storage: Arc<dyn AttachmentStorage>,
}

#[async_trait]
impl AttachmentService for AttachmentServiceImpl {
    async fn upload_attachment(
        &self,
        command: UploadAttachmentCommand,
    ) -> RequirementResult<Attachment> {
        if command.content.is_empty() {
            return Err(RequirementException::EmptyFile);
        }
        let requirement_id = command.requirement_id;
        if self.requirement_repo.get(requirement_id, false).await?.is_none() {
            return Err(RequirementException::RequirementNotFound { id: requirement_id });
        }
        if self.attachment_repo.count_by_requirement(requirement_id).await?
            >= MAX_ATTACHMENTS_PER_REQUIREMENT
        {
            return Err(RequirementException::AttachmentLimit {
                requirement_id,
                limit: MAX_ATTACHMENTS_PER_REQUIREMENT,
            });
        }

        let attachment = Attachment::new(requirement_id, command.comment_id, &command.file_name);
        self.storage.store(&attachment.file_path, command.content).await?;
        let saved = async {
            self.attachment_repo.insert(&attachment).await?;
            self.attachment_repo.save_changed().await
        }
        .await;
        if let Err(e) = saved {
            if let Err(remove_error) = self.storage.remove(&attachment.file_path).await {
                tracing::warn!(
                    "Orphan attachment object {}: {remove_error:?}",
                    attachment.file_path
                );
            }
            return Err(e.into());
        }
        tracing::info!("Attachment {} stored for requirement {requirement_id}.", attachment.id);
        Ok(attachment)
    }

    async fn delete_attachment(&self, id: Uuid) -> RequirementResult<()> {
        let attachment = self
            .attachment_repo
            .find_by_id(id)
            .await?
            .ok_or(RequirementException::AttachmentNotFound { id })?;
        self.attachment_repo.delete_by_id(id).await?;
        self.attachment_repo.save_changed().await?;
        if let Err(e) = self.storage.remove(&attachment.file_path).await {
            tracing::warn!("Failed to remove attachment object {}: {e:?}", attachment.file_path);
        }
        Ok(())
    }

    async fn get_attachments(&self, requirement_id: Uuid) -> RequirementResult<Vec<Attachment>> {
        Ok(self.attachment_repo.get_by_requirement(requirement_id).await?)
    }
}
