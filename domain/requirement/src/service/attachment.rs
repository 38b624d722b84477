use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::UploadAttachmentCommand, exception::RequirementResult, model::entity::Attachment,
};

#[async_trait]
pub trait AttachmentService: Send + Sync {
    /// Store a file for a requirement, at most five per requirement.
    async fn upload_attachment(
        &self,
        command: UploadAttachmentCommand,
    ) -> RequirementResult<Attachment>;

    async fn delete_attachment(&self, id: Uuid) -> RequirementResult<()>;

    async fn get_attachments(&self, requirement_id: Uuid) -> RequirementResult<Vec<Attachment>>;
}

/// Blob storage for attachment contents.
#[async_trait]
pub trait AttachmentStorage: Send + Sync {
    async fn store(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()>;

    async fn remove(&self, path: &str) -> anyhow::Result<()>;
}
