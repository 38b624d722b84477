mod common;

use std::sync::Arc;

use domain_requirement::{
    command::UploadAttachmentCommand,
    exception::RequirementException,
    mock::{MockAttachmentRepo, MockAttachmentStorage, MockRequirementRepo},
    model::entity::Attachment,
    service::AttachmentService,
};
use service_requirement::AttachmentServiceImpl;
use uuid::Uuid;

fn service(
    attachment_repo: MockAttachmentRepo,
    requirement_repo: MockRequirementRepo,
    storage: MockAttachmentStorage,
) -> AttachmentServiceImpl {
    AttachmentServiceImpl::builder()
        .attachment_repo(Arc::new(attachment_repo))
        .requirement_repo(Arc::new(requirement_repo))
        .storage(Arc::new(storage))
        .build()
}

fn command(requirement_id: Uuid, content: Vec<u8>) -> UploadAttachmentCommand {
    UploadAttachmentCommand {
        requirement_id,
        comment_id: None,
        file_name: "report.pdf".to_string(),
        content,
    }
}

fn existing_requirement() -> MockRequirementRepo {
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo
        .expect_get()
        .returning(|_, _| Ok(Some(common::requirement(vec![]))));
    requirement_repo
}

#[tokio::test]
async fn test_upload_empty_file() {
    let service = service(
        MockAttachmentRepo::new(),
        MockRequirementRepo::new(),
        MockAttachmentStorage::new(),
    );
    let error = service.upload_attachment(command(Uuid::new_v4(), vec![])).await.unwrap_err();
    assert!(matches!(error, RequirementException::EmptyFile));
}

#[tokio::test]
async fn test_upload_rejects_sixth_attachment() {
    let mut attachment_repo = MockAttachmentRepo::new();
    attachment_repo.expect_count_by_requirement().returning(|_| Ok(5));
    attachment_repo.expect_insert().never();
    let mut storage = MockAttachmentStorage::new();
    storage.expect_store().never();
    let service = service(attachment_repo, existing_requirement(), storage);

    let error = service.upload_attachment(command(Uuid::new_v4(), vec![1])).await.unwrap_err();
    assert!(matches!(error, RequirementException::AttachmentLimit { limit: 5, .. }));
    assert!(error.to_string().ends_with("already has 5 attachments."));
}

#[tokio::test]
async fn test_upload_stores_object_and_row() {
    let requirement_id = Uuid::new_v4();
    let mut attachment_repo = MockAttachmentRepo::new();
    attachment_repo.expect_count_by_requirement().returning(|_| Ok(4));
    attachment_repo
        .expect_insert()
        .withf(move |el: &Attachment| el.requirement_id == requirement_id)
        .times(1)
        .returning(|el| Ok(el.id));
    attachment_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let mut storage = MockAttachmentStorage::new();
    storage
        .expect_store()
        .withf(|path, content| {
            path.starts_with("attachments/") && path.ends_with("_report.pdf") && content == &[7, 8]
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let service = service(attachment_repo, existing_requirement(), storage);

    let attachment = service
        .upload_attachment(command(requirement_id, vec![7, 8]))
        .await
        .unwrap();
    assert_eq!(attachment.file_path, format!("attachments/{}_report.pdf", attachment.id));
}

#[tokio::test]
async fn test_upload_removes_object_when_row_fails() {
    let mut attachment_repo = MockAttachmentRepo::new();
    attachment_repo.expect_count_by_requirement().returning(|_| Ok(0));
    attachment_repo.expect_insert().returning(|el| Ok(el.id));
    attachment_repo
        .expect_save_changed()
        .returning(|| Err(anyhow::anyhow!("foreign key violation")));
    let mut storage = MockAttachmentStorage::new();
    storage.expect_store().returning(|_, _| Ok(()));
    storage.expect_remove().times(1).returning(|_| Ok(()));
    let service = service(attachment_repo, existing_requirement(), storage);

    let error = service.upload_attachment(command(Uuid::new_v4(), vec![1])).await.unwrap_err();
    assert!(matches!(error, RequirementException::InternalError { .. }));
}

#[tokio::test]
async fn test_delete_missing_attachment() {
    let mut attachment_repo = MockAttachmentRepo::new();
    attachment_repo.expect_find_by_id().returning(|_| Ok(None));
    let service = service(
        attachment_repo,
        MockRequirementRepo::new(),
        MockAttachmentStorage::new(),
    );

    let error = service.delete_attachment(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, RequirementException::AttachmentNotFound { .. }));
}
