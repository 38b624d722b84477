mod common;

use std::sync::Arc;

use chrono::Utc;
use domain_requirement::{
    command::{CommentActor, CreateCommentCommand},
    exception::RequirementException,
    mock::{MockCommentBroadcaster, MockCommentRepo, MockRequirementRepo},
    model::entity::Comment,
    service::CommentService,
};
use service_requirement::CommentServiceImpl;
use uuid::Uuid;

fn service(
    comment_repo: MockCommentRepo,
    requirement_repo: MockRequirementRepo,
    broadcaster: MockCommentBroadcaster,
) -> CommentServiceImpl {
    CommentServiceImpl::builder()
        .comment_repo(Arc::new(comment_repo))
        .requirement_repo(Arc::new(requirement_repo))
        .broadcaster(Arc::new(broadcaster))
        .build()
}

fn actor(user_id: Uuid, is_admin: bool) -> CommentActor {
    CommentActor {
        user_id,
        user_name: "ana@example.com".to_string(),
        is_admin,
    }
}

fn comment(user_id: Uuid) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        requirement_id: Uuid::new_v4(),
        user_id,
        user_name: "ana@example.com".to_string(),
        description: "Looking into it".to_string(),
        created_time: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_comment_broadcasts_best_effort() {
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo
        .expect_get()
        .returning(|_, _| Ok(Some(common::requirement(vec![]))));
    let mut comment_repo = MockCommentRepo::new();
    comment_repo.expect_insert().times(1).returning(|el| Ok(el.id));
    comment_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let mut broadcaster = MockCommentBroadcaster::new();
    broadcaster
        .expect_broadcast_comment()
        .withf(|el: &Comment| el.description == "On my way")
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("no listeners")));
    let service = service(comment_repo, requirement_repo, broadcaster);

    let author = Uuid::new_v4();
    let comment = service
        .create_comment(
            CreateCommentCommand {
                requirement_id: Uuid::new_v4(),
                description: "On my way".to_string(),
            },
            &actor(author, false),
        )
        .await
        .unwrap();
    assert_eq!(comment.user_id, author);
    assert_eq!(comment.user_name, "ana@example.com");
}

#[tokio::test]
async fn test_create_comment_on_missing_requirement() {
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo.expect_get().returning(|_, _| Ok(None));
    let mut comment_repo = MockCommentRepo::new();
    comment_repo.expect_insert().never();
    let service = service(comment_repo, requirement_repo, MockCommentBroadcaster::new());

    let error = service
        .create_comment(
            CreateCommentCommand {
                requirement_id: Uuid::new_v4(),
                description: "Hello".to_string(),
            },
            &actor(Uuid::new_v4(), false),
        )
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::RequirementNotFound { .. }));
}

#[tokio::test]
async fn test_only_author_or_admin_edits() {
    let author = Uuid::new_v4();
    let existing = comment(author);
    let id = existing.id;
    let mut comment_repo = MockCommentRepo::new();
    comment_repo.expect_find_by_id().returning(move |_| Ok(Some(existing.clone())));
    comment_repo
        .expect_update()
        .withf(|el: &Comment| el.description == "Fixed")
        .times(1)
        .returning(|_| Ok(()));
    comment_repo.expect_save_changed().returning(|| Ok(true));
    let service = service(comment_repo, MockRequirementRepo::new(), MockCommentBroadcaster::new());

    let error = service
        .update_comment(id, "Fixed", &actor(Uuid::new_v4(), false))
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::Forbidden { .. }));

    let updated = service.update_comment(id, "Fixed", &actor(Uuid::new_v4(), true)).await.unwrap();
    assert_eq!(updated.description, "Fixed");
}
