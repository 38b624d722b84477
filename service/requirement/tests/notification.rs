use std::sync::Arc;

use architecture::Pagination;
use domain_requirement::{
    exception::RequirementException, mock::MockNotificationRepo, service::NotificationService,
};
use service_requirement::NotificationServiceImpl;
use uuid::Uuid;

fn service(notification_repo: MockNotificationRepo) -> NotificationServiceImpl {
    NotificationServiceImpl::builder()
        .notification_repo(Arc::new(notification_repo))
        .build()
}

#[tokio::test]
async fn test_rejects_out_of_range_paging() {
    let mut notification_repo = MockNotificationRepo::new();
    notification_repo.expect_get_by_user().never();
    let service = service(notification_repo);

    for (page, size) in [(0, 10), (1, 0), (u64::MAX, 2), (1, 1000)] {
        let error = service
            .get_user_notifications(Uuid::new_v4(), page, size)
            .await
            .unwrap_err();
        assert!(matches!(error, RequirementException::InvalidPagination));
    }
}

#[tokio::test]
async fn test_passes_page_to_repository() {
    let mut notification_repo = MockNotificationRepo::new();
    notification_repo
        .expect_get_by_user()
        .withf(|_, pagination| *pagination == Pagination { page: 2, size: 5 })
        .times(1)
        .returning(|_, _| Ok(vec![]));
    let service = service(notification_repo);

    assert!(service.get_user_notifications(Uuid::new_v4(), 2, 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mark_unknown_notification() {
    let mut notification_repo = MockNotificationRepo::new();
    notification_repo.expect_mark_as_read().returning(|_, _| Ok(false));
    let service = service(notification_repo);

    let error = service.mark_as_read(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, RequirementException::NotificationNotFound { .. }));
}
