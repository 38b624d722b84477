mod common;

use chrono::{Datelike, Utc};
use common::{create_command, hardware_category, internal, requirement, RequirementMocks};
use domain_requirement::{
    command::UpdateRequirementCommand,
    exception::RequirementException,
    model::{
        entity::{
            Category, Notification, Priority, Requirement, RequirementActionLog, RequirementType,
        },
        vo::{NotificationPayload, RequirementAction, RequirementStatus},
    },
    service::RequirementService,
};
use uuid::Uuid;

fn expect_no_writes(mocks: &mut RequirementMocks) {
    mocks.requirement_repo.expect_next_sequence().never();
    mocks.requirement_repo.expect_insert().never();
    mocks.action_log_repo.expect_insert().never();
    mocks.requirement_repo.expect_save_changed().never();
}

#[tokio::test]
async fn test_create_rejects_category_of_other_type() {
    let mut mocks = RequirementMocks::new();
    mocks.category_repo.expect_find_by_id().returning(|_| {
        Ok(Some(Category {
            id: 3,
            name: "Software Bug".to_string(),
            requirement_type_id: 2,
        }))
    });
    expect_no_writes(&mut mocks);
    let service = mocks.build();

    let error = service
        .create_requirement(create_command(1, 3, vec![]), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::CategoryTypeMismatch { .. }));
    assert_eq!(
        error.to_string(),
        "The selected category does not belong to the specified type."
    );
}

#[tokio::test]
async fn test_create_rejects_unknown_category() {
    let mut mocks = RequirementMocks::new();
    mocks.category_repo.expect_find_by_id().returning(|_| Ok(None));
    expect_no_writes(&mut mocks);
    let service = mocks.build();

    let error = service
        .create_requirement(create_command(1, 99, vec![]), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::CategoryTypeMismatch { .. }));
}

#[tokio::test]
async fn test_create_rejects_missing_user_without_partial_assignment() {
    let known = Uuid::new_v4();
    let missing = Uuid::new_v4();
    let mut mocks = RequirementMocks::new();
    mocks.category_repo.expect_find_by_id().returning(|_| Ok(Some(hardware_category())));
    mocks
        .user_repo
        .expect_get_by_ids()
        .returning(move |_| Ok(vec![internal(known)]));
    expect_no_writes(&mut mocks);
    let service = mocks.build();

    let error = service
        .create_requirement(create_command(1, 1, vec![known, missing]), Uuid::new_v4())
        .await
        .unwrap_err();
    match error {
        RequirementException::UserNotFound { id } => assert_eq!(id, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_open_requirement_with_first_code() {
    let creator = Uuid::new_v4();
    let mut mocks = RequirementMocks::new();
    mocks.category_repo.expect_find_by_id().returning(|_| Ok(Some(hardware_category())));
    mocks.requirement_repo.expect_next_sequence().times(1).returning(|| Ok(1));
    let expected_code = format!("REH-{}-00000001", Utc::now().year());
    mocks
        .requirement_repo
        .expect_insert()
        .withf(move |el: &Requirement| {
            el.code == expected_code && el.status == RequirementStatus::Open && !el.is_deleted
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks
        .action_log_repo
        .expect_insert()
        .withf(move |el: &RequirementActionLog| {
            el.action == RequirementAction::Created
                && el.performed_by == creator
                && el.details == "Requirement created successfully."
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().times(1).returning(|| Ok(true));
    mocks.user_repo.expect_get_by_profile_kind().returning(|_| Ok(vec![]));
    mocks.notification_repo.expect_insert().never();
    mocks.notifier.expect_notify_all().never();
    let service = mocks.build();

    let requirement = service
        .create_requirement(create_command(1, 1, vec![]), creator)
        .await
        .unwrap();
    assert_eq!(requirement.code, format!("REH-{}-00000001", Utc::now().year()));
    assert_eq!(requirement.status, RequirementStatus::Open);
}

#[tokio::test]
async fn test_create_notifies_assigned_and_internal_users_best_effort() {
    let assigned = Uuid::new_v4();
    let other_internal = Uuid::new_v4();
    let mut mocks = RequirementMocks::new();
    mocks.category_repo.expect_find_by_id().returning(|_| Ok(Some(hardware_category())));
    mocks.user_repo.expect_get_by_ids().returning(move |_| Ok(vec![internal(assigned)]));
    mocks.requirement_repo.expect_next_sequence().returning(|| Ok(7));
    mocks
        .requirement_repo
        .expect_insert()
        .withf(|el: &Requirement| el.status == RequirementStatus::Assigned)
        .returning(|el| Ok(el.id));
    mocks.action_log_repo.expect_insert().times(1).returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().times(1).returning(|| Ok(true));
    mocks
        .user_repo
        .expect_get_by_profile_kind()
        .returning(move |_| Ok(vec![internal(assigned), internal(other_internal)]));
    mocks
        .notification_repo
        .expect_insert()
        .withf(move |el: &Notification| {
            el.message == "New requirement created: Printer"
                && el.recipient_ids == vec![assigned, other_internal]
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks
        .notification_repo
        .expect_save_changed()
        .returning(|| Err(anyhow::anyhow!("connection reset")));
    mocks
        .notifier
        .expect_notify_all()
        .withf(|message, payload| {
            message == "Requirement Assigned"
                && matches!(payload, NotificationPayload::Email { content, .. }
                    if content == "You have been assigned to the requirement: Printer.")
        })
        .times(1)
        .return_const(());
    mocks
        .notifier
        .expect_notify_all()
        .withf(|message, payload| {
            message == "New Requirement Created"
                && matches!(
                    payload,
                    NotificationPayload::Internal { user_ids, .. } if user_ids.len() == 2
                )
        })
        .times(1)
        .return_const(());
    let service = mocks.build();

    let requirement = service
        .create_requirement(create_command(1, 1, vec![assigned]), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(requirement.assigned_user_ids, vec![assigned]);
}

#[tokio::test]
async fn test_update_logs_each_changed_field() {
    let existing = requirement(vec![]);
    let id = existing.id;
    let user_id = Uuid::new_v4();
    let mut mocks = RequirementMocks::new();
    mocks
        .requirement_repo
        .expect_get()
        .withf(|_, include_deleted| !include_deleted)
        .returning(move |_, _| Ok(Some(existing.clone())));
    mocks
        .requirement_repo
        .expect_update()
        .withf(|el: &Requirement| el.subject == "Scanner" && el.status.as_str() == "Closed")
        .times(1)
        .returning(|_| Ok(()));
    mocks
        .action_log_repo
        .expect_insert()
        .withf(move |el: &RequirementActionLog| {
            el.action == RequirementAction::Updated
                && el.performed_by == user_id
                && el.details == "Subject: Printer → Scanner; Status: Open → Closed"
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().times(1).returning(|| Ok(true));
    mocks.notifier.expect_notify_all().never();
    let service = mocks.build();

    let command = UpdateRequirementCommand {
        subject: Some("Scanner".to_string()),
        description: Some("Paper jam on the second floor".to_string()),
        status: Some("Closed".to_string()),
        ..Default::default()
    };
    let updated = service.update_requirement(id, command, user_id).await.unwrap();
    assert_eq!(updated.subject, "Scanner");
}

#[tokio::test]
async fn test_update_without_changes_still_logs() {
    let existing = requirement(vec![]);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(move |_, _| Ok(Some(existing.clone())));
    mocks.requirement_repo.expect_update().never();
    mocks
        .action_log_repo
        .expect_insert()
        .withf(|el: &RequirementActionLog| el.details == "No changes.")
        .times(1)
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().returning(|| Ok(true));
    let service = mocks.build();

    service
        .update_requirement(id, UpdateRequirementCommand::default(), Uuid::new_v4())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_emails_assigned_users_with_priority_name() {
    let assigned = Uuid::new_v4();
    let mut existing = requirement(vec![assigned]);
    existing.priority_id = Some(3);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(move |_, _| Ok(Some(existing.clone())));
    mocks.priority_repo.expect_find_by_id().returning(|id| {
        let name = if id == 1 { "Alta" } else { "Baja" };
        Ok(Some(Priority {
            id,
            name: name.to_string(),
        }))
    });
    mocks.requirement_repo.expect_update().returning(|_| Ok(()));
    mocks
        .action_log_repo
        .expect_insert()
        .withf(|el: &RequirementActionLog| el.details == "Priority: Baja → Alta")
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().returning(|| Ok(true));
    mocks.user_repo.expect_get_by_ids().returning(move |_| Ok(vec![internal(assigned)]));
    let expected = "The requirement 'Printer' has been updated. Details:\nPriority: Baja → Alta";
    mocks
        .notifier
        .expect_notify_all()
        .withf(move |message, payload| {
            message == "Requirement Updated"
                && matches!(
                    payload,
                    NotificationPayload::Email { content, .. } if content == expected
                )
        })
        .times(1)
        .return_const(());
    let service = mocks.build();

    let command = UpdateRequirementCommand {
        priority_id: Some(1),
        ..Default::default()
    };
    service.update_requirement(id, command, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_update_rejects_unknown_priority() {
    let existing = requirement(vec![]);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(move |_, _| Ok(Some(existing.clone())));
    mocks.priority_repo.expect_find_by_id().returning(|_| Ok(None));
    mocks.action_log_repo.expect_insert().never();
    let service = mocks.build();

    let command = UpdateRequirementCommand {
        priority_id: Some(42),
        ..Default::default()
    };
    let error = service.update_requirement(id, command, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, RequirementException::InvalidPriority { id: 42 }));
}

#[tokio::test]
async fn test_update_missing_requirement() {
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(|_, _| Ok(None));
    let service = mocks.build();

    let error = service
        .update_requirement(Uuid::new_v4(), UpdateRequirementCommand::default(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::RequirementNotFound { .. }));
}

#[tokio::test]
async fn test_delete_soft_deletes_and_logs() {
    let existing = requirement(vec![]);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks
        .requirement_repo
        .expect_get()
        .withf(|_, include_deleted| !include_deleted)
        .returning(move |_, _| Ok(Some(existing.clone())));
    mocks
        .requirement_repo
        .expect_update()
        .withf(|el: &Requirement| el.is_deleted)
        .times(1)
        .returning(|_| Ok(()));
    mocks
        .action_log_repo
        .expect_insert()
        .withf(|el: &RequirementActionLog| {
            el.action == RequirementAction::Deleted
                && el.details == "Requirement 'REH-2024-00000001' marked as deleted."
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = mocks.build();

    service.delete_requirement(id, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_restore_requires_deleted_requirement() {
    let existing = requirement(vec![]);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks
        .requirement_repo
        .expect_get()
        .withf(|_, include_deleted| *include_deleted)
        .returning(move |_, _| Ok(Some(existing.clone())));
    mocks.requirement_repo.expect_update().never();
    mocks.action_log_repo.expect_insert().never();
    let service = mocks.build();

    let error = service.restore_requirement(id, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(error.to_string(), "Requirement not found or is not deleted.");
}

#[tokio::test]
async fn test_restore_clears_flag_and_logs() {
    let mut existing = requirement(vec![]);
    existing.soft_delete();
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(move |_, _| Ok(Some(existing.clone())));
    mocks
        .requirement_repo
        .expect_update()
        .withf(|el: &Requirement| !el.is_deleted && el.restored_time.is_some())
        .times(1)
        .returning(|_| Ok(()));
    mocks
        .action_log_repo
        .expect_insert()
        .withf(|el: &RequirementActionLog| {
            el.action == RequirementAction::Restored
                && el.details == "Requirement 'REH-2024-00000001' marked as restored."
        })
        .times(1)
        .returning(|el| Ok(el.id));
    mocks.requirement_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = mocks.build();

    service.restore_requirement(id, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_get_requirement_resolves_names() {
    let assigned = Uuid::new_v4();
    let mut existing = requirement(vec![assigned]);
    existing.priority_id = Some(2);
    let id = existing.id;
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(move |_, _| Ok(Some(existing.clone())));
    mocks.requirement_type_repo.expect_get_all().returning(|| {
        Ok(vec![RequirementType {
            id: 1,
            name: "Hardware".to_string(),
        }])
    });
    mocks.category_repo.expect_get_all().returning(|| Ok(vec![hardware_category()]));
    mocks.priority_repo.expect_get_all().returning(|| {
        Ok(vec![Priority {
            id: 2,
            name: "Media".to_string(),
        }])
    });
    mocks.user_repo.expect_get_by_ids().returning(move |_| Ok(vec![internal(assigned)]));
    let service = mocks.build();

    let view = service.get_requirement(id).await.unwrap();
    assert_eq!(view.requirement_type, "Hardware");
    assert_eq!(view.category, "Hardware Malfunction");
    assert_eq!(view.priority.as_deref(), Some("Media"));
    assert_eq!(view.assigned_users.len(), 1);
    assert_eq!(view.assigned_users[0].image, common::DEFAULT_IMAGE);
}

#[tokio::test]
async fn test_logs_of_missing_requirement() {
    let mut mocks = RequirementMocks::new();
    mocks.requirement_repo.expect_get().returning(|_, _| Ok(None));
    mocks.action_log_repo.expect_get_by_requirement().never();
    let service = mocks.build();

    let error = service.get_requirement_logs(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, RequirementException::RequirementNotFound { .. }));
}
