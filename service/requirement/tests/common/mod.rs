#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use domain_requirement::{
    command::CreateRequirementCommand,
    mock::{
        MockCategoryRepo, MockNotificationRepo, MockPriorityRepo, MockRequirementActionLogRepo,
        MockRequirementNotifier, MockRequirementRepo, MockRequirementTypeRepo,
    },
    model::entity::{Category, Requirement},
};
use domain_user::{
    mock::MockUserRepo,
    model::{entity::User, vo::UserProfile},
};
use service_requirement::RequirementServiceImpl;
use uuid::Uuid;

pub const DEFAULT_IMAGE: &str = "https://cdn.example.com/trackit/default.png";

pub struct RequirementMocks {
    pub requirement_repo: MockRequirementRepo,
    pub category_repo: MockCategoryRepo,
    pub requirement_type_repo: MockRequirementTypeRepo,
    pub priority_repo: MockPriorityRepo,
    pub user_repo: MockUserRepo,
    pub action_log_repo: MockRequirementActionLogRepo,
    pub notification_repo: MockNotificationRepo,
    pub notifier: MockRequirementNotifier,
}

impl RequirementMocks {
    pub fn new() -> Self {
        Self {
            requirement_repo: MockRequirementRepo::new(),
            category_repo: MockCategoryRepo::new(),
            requirement_type_repo: MockRequirementTypeRepo::new(),
            priority_repo: MockPriorityRepo::new(),
            user_repo: MockUserRepo::new(),
            action_log_repo: MockRequirementActionLogRepo::new(),
            notification_repo: MockNotificationRepo::new(),
            notifier: MockRequirementNotifier::new(),
        }
    }

    pub fn build(self) -> RequirementServiceImpl {
        RequirementServiceImpl::builder()
            .requirement_repo(Arc::new(self.requirement_repo))
            .category_repo(Arc::new(self.category_repo))
            .requirement_type_repo(Arc::new(self.requirement_type_repo))
            .priority_repo(Arc::new(self.priority_repo))
            .user_repo(Arc::new(self.user_repo))
            .action_log_repo(Arc::new(self.action_log_repo))
            .notification_repo(Arc::new(self.notification_repo))
            .notifier(Arc::new(self.notifier))
            .default_image(DEFAULT_IMAGE)
            .build()
    }
}

/// Seeded "Hardware Malfunction" category of type 1.
pub fn hardware_category() -> Category {
    Category {
        id: 1,
        name: "Hardware Malfunction".to_string(),
        requirement_type_id: 1,
    }
}

pub fn create_command(
    requirement_type_id: i32,
    category_id: i32,
    assigned_user_ids: Vec<Uuid>,
) -> CreateRequirementCommand {
    CreateRequirementCommand {
        subject: "Printer".to_string(),
        description: "Paper jam on the second floor".to_string(),
        requirement_type_id,
        category_id,
        priority_id: None,
        assigned_user_ids,
        related_requirement_ids: vec![],
    }
}

pub fn requirement(assigned_user_ids: Vec<Uuid>) -> Requirement {
    let command = create_command(1, 1, assigned_user_ids);
    let mut requirement = Requirement::new(command, Uuid::new_v4(), 1);
    requirement.code = "REH-2024-00000001".to_string();
    requirement
}

pub fn user(id: Uuid, profile: UserProfile) -> User {
    User {
        id,
        user_name: format!("{id}@example.com"),
        email: format!("{id}@example.com"),
        first_name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        password_hash: "hash".to_string(),
        is_enabled: true,
        email_confirmed: true,
        image: None,
        profile,
        created_time: Utc::now(),
    }
}

pub fn internal(id: Uuid) -> User {
    user(
        id,
        UserProfile::Internal {
            position: "Analyst".to_string(),
            department: "IT".to_string(),
        },
    )
}
