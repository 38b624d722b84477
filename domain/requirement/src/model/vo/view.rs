use chrono::{DateTime, Utc};
use domain_user::model::entity::User;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{
    entity::{Category, Priority, Requirement, RequirementType},
    vo::RequirementStatus,
};

/// Requirement joined with its lookup names and assigned users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementView {
    pub id: Uuid,
    pub code: String,
    pub subject: String,
    pub description: String,
    pub requirement_type_id: i32,
    pub requirement_type: String,
    pub category_id: i32,
    pub category: String,
    pub priority_id: Option<i32>,
    pub priority: Option<String>,
    pub status: RequirementStatus,
    pub created_by: Uuid,
    pub created_time: DateTime<Utc>,
    pub is_deleted: bool,
    pub restored_time: Option<DateTime<Utc>>,
    pub assigned_users: Vec<AssignedUser>,
}

impl RequirementView {
    pub fn new(
        requirement: Requirement,
        requirement_type: Option<&RequirementType>,
        category: Option<&Category>,
        priority: Option<&Priority>,
        assigned_users: Vec<AssignedUser>,
    ) -> Self {
        Self {
            id: requirement.id,
            code: requirement.code,
            subject: requirement.subject,
            description: requirement.description,
            requirement_type_id: requirement.requirement_type_id,
            requirement_type: requirement_type.map(|el| el.name.clone()).unwrap_or_default(),
            category_id: requirement.category_id,
            category: category.map(|el| el.name.clone()).unwrap_or_default(),
            priority_id: requirement.priority_id,
            priority: priority.map(|el| el.name.clone()),
            status: requirement.status,
            created_by: requirement.created_by,
            created_time: requirement.created_time,
            is_deleted: requirement.is_deleted,
            restored_time: requirement.restored_time,
            assigned_users,
        }
    }
}

/// Public profile of a user assigned to a requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUser {
    pub id: Uuid,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: String,
}

impl AssignedUser {
    pub fn from_user(user: &User, default_image: &str) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            image: user.image.clone().unwrap_or_else(|| default_image.to_string()),
        }
    }
}

/// A notification as seen by one recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNotificationView {
    pub notification_id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}
