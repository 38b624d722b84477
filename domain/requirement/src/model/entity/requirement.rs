use architecture::AggregateRoot;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{command::CreateRequirementCommand, model::vo::RequirementStatus};

/// Requirement ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: Uuid,
    /// `REH-{year}-{sequence:08}`
    pub code: String,
    pub subject: String,
    pub description: String,
    pub requirement_type_id: i32,
    pub category_id: i32,
    pub priority_id: Option<i32>,
    pub status: RequirementStatus,
    pub created_by: Uuid,
    pub created_time: DateTime<Utc>,
    pub is_deleted: bool,
    pub restored_time: Option<DateTime<Utc>>,
    pub assigned_user_ids: Vec<Uuid>,
    pub related_requirement_ids: Vec<Uuid>,
}

impl AggregateRoot for Requirement {
    type Id = Uuid;
}

impl Requirement {
    /// A new requirement numbered with `sequence`.
    ///
    /// Status is `Assigned` when users are pre-assigned, `Open` otherwise.
    pub fn new(command: CreateRequirementCommand, creator_id: Uuid, sequence: i64) -> Self {
        let now = Utc::now();
        let mut assigned_user_ids = command.assigned_user_ids;
        dedup(&mut assigned_user_ids);
        let mut related_requirement_ids = command.related_requirement_ids;
        dedup(&mut related_requirement_ids);
        let status = if assigned_user_ids.is_empty() {
            RequirementStatus::Open
        } else {
            RequirementStatus::Assigned
        };
        Self {
            id: Uuid::new_v4(),
            code: Self::format_code(now.year(), sequence),
            subject: command.subject,
            description: command.description,
            requirement_type_id: command.requirement_type_id,
            category_id: command.category_id,
            priority_id: command.priority_id,
            status,
            created_by: creator_id,
            created_time: now,
            is_deleted: false,
            restored_time: None,
            assigned_user_ids,
            related_requirement_ids,
        }
    }

    pub fn format_code(year: i32, sequence: i64) -> String {
        format!("REH-{year}-{sequence:08}")
    }

    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.restored_time = Some(Utc::now());
    }
}

fn dedup(ids: &mut Vec<Uuid>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(*id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(assigned_user_ids: Vec<Uuid>) -> CreateRequirementCommand {
        CreateRequirementCommand {
            subject: "Printer".to_string(),
            description: "Paper jam".to_string(),
            requirement_type_id: 1,
            category_id: 1,
            priority_id: None,
            assigned_user_ids,
            related_requirement_ids: vec![],
        }
    }

    #[test]
    fn test_format_code() {
        assert_eq!(Requirement::format_code(2024, 1), "REH-2024-00000001");
        assert_eq!(Requirement::format_code(2025, 123456789), "REH-2025-123456789");
    }

    #[test]
    fn test_new_requirement_status() {
        let creator = Uuid::new_v4();
        let open = Requirement::new(command(vec![]), creator, 1);
        assert_eq!(open.status, RequirementStatus::Open);
        assert_eq!(open.code, format!("REH-{}-00000001", Utc::now().year()));

        let user = Uuid::new_v4();
        let assigned = Requirement::new(command(vec![user, user]), creator, 2);
        assert_eq!(assigned.status, RequirementStatus::Assigned);
        assert_eq!(assigned.assigned_user_ids, vec![user]);
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let mut requirement = Requirement::new(command(vec![]), Uuid::new_v4(), 1);
        requirement.soft_delete();
        assert!(requirement.is_deleted);
        requirement.restore();
        assert!(!requirement.is_deleted);
        assert!(requirement.restored_time.is_some());
    }
}
