use architecture::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::RequirementAction;

/// Audit row of one requirement mutation. Never updated nor deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementActionLog {
    pub id: Uuid,
    pub requirement_id: Uuid,
    pub action: RequirementAction,
    pub performed_by: Uuid,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl AggregateRoot for RequirementActionLog {
    type Id = Uuid;
}

impl RequirementActionLog {
    pub fn new(
        requirement_id: Uuid,
        action: RequirementAction,
        performed_by: Uuid,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            requirement_id,
            action,
            performed_by,
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}
