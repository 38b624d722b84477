use architecture::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub requirement_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub description: String,
    pub created_time: DateTime<Utc>,
}

impl AggregateRoot for Comment {
    type Id = Uuid;
}
