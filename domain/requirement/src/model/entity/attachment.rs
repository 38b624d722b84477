use architecture::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Uuid,
    pub requirement_id: Uuid,
    pub comment_id: Option<Uuid>,
    pub file_name: String,
    /// Location in the object store, `attachments/{id}_{file_name}`.
    pub file_path: String,
    pub uploaded_time: DateTime<Utc>,
}

impl AggregateRoot for Attachment {
    type Id = Uuid;
}

impl Attachment {
    pub fn new(requirement_id: Uuid, comment_id: Option<Uuid>, file_name: &str) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            requirement_id,
            comment_id,
            file_name: file_name.to_string(),
            file_path: format!("attachments/{id}_{file_name}"),
            uploaded_time: Utc::now(),
        }
    }
}
