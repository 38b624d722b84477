use architecture::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    pub id: i32,
    pub name: String,
}

impl AggregateRoot for Priority {
    type Id = i32;
}
