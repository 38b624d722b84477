use architecture::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementType {
    pub id: i32,
    pub name: String,
}

impl AggregateRoot for RequirementType {
    type Id = i32;
}
