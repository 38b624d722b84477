use architecture::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub requirement_type_id: i32,
}

impl AggregateRoot for Category {
    type Id = i32;
}

impl Category {
    pub fn belongs_to(&self, requirement_type_id: i32) -> bool {
        self.requirement_type_id == requirement_type_id
    }
}
