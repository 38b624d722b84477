use std::fmt::Display;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Mutations recorded in the requirement audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive)]
pub enum RequirementAction {
    Created = 0,
    Updated = 1,
    Deleted = 2,
    Restored = 3,
}

impl Display for RequirementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequirementAction::Created => "Created",
            RequirementAction::Updated => "Updated",
            RequirementAction::Deleted => "Deleted",
            RequirementAction::Restored => "Restored",
        };
        f.write_str(s)
    }
}
