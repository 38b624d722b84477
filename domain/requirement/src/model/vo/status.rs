use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Requirement status, stored and exchanged as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    Open,
    Assigned,
    Other(String),
}

impl RequirementStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequirementStatus::Open => "Open",
            RequirementStatus::Assigned => "Assigned",
            RequirementStatus::Other(s) => s,
        }
    }
}

impl From<&str> for RequirementStatus {
    fn from(value: &str) -> Self {
        match value {
            "Open" => RequirementStatus::Open,
            "Assigned" => RequirementStatus::Assigned,
            other => RequirementStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for RequirementStatus {
    fn from(value: String) -> Self {
        RequirementStatus::from(value.as_str())
    }
}

impl Display for RequirementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequirementStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequirementStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::RequirementStatus;

    #[test]
    fn test_status_text() {
        assert_eq!(RequirementStatus::from("Open"), RequirementStatus::Open);
        assert_eq!(
            RequirementStatus::from("In Progress"),
            RequirementStatus::Other("In Progress".to_string())
        );
        assert_eq!(RequirementStatus::Assigned.to_string(), "Assigned");
        assert_eq!(serde_json::to_string(&RequirementStatus::Open).unwrap(), r#""Open""#);
    }
}
