use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Authorization role carried in the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Interno")]
    Internal,
    #[serde(rename = "Externo")]
    External,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Internal => "Interno",
            Role::External => "Externo",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Admin" => Role::Admin,
            "Interno" | "Internal" => Role::Internal,
            "Externo" | "External" => Role::External,
            _ => anyhow::bail!("Unknown role: {s}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn test_role_names() {
        assert_eq!(Role::Internal.to_string(), "Interno");
        assert_eq!("Externo".parse::<Role>().unwrap(), Role::External);
        assert_eq!("Internal".parse::<Role>().unwrap(), Role::Internal);
        assert!("Root".parse::<Role>().is_err());
    }
}
