use serde::{Deserialize, Serialize};

use super::Role;

/// Role specific part of a user, resolved once when the user is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UserProfile {
    Admin,
    Internal {
        position: String,
        department: String,
    },
    External {
        cuil: String,
        company: String,
        description: String,
    },
    /// Identity without any profile row.
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Admin,
    Internal,
    External,
}

impl UserProfile {
    pub fn role(&self) -> Option<Role> {
        match self {
            UserProfile::Admin => Some(Role::Admin),
            UserProfile::Internal { .. } => Some(Role::Internal),
            UserProfile::External { .. } => Some(Role::External),
            UserProfile::Base => None,
        }
    }

    pub fn kind(&self) -> Option<ProfileKind> {
        match self {
            UserProfile::Admin => Some(ProfileKind::Admin),
            UserProfile::Internal { .. } => Some(ProfileKind::Internal),
            UserProfile::External { .. } => Some(ProfileKind::External),
            UserProfile::Base => None,
        }
    }
}
