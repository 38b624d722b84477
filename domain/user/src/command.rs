use uuid::Uuid;

use crate::model::vo::Role;

pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub profile: RegisterProfile,
}

/// Profile fields of the registrant kind.
pub enum RegisterProfile {
    Internal {
        position: String,
        department: String,
    },
    External {
        cuil: String,
        company: String,
        description: String,
    },
}

impl RegisterProfile {
    pub fn role(&self) -> Role {
        match self {
            RegisterProfile::Internal { .. } => Role::Internal,
            RegisterProfile::External { .. } => Role::External,
        }
    }
}

pub struct ResetPasswordCommand {
    pub email: String,
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub struct UploadImageCommand {
    pub user_id: Uuid,
    pub file_name: String,
    pub content: Vec<u8>,
}
