use architecture::AggregateRoot;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    command::{RegisterProfile, RegisterUserCommand},
    model::vo::{Role, UserProfile},
};

/// Identity principal.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_enabled: bool,
    pub email_confirmed: bool,
    pub image: Option<String>,
    pub profile: UserProfile,
    pub created_time: DateTime<Utc>,
}

impl AggregateRoot for User {
    type Id = Uuid;
}

impl User {
    /// Build a user from a registration.
    ///
    /// Registered users start disabled and unconfirmed. Internal users start with the default
    /// image, external users without one.
    pub fn register(
        command: RegisterUserCommand,
        password_hash: String,
        default_image: &str,
    ) -> Self {
        let (profile, image) = match command.profile {
            RegisterProfile::Internal {
                position,
                department,
            } => (
                UserProfile::Internal {
                    position,
                    department,
                },
                Some(default_image.to_string()),
            ),
            RegisterProfile::External {
                cuil,
                company,
                description,
            } => (
                UserProfile::External {
                    cuil,
                    company,
                    description,
                },
                None,
            ),
        };
        Self {
            id: Uuid::new_v4(),
            user_name: command.email.clone(),
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            is_enabled: false,
            email_confirmed: false,
            image,
            profile,
            created_time: Utc::now(),
        }
    }

    /// The bootstrap administrator, enabled and confirmed.
    pub fn admin(email: &str, password_hash: String, default_image: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: email.to_string(),
            email: email.to_string(),
            first_name: "Admin".to_string(),
            last_name: String::new(),
            password_hash,
            is_enabled: true,
            email_confirmed: true,
            image: Some(default_image.to_string()),
            profile: UserProfile::Admin,
            created_time: Utc::now(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.role()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(profile: RegisterProfile) -> RegisterUserCommand {
        RegisterUserCommand {
            first_name: "Ana".to_string(),
            last_name: "Gomez".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            profile,
        }
    }

    #[test]
    fn test_register_internal_gets_default_image() {
        let user = User::register(
            command(RegisterProfile::Internal {
                position: "Analyst".to_string(),
                department: "IT".to_string(),
            }),
            "hash".to_string(),
            "https://img/default.png",
        );
        assert_eq!(user.role(), Some(Role::Internal));
        assert_eq!(user.image.as_deref(), Some("https://img/default.png"));
        assert_eq!(user.user_name, "ana@example.com");
        assert!(!user.is_enabled);
        assert!(!user.email_confirmed);
    }

    #[test]
    fn test_register_external_without_image() {
        let user = User::register(
            command(RegisterProfile::External {
                cuil: "20-1".to_string(),
                company: "ACME".to_string(),
                description: "Vendor".to_string(),
            }),
            "hash".to_string(),
            "https://img/default.png",
        );
        assert_eq!(user.role(), Some(Role::External));
        assert!(user.image.is_none());
        assert_eq!(user.full_name(), "Ana Gomez");
    }
}
