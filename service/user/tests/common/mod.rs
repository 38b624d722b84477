use chrono::Utc;
use domain_user::model::{entity::User, vo::UserProfile};
use uuid::Uuid;

pub fn internal_user(email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        user_name: email.to_string(),
        email: email.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        password_hash: "hash".to_string(),
        is_enabled: true,
        email_confirmed: true,
        image: None,
        profile: UserProfile::Internal {
            position: "Analyst".to_string(),
            department: "IT".to_string(),
        },
        created_time: Utc::now(),
    }
}
