use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::{RegisterUserCommand, ResetPasswordCommand, UploadImageCommand},
    exception::UserResult,
    model::entity::User,
};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Register an internal or external user, returns the new id.
    async fn register(&self, command: RegisterUserCommand) -> UserResult<Uuid>;

    async fn confirm_email(&self, user_id: Uuid, token: &str) -> UserResult<()>;

    /// Email a password reset link to the user.
    async fn send_password_reset_link(&self, email: &str) -> UserResult<()>;

    async fn reset_password(&self, command: ResetPasswordCommand) -> UserResult<()>;

    async fn get_profile(&self, user_id: Uuid) -> UserResult<User>;

    async fn get_all_users(&self) -> UserResult<Vec<User>>;

    async fn get_internal_users(&self) -> UserResult<Vec<User>>;

    async fn get_external_users(&self) -> UserResult<Vec<User>>;

    /// Enable or disable an account, enabling sends an activation email.
    async fn update_user_status(&self, email: &str, is_enabled: bool) -> UserResult<()>;

    /// Returns the new image url.
    async fn upload_image(&self, command: UploadImageCommand) -> UserResult<String>;

    /// Returns how many users were updated.
    async fn assign_default_image(&self) -> UserResult<u64>;

    /// Create the administrator account when no user has this email.
    async fn ensure_admin(&self, email: &str, password: &str) -> UserResult<()>;
}
