use std::sync::Arc;

use anyhow::Context;
use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use domain_user::{
    command::{RegisterUserCommand, ResetPasswordCommand, UploadImageCommand},
    exception::{UserException, UserResult},
    model::{
        entity::User,
        vo::{EmailTemplate, ProfileKind, Role, TokenPurpose},
    },
    repository::UserRepo,
    service::{EmailService, IdentityProvider, ImageService, UserService},
};
use serde_json::json;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    identity: Arc<dyn IdentityProvider>,
    email_service: Arc<dyn EmailService>,
    image_service: Arc<dyn ImageService>,
    /// Base url of the web client, used to build the links sent by mail.
    #[builder(setter(into))]
    app_url: String,
    #[builder(setter(into))]
    default_image: String,
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, command: RegisterUserCommand) -> UserResult<Uuid> {
        if command.password != command.confirm_password {
            return Err(UserException::PasswordMismatch);
        }
        if self.user_repo.get_by_email(&command.email).await?.is_some() {
            return Err(UserException::UserCreation {
                reason: format!("Email {} is already registered.", command.email),
            });
        }
        let role = command.profile.role();
        if !self.user_repo.role_exists(role).await? {
            return Err(UserException::RoleNotFound {
                role: role.to_string(),
            });
        }

        let password_hash = self.identity.hash_password(&command.password)?;
        let user = User::register(command, password_hash, &self.default_image);
        self.user_repo.insert(&user).await?;
        self.user_repo.save_changed().await?;
        tracing::info!("Registered {role} user {}.", user.id);

        if let Err(e) = self.send_confirmation(&user).await {
            tracing::warn!("Confirmation email to {} was not sent: {e:?}", user.email);
        }
        Ok(user.id)
    }

    async fn confirm_email(&self, user_id: Uuid, token: &str) -> UserResult<()> {
        let mut user = self.find_user(user_id).await?;
        if !self.identity.validate_purpose_token(&user, TokenPurpose::EmailConfirmation, token)? {
            return Err(UserException::InvalidToken);
        }
        user.email_confirmed = true;
        self.user_repo.update(&user).await?;
        self.user_repo.save_changed().await?;
        Ok(())
    }

    async fn send_password_reset_link(&self, email: &str) -> UserResult<()> {
        let user = self.user_by_email(email).await?;
        let token = self
            .identity
            .issue_purpose_token(&user, TokenPurpose::PasswordReset)
            .map_err(|e| UserException::PasswordReset {
                reason: format!("Failed to generate reset token: {e}"),
            })?;
        let link = self.link(
            "reset-password",
            &[("token", token.as_str()), ("email", user.email.as_str())],
        )?;
        self.email_service
            .send_template(
                &user.email,
                "Password Reset Request",
                EmailTemplate::ResetPassword,
                json!({ "name": user.full_name(), "link": link }),
            )
            .await
            .map_err(|source| UserException::EmailSend { source })
    }

    async fn reset_password(&self, command: ResetPasswordCommand) -> UserResult<()> {
        if command.new_password != command.confirm_password {
            return Err(UserException::PasswordMismatch);
        }
        let mut user = self.user_by_email(&command.email).await?;
        if !self.identity.validate_purpose_token(
            &user,
            TokenPurpose::PasswordReset,
            &command.token,
        )? {
            return Err(UserException::PasswordReset {
                reason: "Invalid or expired token.".to_string(),
            });
        }
        user.password_hash = self.identity.hash_password(&command.new_password)?;
        self.user_repo.update(&user).await?;
        self.user_repo.save_changed().await?;
        tracing::info!("Password of user {} was reset.", user.id);
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> UserResult<User> {
        self.find_user(user_id).await
    }

    async fn get_all_users(&self) -> UserResult<Vec<User>> {
        Ok(self.user_repo.get_all().await?)
    }

    async fn get_internal_users(&self) -> UserResult<Vec<User>> {
        Ok(self.user_repo.get_by_profile_kind(ProfileKind::Internal).await?)
    }

    async fn get_external_users(&self) -> UserResult<Vec<User>> {
        Ok(self.user_repo.get_by_profile_kind(ProfileKind::External).await?)
    }

    async fn update_user_status(&self, email: &str, is_enabled: bool) -> UserResult<()> {
        let mut user = self.user_by_email(email).await?;
        user.is_enabled = is_enabled;
        self.user_repo.update(&user).await?;
        self.user_repo.save_changed().await?;
        tracing::info!("User {} enabled: {is_enabled}.", user.id);

        if is_enabled {
            self.email_service
                .send_template(
                    &user.email,
                    "Account Activated",
                    EmailTemplate::AccountActivated,
                    json!({ "name": user.full_name() }),
                )
                .await
                .map_err(|source| UserException::EmailSend { source })?;
        }
        Ok(())
    }

    async fn upload_image(&self, command: UploadImageCommand) -> UserResult<String> {
        if command.content.is_empty() {
            return Err(UserException::EmptyFile);
        }
        let mut user = self.find_user(command.user_id).await?;
        let url = self
            .image_service
            .upload_image(&command.file_name, command.content)
            .await
            .map_err(|source| UserException::ImageUpload { source })?;
        user.image = Some(url.clone());
        self.user_repo.update(&user).await?;
        self.user_repo.save_changed().await?;
        Ok(url)
    }

    async fn assign_default_image(&self) -> UserResult<u64> {
        Ok(self.user_repo.assign_image_to_all(&self.default_image).await?)
    }

    async fn ensure_admin(&self, email: &str, password: &str) -> UserResult<()> {
        if self.user_repo.get_by_email(email).await?.is_some() {
            return Ok(());
        }
        if !self.user_repo.role_exists(Role::Admin).await? {
            return Err(UserException::RoleNotFound {
                role: Role::Admin.to_string(),
            });
        }
        let password_hash = self.identity.hash_password(password)?;
        let admin = User::admin(email, password_hash, &self.default_image);
        self.user_repo.insert(&admin).await?;
        self.user_repo.save_changed().await?;
        tracing::info!("Created administrator account {email}.");
        Ok(())
    }
}

impl UserServiceImpl {
    async fn find_user(&self, user_id: Uuid) -> UserResult<User> {
        self.user_repo.find_by_id(user_id).await?.ok_or(UserException::UserNotFound)
    }

    async fn user_by_email(&self, email: &str) -> UserResult<User> {
        self.user_repo.get_by_email(email).await?.ok_or(UserException::UserNotFound)
    }

    fn link(&self, path: &str, query: &[(&str, &str)]) -> anyhow::Result<String> {
        let base = format!("{}/{path}", self.app_url.trim_end_matches('/'));
        let url = url::Url::parse_with_params(&base, query)
            .with_context(|| format!("Invalid app url: {}", self.app_url))?;
        Ok(url.to_string())
    }

    async fn send_confirmation(&self, user: &User) -> anyhow::Result<()> {
        let token = self.identity.issue_purpose_token(user, TokenPurpose::EmailConfirmation)?;
        let user_id = user.id.to_string();
        let link = self.link(
            "confirm-email",
            &[("userId", user_id.as_str()), ("token", token.as_str())],
        )?;
        self.email_service
            .send_template(
                &user.email,
                "Email Confirmation",
                EmailTemplate::ConfirmEmail,
                json!({ "name": user.full_name(), "link": link }),
            )
            .await
    }
}
