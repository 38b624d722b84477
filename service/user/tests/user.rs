mod common;

use std::sync::Arc;

use domain_user::{
    command::{RegisterProfile, RegisterUserCommand, ResetPasswordCommand, UploadImageCommand},
    exception::UserException,
    mock::{MockEmailService, MockIdentityProvider, MockImageService, MockUserRepo},
    model::{
        entity::User,
        vo::{EmailTemplate, Role},
    },
    service::UserService,
};
use service_user::UserServiceImpl;
use uuid::Uuid;

const DEFAULT_IMAGE: &str = "https://cdn.example.com/trackit/default.png";

struct Mocks {
    user_repo: MockUserRepo,
    identity: MockIdentityProvider,
    email_service: MockEmailService,
    image_service: MockImageService,
}

impl Mocks {
    fn new() -> Self {
        Self {
            user_repo: MockUserRepo::new(),
            identity: MockIdentityProvider::new(),
            email_service: MockEmailService::new(),
            image_service: MockImageService::new(),
        }
    }

    fn build(self) -> UserServiceImpl {
        UserServiceImpl::builder()
            .user_repo(Arc::new(self.user_repo))
            .identity(Arc::new(self.identity))
            .email_service(Arc::new(self.email_service))
            .image_service(Arc::new(self.image_service))
            .app_url("https://trackit.example.com/")
            .default_image(DEFAULT_IMAGE)
            .build()
    }
}

fn register_command(password: &str, confirm_password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        first_name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        email: "ana@example.com".to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
        profile: RegisterProfile::Internal {
            position: "Analyst".to_string(),
            department: "IT".to_string(),
        },
    }
}

#[tokio::test]
async fn test_register_password_mismatch_writes_nothing() {
    let mut mocks = Mocks::new();
    mocks.user_repo.expect_insert().never();
    mocks.user_repo.expect_save_changed().never();
    let service = mocks.build();

    let error = service.register(register_command("secret", "other")).await.unwrap_err();
    assert!(matches!(error, UserException::PasswordMismatch));
    assert_eq!(error.to_string(), "Passwords do not match");
}

#[tokio::test]
async fn test_register_missing_role_writes_nothing() {
    let mut mocks = Mocks::new();
    mocks.user_repo.expect_get_by_email().returning(|_| Ok(None));
    mocks
        .user_repo
        .expect_role_exists()
        .withf(|role| *role == Role::Internal)
        .returning(|_| Ok(false));
    mocks.user_repo.expect_insert().never();
    mocks.user_repo.expect_save_changed().never();
    let service = mocks.build();

    let error = service.register(register_command("secret", "secret")).await.unwrap_err();
    assert!(matches!(error, UserException::RoleNotFound { .. }));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let mut mocks = Mocks::new();
    mocks
        .user_repo
        .expect_get_by_email()
        .returning(|email| Ok(Some(common::internal_user(email))));
    mocks.user_repo.expect_insert().never();
    let service = mocks.build();

    let error = service.register(register_command("secret", "secret")).await.unwrap_err();
    assert!(matches!(error, UserException::UserCreation { .. }));
}

#[tokio::test]
async fn test_register_survives_failed_confirmation_email() {
    let mut mocks = Mocks::new();
    mocks.user_repo.expect_get_by_email().returning(|_| Ok(None));
    mocks.user_repo.expect_role_exists().returning(|_| Ok(true));
    mocks.identity.expect_hash_password().returning(|_| Ok("argon".to_string()));
    mocks
        .user_repo
        .expect_insert()
        .withf(|user: &User| {
            !user.is_enabled
                && !user.email_confirmed
                && user.password_hash == "argon"
                && user.image.as_deref() == Some(DEFAULT_IMAGE)
        })
        .times(1)
        .returning(|user| Ok(user.id));
    mocks.user_repo.expect_save_changed().times(1).returning(|| Ok(true));
    mocks.identity.expect_issue_purpose_token().returning(|_, _| Ok("token".to_string()));
    mocks
        .email_service
        .expect_send_template()
        .withf(|_, subject, template, data| {
            subject == "Email Confirmation"
                && *template == EmailTemplate::ConfirmEmail
                && data["link"].as_str().is_some_and(|link| {
                    link.starts_with("https://trackit.example.com/confirm-email?userId=")
                })
        })
        .returning(|_, _, _, _| Err(anyhow::anyhow!("smtp down")));
    let service = mocks.build();

    assert!(service.register(register_command("secret", "secret")).await.is_ok());
}

#[tokio::test]
async fn test_reset_password_rejected_token() {
    let mut mocks = Mocks::new();
    mocks
        .user_repo
        .expect_get_by_email()
        .returning(|email| Ok(Some(common::internal_user(email))));
    mocks.identity.expect_validate_purpose_token().returning(|_, _, _| Ok(false));
    mocks.user_repo.expect_update().never();
    let service = mocks.build();

    let error = service
        .reset_password(ResetPasswordCommand {
            email: "ana@example.com".to_string(),
            token: "forged".to_string(),
            new_password: "new".to_string(),
            confirm_password: "new".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, UserException::PasswordReset { .. }));
}

#[tokio::test]
async fn test_reset_password_mismatch() {
    let service = Mocks::new().build();
    let error = service
        .reset_password(ResetPasswordCommand {
            email: "ana@example.com".to_string(),
            token: "token".to_string(),
            new_password: "new".to_string(),
            confirm_password: "other".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, UserException::PasswordMismatch));
}

#[tokio::test]
async fn test_enable_user_sends_activation_email() {
    let mut mocks = Mocks::new();
    mocks.user_repo.expect_get_by_email().returning(|email| {
        let mut user = common::internal_user(email);
        user.is_enabled = false;
        Ok(Some(user))
    });
    mocks
        .user_repo
        .expect_update()
        .withf(|user: &User| user.is_enabled)
        .times(1)
        .returning(|_| Ok(()));
    mocks.user_repo.expect_save_changed().returning(|| Ok(true));
    mocks
        .email_service
        .expect_send_template()
        .withf(|to, _, template, _| {
            to == "ana@example.com" && *template == EmailTemplate::AccountActivated
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    let service = mocks.build();

    service.update_user_status("ana@example.com", true).await.unwrap();
}

#[tokio::test]
async fn test_disable_user_sends_nothing() {
    let mut mocks = Mocks::new();
    mocks
        .user_repo
        .expect_get_by_email()
        .returning(|email| Ok(Some(common::internal_user(email))));
    mocks.user_repo.expect_update().withf(|user: &User| !user.is_enabled).returning(|_| Ok(()));
    mocks.user_repo.expect_save_changed().returning(|| Ok(true));
    mocks.email_service.expect_send_template().never();
    let service = mocks.build();

    service.update_user_status("ana@example.com", false).await.unwrap();
}

#[tokio::test]
async fn test_upload_empty_image() {
    let service = Mocks::new().build();
    let error = service
        .upload_image(UploadImageCommand {
            user_id: Uuid::new_v4(),
            file_name: "me.png".to_string(),
            content: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(error, UserException::EmptyFile));
}

#[tokio::test]
async fn test_upload_image_persists_url() {
    let mut mocks = Mocks::new();
    let user = common::internal_user("ana@example.com");
    let user_id = user.id;
    mocks.user_repo.expect_find_by_id().returning(move |_| Ok(Some(user.clone())));
    mocks
        .image_service
        .expect_upload_image()
        .returning(|name, _| Ok(format!("https://cdn.example.com/trackit/{name}")));
    mocks
        .user_repo
        .expect_update()
        .withf(|user: &User| {
            user.image.as_deref() == Some("https://cdn.example.com/trackit/me.png")
        })
        .returning(|_| Ok(()));
    mocks.user_repo.expect_save_changed().returning(|| Ok(true));
    let service = mocks.build();

    let url = service
        .upload_image(UploadImageCommand {
            user_id,
            file_name: "me.png".to_string(),
            content: vec![1, 2, 3],
        })
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example.com/trackit/me.png");
}

#[tokio::test]
async fn test_ensure_admin_skips_existing() {
    let mut mocks = Mocks::new();
    mocks
        .user_repo
        .expect_get_by_email()
        .returning(|email| Ok(Some(common::internal_user(email))));
    mocks.user_repo.expect_insert().never();
    let service = mocks.build();

    service.ensure_admin("admin@example.com", "secret").await.unwrap();
}
