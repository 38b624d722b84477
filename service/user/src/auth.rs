use std::sync::Arc;

use async_trait::async_trait;
use domain_user::{
    exception::{UserException, UserResult},
    repository::UserRepo,
    service::{AuthService, IdentityProvider},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    identity: Arc<dyn IdentityProvider>,
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> UserResult<String> {
        let user = self.user_repo.get_by_email(email).await?.ok_or(UserException::UserNotFound)?;
        if !user.email_confirmed {
            return Err(UserException::EmailNotConfirmed);
        }
        if !user.is_enabled {
            return Err(UserException::UserNotEnabled);
        }
        if !self.identity.verify_password(password, &user.password_hash)? {
            return Err(UserException::InvalidLogin);
        }
        if user.user_name.is_empty() || user.email.is_empty() || user.role().is_none() {
            return Err(UserException::IncompleteUserInfo);
        }
        tracing::info!("User {} logged in.", user.id);
        Ok(self.identity.issue_access_token(&user)?)
    }
}
