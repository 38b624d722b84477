use async_trait::async_trait;

use crate::exception::UserResult;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the credentials and issue an access token.
    async fn login(&self, email: &str, password: &str) -> UserResult<String>;
}
