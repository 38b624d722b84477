use crate::model::{entity::User, vo::TokenPurpose};

/// Credential primitives: password hashing and token issuing.
pub trait IdentityProvider: Send + Sync {
    fn hash_password(&self, password: &str) -> anyhow::Result<String>;

    fn verify_password(&self, password: &str, password_hash: &str) -> anyhow::Result<bool>;

    /// Signed bearer token carrying the user's id, name, email and roles.
    fn issue_access_token(&self, user: &User) -> anyhow::Result<String>;

    /// Short lived token bound to the user's current password hash, so a password change
    /// invalidates every token issued before it.
    fn issue_purpose_token(&self, user: &User, purpose: TokenPurpose) -> anyhow::Result<String>;

    fn validate_purpose_token(
        &self,
        user: &User,
        purpose: TokenPurpose,
        token: &str,
    ) -> anyhow::Result<bool>;
}
