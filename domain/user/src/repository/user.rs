use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{
    entity::User,
    vo::{ProfileKind, Role},
};

/// Users with their profile row.
///
/// `insert` writes the identity row and the profile row, `update` rewrites the identity
/// columns only.
#[async_trait]
pub trait UserRepo: DBRepository<User> + Send + Sync {
    async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Users whose id is in `ids`, unknown ids are skipped.
    async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>>;

    async fn get_by_profile_kind(&self, kind: ProfileKind) -> anyhow::Result<Vec<User>>;

    async fn role_exists(&self, role: Role) -> anyhow::Result<bool>;

    /// Set `image` on every user without one, returns the affected count.
    async fn assign_image_to_all(&self, image: &str) -> anyhow::Result<u64>;
}
