use architecture::DBRepository;
use async_trait::async_trait;

use crate::model::entity::Category;

/// Lookup rows are written immediately, `insert` returns the generated key.
#[async_trait]
pub trait CategoryRepo: DBRepository<Category> + Send + Sync {
    async fn get_by_requirement_type(&self, requirement_type_id: i32)
        -> anyhow::Result<Vec<Category>>;
}
