use crate::model::AggregateRoot;

/// Mutable repository.
///
/// Implementations may buffer the changes; they only reach the store once
/// [`MutableRepository::save_changed`] is called.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    /// Insert an object and return its id.
    async fn insert(&self, _entity: &T) -> anyhow::Result<T::Id> {
        anyhow::bail!("insert is not supported")
    }

    /// Update an object.
    async fn update(&self, _entity: &T) -> anyhow::Result<()> {
        anyhow::bail!("update is not supported")
    }

    /// Delete an object by id.
    async fn delete_by_id(&self, id: T::Id) -> anyhow::Result<()> {
        anyhow::bail!("delete_by_id is not supported, id: {id}")
    }

    /// Commit the buffered changes, returns `false` when there was nothing to commit.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(false)
    }
}
