use crate::model::AggregateRoot;

/// Read only repository.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    /// Get an object by id, fails when it does not exist.
    async fn get_by_id(&self, id: T::Id) -> anyhow::Result<T> {
        anyhow::bail!("get_by_id is not supported, id: {id}")
    }

    /// Get an object by id.
    async fn find_by_id(&self, id: T::Id) -> anyhow::Result<Option<T>> {
        anyhow::bail!("find_by_id is not supported, id: {id}")
    }

    /// Get all objects.
    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        anyhow::bail!("get_all is not supported")
    }
}
