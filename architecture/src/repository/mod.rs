//! Repository abstractions.
mod mutable_repository;
mod read_only_repository;

pub use self::{mutable_repository::MutableRepository, read_only_repository::ReadOnlyRepository};

/// Repository backed by a database, readable and writable.
#[async_trait::async_trait]
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + crate::model::AggregateRoot,
{
}
