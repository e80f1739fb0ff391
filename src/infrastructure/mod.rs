use async_trait::async_trait;

use crate::domain::errors::DomainError;

pub mod in_memory_todo_repository;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Snapshot of every item in insertion order.
    async fn list(&self) -> Result<Vec<String>, DomainError>;

    /// Appends `text` verbatim as the new last item.
    async fn append(&self, text: String) -> Result<(), DomainError>;

    /// Removes the item at `index`, shifting later items down. Returns
    /// whether an item was removed; an out-of-range index is not an error.
    async fn remove_at(&self, index: usize) -> Result<bool, DomainError>;
}
