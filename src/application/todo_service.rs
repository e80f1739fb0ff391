use std::sync::Arc;

use crate::{domain::errors::DomainError, infrastructure::TodoRepository};

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Current items in insertion order.
    pub async fn list_todos(&self) -> Result<Vec<String>, DomainError> {
        self.repository.list().await
    }

    /// Appends a submission. An absent or empty field is a no-op; anything
    /// else is stored verbatim, untrimmed. Returns whether an item was
    /// appended.
    pub async fn add_todo(&self, text: Option<String>) -> Result<bool, DomainError> {
        let Some(text) = text else {
            return Ok(false);
        };
        if text.is_empty() {
            return Ok(false);
        }

        self.repository.append(text).await?;
        Ok(true)
    }

    /// Removes the item at `index`. An out-of-range index (a stale delete
    /// link included) is a no-op. Returns whether an item was removed.
    pub async fn remove_todo(&self, index: usize) -> Result<bool, DomainError> {
        self.repository.remove_at(index).await
    }
}
