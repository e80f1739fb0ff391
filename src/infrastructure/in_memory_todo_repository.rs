use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{errors::DomainError, todo::TodoList},
    infrastructure::TodoRepository,
};

#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<TodoList>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.todos.read().await.items().to_vec())
    }

    async fn append(&self, text: String) -> Result<(), DomainError> {
        self.todos.write().await.append(text);
        Ok(())
    }

    async fn remove_at(&self, index: usize) -> Result<bool, DomainError> {
        // Bounds check and removal happen under one write guard so a
        // concurrent append or delete cannot slip in between.
        Ok(self.todos.write().await.remove_at(index).is_some())
    }
}
