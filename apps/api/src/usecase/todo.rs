//! # Todo ユースケース
//!
//! Todo API のビジネスロジックを実装する。
//! リポジトリの `Option` / `InfraError` を API エラーに変換する責務を持つ。

use std::sync::Arc;

use todoflow_domain::todo::{NewTodo, Todo, TodoId};
use todoflow_infra::TodoRepository;

use crate::error::ApiError;

/// Todo ユースケースの実装
pub struct TodoUseCaseImpl {
    repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// すべての Todo を挿入順で取得する
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.repository.list().await?)
    }

    /// ID で Todo を取得する
    ///
    /// 見つからない場合は `ApiError::NotFound` を返す。
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, ApiError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)
    }

    /// 新しい Todo を作成する
    ///
    /// ID の採番と追加はリポジトリが原子的に行う。
    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, ApiError> {
        Ok(self.repository.insert(new_todo).await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todoflow_infra::InMemoryTodoRepository;

    use super::*;

    fn sut_with_seed() -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(Arc::new(InMemoryTodoRepository::with_seed_data()))
    }

    #[tokio::test]
    async fn test_list_todosがシードデータを挿入順で返す() {
        let sut = sut_with_seed();

        let todos = sut.list_todos().await.unwrap();

        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id().value(), 1);
        assert_eq!(todos[2].id().value(), 3);
    }

    #[tokio::test]
    async fn test_get_todoが該当するtodoを返す() {
        let sut = sut_with_seed();

        let todo = sut.get_todo(TodoId::new(1).unwrap()).await.unwrap();

        assert_eq!(todo.title(), "Learn Python");
        assert!(todo.completed());
    }

    #[tokio::test]
    async fn test_get_todoが存在しないidでnot_foundを返す() {
        let sut = sut_with_seed();

        let result = sut.get_todo(TodoId::new(999).unwrap()).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_todoが採番済みのtodoを返す() {
        let sut = sut_with_seed();

        let todo = sut
            .create_todo(NewTodo {
                title:     "Write spec".to_string(),
                completed: false,
            })
            .await
            .unwrap();

        assert_eq!(todo.id().value(), 4);

        let todos = sut.list_todos().await.unwrap();
        assert_eq!(todos.len(), 4);
        assert_eq!(todos[3].title(), "Write spec");
    }
}
