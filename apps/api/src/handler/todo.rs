//! # Todo API ハンドラ
//!
//! Todo 関連エンドポイントを実装する。
//!
//! ## ワイヤ形式
//!
//! Todo は `{"id": <integer>, "title": <string>, "completed": <boolean>}` の
//! 形式で返す。一覧はこのオブジェクトの配列で、エンベロープは付けない。
//! この形式は公開 API の互換性要件のため変更しない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::ApiError, usecase::TodoUseCaseImpl};

/// Todo ハンドラーの State
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

/// Todo DTO
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id:        u64,
    pub title:     String,
    pub completed: bool,
}

impl TodoDto {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id:        todo.id().value(),
            title:     todo.title().to_string(),
            completed: todo.completed(),
        }
    }
}

/// Todo 作成リクエスト
///
/// `title` は必須、`completed` は省略時 false。
/// 型付きの構造体へのデシリアライズで「解析してから検証」を徹底し、
/// フィールドの欠如・型不一致はすべてデシリアライズ失敗として 400 に変換する。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title:     String,
    #[serde(default)]
    pub completed: bool,
}

/// すべての Todo を取得する
///
/// ## エンドポイント
/// GET /api/todos
pub async fn list_todos(State(state): State<Arc<TodoState>>) -> Result<Response, ApiError> {
    tracing::info!("Todo 一覧を取得します");

    let todos = state.usecase.list_todos().await?;
    let response: Vec<TodoDto> = todos.iter().map(TodoDto::from_todo).collect();

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// ID を指定して Todo を取得する
///
/// パスパラメータは非負整数に制約される。整数としてパースできないセグメントは
/// ルート不一致として扱い、アプリケーションロジックに達する前に 404 を返す。
///
/// ## エンドポイント
/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Ok(Path(id)) = path else {
        return Err(ApiError::NotFound);
    };
    // ID 0 はどの Todo にもマッチしない
    let todo_id = TodoId::new(id).map_err(|_| ApiError::NotFound)?;

    let todo = state.usecase.get_todo(todo_id).await?;

    Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))).into_response())
}

/// 新しい Todo を作成する
///
/// ボディの欠如・不正な JSON・`title` の欠如や型不一致はすべて
/// 400（`Invalid data`）として拒否し、コレクションは変更しない。
/// 成功時は 201 と作成された Todo を返す。
///
/// ## エンドポイント
/// POST /api/todos
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(request)) = body else {
        return Err(ApiError::InvalidData);
    };

    let todo = state
        .usecase
        .create_todo(NewTodo {
            title:     request.title,
            completed: request.completed,
        })
        .await?;
    tracing::info!(id = todo.id().value(), "Todo を作成しました");

    Ok((StatusCode::CREATED, Json(TodoDto::from_todo(&todo))).into_response())
}
