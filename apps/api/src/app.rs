//! # アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{TodoState, create_todo, get_todo, health_check, list_todos};

/// ルーターを構築する
///
/// メソッド + パスパターンからハンドラへの対応を 1 箇所に集約した
/// 明示的なルート表。統合テストもこの関数で実アプリと同じ構成を組み立てる。
pub fn build_app(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", get(get_todo))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
