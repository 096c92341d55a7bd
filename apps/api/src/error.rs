//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## 設計方針
//!
//! - **固定ワイヤ形式**: エラーボディは `{"error": "<メッセージ>"}` の 1 フィールド。
//!   公開 API の互換性要件のため、この形式は変更しない
//! - **thiserror**: 型安全なエラー定義
//! - **IntoResponse 実装**: axum との統合による自動レスポンス変換
//!
//! ## エラーの階層
//!
//! ```text
//! インフラ層エラー (InfraError)
//!        ↓ 変換
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_infra::InfraError;
use todoflow_shared::ErrorResponse;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
///
/// # マッピング
///
/// | ApiError | HTTP Status | ボディ |
/// |----------|-------------|--------|
/// | NotFound | 404 | `{"error": "Todo not found"}` |
/// | InvalidData | 400 | `{"error": "Invalid data"}` |
/// | Infra | 500 | `{"error": "Internal server error"}` |
#[derive(Debug, Error)]
pub enum ApiError {
    /// Todo が見つからない（404 Not Found）
    ///
    /// 指定された ID の Todo がコレクションに存在しない場合に使用。
    /// パスパラメータが整数としてパースできない場合も、ルート不一致として
    /// この扱いになる。
    #[error("Todo が見つかりません")]
    NotFound,

    /// リクエストボディが不正（400 Bad Request）
    ///
    /// ボディの欠如、JSON として不正、`title` の欠如・型不一致をまとめて表す。
    #[error("リクエストボディが不正です")]
    InvalidData,

    /// ストアエラー（500 Internal Server Error）
    ///
    /// `#[from]` により、`InfraError` から自動変換される。
    ///
    /// # セキュリティ注意
    ///
    /// 内部エラーの詳細はクライアントに返さない。
    /// エラー内容はサーバーサイドのログにのみ出力する。
    #[error("ストアエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Todo not found"),
            ),
            ApiError::InvalidData => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid data"),
            ),
            ApiError::Infra(e) => {
                // 内部エラーの詳細はログにのみ出力する
                tracing::error!("ストアエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
