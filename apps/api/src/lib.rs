//! # TodoFlow API ライブラリ
//!
//! Todo API サーバーの構成要素を公開する。
//! 統合テストから実アプリと同じルーター構成を組み立てられるようにする。
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築（明示的なルート表）
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック（ストア操作とエラー変換）

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
