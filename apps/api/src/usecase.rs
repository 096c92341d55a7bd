//! # ユースケース層
//!
//! ハンドラとリポジトリの間でビジネスロジックを実行する。
//! ハンドラは薄く保ち、ストア操作とエラー変換をここに集約する。

pub mod todo;

pub use todo::TodoUseCaseImpl;
