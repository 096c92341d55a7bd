//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **ログ可能性**: Debug によりログ出力時に詳細情報を表示

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// ストア操作で発生するエラーの具体的な種別。
/// API 層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// ロック汚染
    ///
    /// ストアのロックを保持したスレッドがパニックした場合に発生する。
    #[error("ストアのロックが汚染されています: {0}")]
    LockPoisoned(String),

    /// 予期しないエラー
    ///
    /// 上記に分類できない予期しないエラー。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lock_poisonedのdisplayが原因を含む() {
        let error = InfraError::LockPoisoned("poisoned lock".to_string());

        assert_eq!(
            format!("{error}"),
            "ストアのロックが汚染されています: poisoned lock"
        );
    }

    #[test]
    fn test_unexpectedのdisplayがメッセージを含む() {
        let error = InfraError::Unexpected("想定外の状態".to_string());

        assert_eq!(format!("{error}"), "予期しないエラー: 想定外の状態");
    }
}
