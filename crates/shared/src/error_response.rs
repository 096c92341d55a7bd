//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - ボディは `{"error": "<メッセージ>"}` の 1 フィールド固定。
//!   公開 API の互換性要件のため、このワイヤ形式は変更しない

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべての失敗レスポンスで統一されたエラーレスポンス形式。
/// `error` フィールドに人間可読なメッセージを 1 つだけ持つ。
///
/// ## 使用例
///
/// ```
/// use todoflow_shared::ErrorResponse;
///
/// let response = ErrorResponse::new("Todo not found");
/// assert_eq!(response.error, "Todo not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 人間可読なエラーメッセージ
    pub error: String,
}

impl ErrorResponse {
    /// 新しい `ErrorResponse` を作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeで正しいjson形状にする() {
        let response = ErrorResponse::new("Todo not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Todo not found" }));
    }

    #[test]
    fn test_errorフィールド以外は出力されない() {
        let response = ErrorResponse::new("Invalid data");
        let json = serde_json::to_value(&response).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"error": "Invalid data"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.error, "Invalid data");
    }
}
