//! # Todo
//!
//! Todo エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`TodoId`] は整数をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、読み取りはゲッター経由
//! - **採番の分離**: ID の採番はストア側の責務。作成入力は [`NewTodo`] で表現する
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::todo::{Todo, TodoId};
//!
//! let todo = Todo::new(TodoId::new(1)?, "Build REST API", false);
//!
//! assert_eq!(todo.id().value(), 1);
//! assert!(!todo.completed());
//! # Ok(())
//! # }
//! ```

use derive_more::Display;

use crate::DomainError;

/// Todo ID（一意識別子）
///
/// 正の整数を Newtype パターンでラップし、型安全性を確保する。
/// ID は作成時に「既存 ID の最大値 + 1」で単調に採番される。
///
/// # 不変条件
///
/// - 値は 1 以上（0 は生成時に拒否される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct TodoId(u64);

impl TodoId {
    /// 整数値から Todo ID を作成する
    ///
    /// # エラー
    ///
    /// 0 が指定された場合は `DomainError::Validation` を返す。
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::Validation(
                "Todo ID は正の整数である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 内部の整数値を取得する
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Todo エンティティ
///
/// タスク 1 件を表現する。ID・タイトル・完了フラグのみを持ち、
/// タイトルの内容は検証しない（存在チェックは API 層で行う）。
///
/// # 不変条件
///
/// - `id` はコレクション内で一意
/// - `title` は常に存在する（空文字列は許容される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    title:     String,
    completed: bool,
}

impl Todo {
    /// 新しい Todo を作成する
    pub fn new(id: TodoId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Todo ID を取得する
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// タイトルを取得する
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 完了フラグを取得する
    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Todo 作成入力
///
/// ID 採番前の Todo を表現する。ID はストアが採番するため、
/// クライアント入力にはタイトルと完了フラグのみが含まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// タイトル（存在のみ必須、内容は検証しない）
    pub title:     String,
    /// 完了フラグ（クライアントが省略した場合は false）
    pub completed: bool,
}
