//! # TodoRepository
//!
//! Todo コレクションの保持と操作を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **プロセス内ストア**: コレクションはプロセスメモリ上の `Vec` で保持する。
//!   再起動でクライアント作成分は失われ、シードデータが再出現する
//! - **採番と追加の原子性**: 「最大 ID の算出」と「追加」を同一ロック内で行い、
//!   同時作成でも ID の一意性を保つ
//! - **挿入順の保持**: 一覧は常に挿入順で返す

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use todoflow_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// プロセス起動時に投入されるシードデータ（ID、タイトル、完了フラグ）
const SEED_TODOS: [(u64, &str, bool); 3] = [
    (1, "Learn Python", true),
    (2, "Build REST API", false),
    (3, "Document Code", false),
];

/// Todo リポジトリトレイト
///
/// Todo コレクションの読み取り・追加操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
/// 更新・削除操作は存在しない（コレクションは縮小しない）。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// すべての Todo を挿入順で取得する
    async fn list(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(todo))`: Todo が見つかった場合（複数一致時は先頭を返す）
    /// - `Ok(None)`: Todo が見つからない場合
    /// - `Err(_)`: ストアエラー
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// 新しい Todo を採番して末尾に追加する
    ///
    /// ID は「既存 ID の最大値 + 1」で採番する。空のコレクションでは 1 を割り当てる。
    /// 採番と追加は同一ロック内で行われ、同時実行でも ID は重複しない。
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError>;
}

/// インメモリ実装の TodoRepository
///
/// `Clone` はストアを共有する（`Arc` の複製であり、コレクションの複製ではない）。
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// 空のリポジトリを作成する
    ///
    /// テストで初期状態を制御する場合に使用する。
    pub fn new() -> Self {
        Self {
            todos: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// シードデータ入りのリポジトリを作成する
    ///
    /// プロセス起動時の初期状態。ID 1〜3 の 3 件を持つ。
    pub fn with_seed_data() -> Self {
        let seed = SEED_TODOS
            .iter()
            .map(|(id, title, completed)| {
                let id = TodoId::new(*id).expect("シード ID は正の整数であること");
                Todo::new(id, *title, *completed)
            })
            .collect();

        Self {
            todos: Arc::new(Mutex::new(seed)),
        }
    }

    /// ロックを取得する
    ///
    /// 汚染されたロックは `InfraError::LockPoisoned` に変換する。
    fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>, InfraError> {
        self.todos
            .lock()
            .map_err(|e| InfraError::LockPoisoned(e.to_string()))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self.lock()?.iter().find(|t| t.id() == id).cloned())
    }

    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError> {
        // ロックは await をまたがず、採番と追加の複合操作の間だけ保持する
        let mut todos = self.lock()?;

        let max_id = todos.iter().map(|t| t.id().value()).max().unwrap_or(0);
        let id = TodoId::new(max_id + 1).map_err(|e| InfraError::Unexpected(e.to_string()))?;

        let todo = Todo::new(id, new_todo.title, new_todo.completed);
        todos.push(todo.clone());

        Ok(todo)
    }
}
