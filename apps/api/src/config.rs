//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。これにより:
//!
//! - 環境ごとの設定を変更せずにデプロイ可能
//! - コンテナ環境での設定注入が容易
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `HOST` | No | `0.0.0.0` | バインドアドレス（全インターフェース） |
//! | `PORT` | No | `5000` | リッスンポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |

use std::env;

/// API サーバーの設定
///
/// アプリケーション起動時に一度だけ構築し、サーバー起動に渡す。
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host: String,
    /// ポート番号（例: `5000`, `8080`）
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての変数はオプションで、未設定時はデフォルト値を使用する。
    /// `PORT` がポート番号としてパースできない場合もデフォルトの 5000 を使用する。
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        }
    }
}
