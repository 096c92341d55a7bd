//! # TodoFlow API サーバー
//!
//! プロセス内メモリに Todo コレクションを保持する最小の HTTP API サーバー。
//!
//! ## 役割
//!
//! - **一覧取得**: コレクション全体を挿入順で返す
//! - **ID 取得**: 指定 ID の Todo を返す
//! - **作成**: ID を採番して末尾に追加する
//!
//! 永続化は行わない。プロセス再起動でクライアント作成分は失われ、
//! シードデータ（ID 1〜3 の 3 件）が再出現する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `5000` | ポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,todoflow=debug` | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todoflow-api
//!
//! # 本番環境
//! PORT=5000 LOG_FORMAT=json cargo run -p todoflow-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use todoflow_api::{app::build_app, config::ApiConfig, handler::TodoState, usecase::TodoUseCaseImpl};
use todoflow_infra::InMemoryTodoRepository;
use todoflow_shared::observability::LogFormat;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(LogFormat::from_env());

    // 設定読み込み
    let config = ApiConfig::from_env();

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // ストアを初期化し（シードデータ入り）、ユースケース経由で State に注入する
    let repository = Arc::new(InMemoryTodoRepository::with_seed_data());
    let usecase = TodoUseCaseImpl::new(repository);
    let state = Arc::new(TodoState { usecase });

    // ルーター構築
    let app = build_app(state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// トレーシングを初期化する
///
/// `LOG_FORMAT` に応じて JSON / Pretty 出力を切り替える。
fn init_tracing(log_format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,todoflow=debug".into());

    match log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
