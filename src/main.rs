//! WhatsApp AI Assistant - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，根据收到的消息、关系和期望结果生成回复建议。

use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;
mod utils;

use api::create_api_routes;
use config::AppConfig;
use state::create_shared_state;
use utils::mask_api_key;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env（不存在时忽略）
    let _ = dotenvy::dotenv();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reply_assistant_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    info!("Starting {}...", config.service_name);
    info!(
        "LLM provider: base_url={}, api_key={}",
        config.base_url,
        mask_api_key(&config.api_key)
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // 创建共享状态
    let state = create_shared_state(config).context("failed to create LLM client")?;

    // 配置 CORS（允许所有来源，仅适用于开发或受信任客户端）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new().merge(create_api_routes(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    info!("Server listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
