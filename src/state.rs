//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。启动后只读，没有可变共享数据。

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::llm::{CompletionPort, LlmClient, LlmError};
use crate::services::SuggestionService;

/// 应用共享状态
pub struct AppState {
    /// 启动时加载的配置
    pub config: AppConfig,
    /// 回复建议服务
    pub suggestions: SuggestionService,
}

impl AppState {
    /// 使用指定的文本补全实现创建状态
    pub fn new(config: AppConfig, completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            config,
            suggestions: SuggestionService::new(completion),
        }
    }
}

/// 创建可共享的应用状态，使用 Anthropic 客户端
pub fn create_shared_state(config: AppConfig) -> Result<Arc<AppState>, LlmError> {
    let client = LlmClient::new(
        config.api_key.clone(),
        &config.base_url,
        config.model.clone(),
        config.max_tokens,
    )?;
    info!("LLM endpoint: {}, model={}", client.endpoint(), client.model());
    Ok(Arc::new(AppState::new(config, Arc::new(client))))
}
