//! 文本补全端口与 Anthropic 客户端

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::anthropic::send_message;
use super::format::build_anthropic_endpoint;
use super::types::LlmError;

/// 文本补全端口
///
/// 输入提示词，返回模型的原始文本。处理器只依赖这个 trait，
/// 测试中可以替换为不访问网络的实现。
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Anthropic LLM 客户端
///
/// 单轮对话，无系统提示词，不重试。超时沿用 HTTP 客户端默认值。
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        let client = Client::builder()
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            endpoint: build_anthropic_endpoint(base_url),
            model: model.into(),
            max_tokens,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionPort for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        info!("LLM request: model={}, prompt_len={}", self.model, prompt.len());
        send_message(
            &self.client,
            &self.endpoint,
            &self.api_key,
            &self.model,
            self.max_tokens,
            prompt,
        )
        .await
    }
}
