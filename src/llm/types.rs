//! LLM 类型定义

use serde::Serialize;

/// 聊天消息
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// 角色：user, assistant
    pub role: String,
    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 超时错误
    #[error("request timed out")]
    Timeout,

    /// 配置错误
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// 响应信封 JSON 解析错误
    #[error("failed to decode provider response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 首个内容块不是文本
    #[error("{0}")]
    UnexpectedContent(String),
}

impl LlmError {
    /// 将 reqwest 错误归类，超时单独区分
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::HttpError(err)
        }
    }
}
