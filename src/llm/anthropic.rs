//! Anthropic Messages API 实现（非流式）

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::types::{ChatMessage, LlmError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic 请求载荷
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

/// Anthropic 响应
#[derive(Deserialize, Debug)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// 响应内容块，只关心文本块
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// 错误响应信封：{"type":"error","error":{"type":"...","message":"..."}}
#[derive(Deserialize)]
struct AnthropicErrorEnvelope {
    error: AnthropicErrorBody,
}

#[derive(Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// 调用 Anthropic API，返回首个内容块的文本
pub async fn send_message(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    prompt: &str,
) -> Result<String, LlmError> {
    let payload = AnthropicRequest {
        model,
        max_tokens,
        messages: vec![ChatMessage::user(prompt)],
    };

    debug!("Anthropic API request: endpoint={}, model={}", endpoint, model);

    let response = client
        .post(endpoint)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&payload)
        .send()
        .await
        .map_err(LlmError::from_transport)?;

    let status = response.status();
    let body = response.text().await.map_err(LlmError::from_transport)?;

    if !status.is_success() {
        let status_code = status.as_u16();
        error!(
            "Anthropic API error: status={}, body={}",
            status_code,
            crate::utils::truncate(&body, 500)
        );
        return Err(LlmError::ApiError {
            status: status_code,
            message: extract_error_message(&body),
        });
    }

    let parsed: AnthropicResponse = serde_json::from_str(&body)?;
    first_text_block(parsed)
}

/// 只取第一个内容块；非文本块直接失败，不继续查找后续块
fn first_text_block(response: AnthropicResponse) -> Result<String, LlmError> {
    match response.content.into_iter().next() {
        Some(ContentBlock::Text { text }) => Ok(text),
        Some(ContentBlock::Other) => Err(LlmError::UnexpectedContent(
            "Unexpected response type from AI".to_string(),
        )),
        None => Err(LlmError::UnexpectedContent(
            "Empty response from AI".to_string(),
        )),
    }
}

/// 从错误响应中提取可读信息，无法解析时返回原始内容
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<AnthropicErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}
