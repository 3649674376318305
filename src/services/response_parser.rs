//! 模型输出解析
//!
//! 去掉首尾的 markdown 代码块标记，再按严格的建议列表格式解码。

use serde_json::Value;
use thiserror::Error;

use crate::models::{Suggestion, SuggestionResponse};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// 解码错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 不是合法 JSON
    #[error("{0}")]
    Syntax(serde_json::Error),

    /// 合法 JSON，但不是建议数组
    #[error("unexpected suggestion format: {0}")]
    Schema(serde_json::Error),
}

/// 去掉首尾代码块标记
///
/// 只检查开头和结尾，不会在文本中间查找。开头优先匹配 ```json，
/// 其次是裸的 ```。重复剥离直到结果不再变化，所以对结果再调用一次不会有变化。
pub fn sanitize_response(raw: &str) -> String {
    let mut current = raw.trim();
    loop {
        let next = strip_fences_once(current);
        if next.len() == current.len() {
            return current.to_string();
        }
        current = next;
    }
}

fn strip_fences_once(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix(JSON_FENCE) {
        text = rest;
    } else if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }
    text.trim()
}

/// 将清理后的文本解码为建议列表
///
/// 任一元素缺少字段或字段不是字符串，整个解码失败，不返回部分结果。
/// 不限制数量，也不校验语气取值。
pub fn decode_suggestions(cleaned: &str) -> Result<SuggestionResponse, DecodeError> {
    let value: Value = serde_json::from_str(cleaned).map_err(DecodeError::Syntax)?;
    let suggestions: Vec<Suggestion> = serde_json::from_value(value).map_err(DecodeError::Schema)?;
    Ok(SuggestionResponse { suggestions })
}
