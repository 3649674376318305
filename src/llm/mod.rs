//! LLM 模块
//!
//! 提供文本补全端口及其 Anthropic Messages API 实现。

mod anthropic;
mod client;
mod format;
mod types;

pub use client::{CompletionPort, LlmClient};
pub use types::LlmError;
