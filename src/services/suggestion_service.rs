//! 回复建议服务
//!
//! 串联提示词构建、模型调用、输出清理与解码。每次调用互不影响，不保存状态。

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::prompt_service::PromptService;
use super::response_parser::{decode_suggestions, sanitize_response};
use crate::error::{AppError, AppResult};
use crate::llm::CompletionPort;
use crate::models::{SuggestionRequest, SuggestionResponse};
use crate::utils::truncate;

/// 回复建议服务
pub struct SuggestionService {
    completion: Arc<dyn CompletionPort>,
    prompts: PromptService,
}

impl SuggestionService {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            completion,
            prompts: PromptService::new(),
        }
    }

    /// 生成回复建议
    ///
    /// 模型调用失败时直接返回，不会进入解码阶段；不重试。
    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
        request_id: &str,
    ) -> AppResult<SuggestionResponse> {
        let prompt = self.prompts.build_suggestion_prompt(request);
        debug!("[{}] prompt built: {} chars", request_id, prompt.len());

        let raw = self.completion.complete(&prompt).await.map_err(|e| {
            warn!("[{}] model call failed: {}", request_id, e);
            AppError::Upstream(e.to_string())
        })?;

        let cleaned = sanitize_response(&raw);
        let response = decode_suggestions(&cleaned).map_err(|e| {
            warn!(
                "[{}] failed to decode model output: {}, preview={:?}",
                request_id,
                e,
                truncate(&cleaned, 200)
            );
            AppError::ResponseParse(e.to_string())
        })?;

        info!(
            "[{}] generated {} suggestion(s)",
            request_id,
            response.suggestions.len()
        );
        Ok(response)
    }
}
