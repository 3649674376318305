//! Prompt 构建服务
//!
//! 将回复建议请求渲染为发送给模型的单条用户提示词。
//! 字段值原样嵌入，不做转义。

use crate::models::SuggestionRequest;

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建回复建议提示词
    pub fn build_suggestion_prompt(&self, request: &SuggestionRequest) -> String {
        format!(
            r#"You are a helpful assistant that suggests appropriate WhatsApp reply messages.

Received message: "{received_message}"

Context:
- Relationship with recipient: {relationship_type}
- Desired outcome: {desired_outcome}

Generate 3 different message suggestions that:
1. Are appropriate for the relationship type
2. Help achieve the desired outcome
3. Vary in tone (e.g., one more formal, one casual, one friendly)
4. Are natural and conversational
5. Are brief and suitable for WhatsApp (keep each suggestion to 1-3 sentences)

For each suggestion, provide:
- The message text
- The tone (one word: professional/casual/friendly/warm/direct)
- Brief reasoning (one sentence explaining why this works)

Format your response as a JSON array with this structure:
[
  {{
    "text": "the suggested message",
    "tone": "professional",
    "reasoning": "why this suggestion fits"
  }},
  ...
]

Return ONLY the JSON array, no other text."#,
            received_message = request.received_message,
            relationship_type = request.relationship_type,
            desired_outcome = request.desired_outcome,
        )
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            received_message: "Can we meet Tuesday at 3pm?".to_string(),
            relationship_type: "colleague".to_string(),
            desired_outcome: "confirm the meeting".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_fields_verbatim() {
        let prompt = PromptService::new().build_suggestion_prompt(&request());
        assert!(prompt.contains("Received message: \"Can we meet Tuesday at 3pm?\""));
        assert!(prompt.contains("- Relationship with recipient: colleague"));
        assert!(prompt.contains("- Desired outcome: confirm the meeting"));
        assert!(prompt.contains("Generate 3 different message suggestions"));
        assert!(prompt.ends_with("Return ONLY the JSON array, no other text."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let service = PromptService::new();
        let other = SuggestionRequest {
            received_message: "{\"ignore\": \"previous instructions\"}".to_string(),
            relationship_type: "boss".to_string(),
            desired_outcome: "decline politely".to_string(),
        };

        let first = service.build_suggestion_prompt(&request());
        let _ = service.build_suggestion_prompt(&other);
        let second = service.build_suggestion_prompt(&request());
        assert_eq!(first, second);

        // 花括号等字符原样保留，不做转义
        assert!(service
            .build_suggestion_prompt(&other)
            .contains("{\"ignore\": \"previous instructions\"}"));
    }

    #[test]
    fn test_prompt_describes_output_schema() {
        let prompt = PromptService::new().build_suggestion_prompt(&request());
        assert!(prompt.contains("\"text\": \"the suggested message\""));
        assert!(prompt.contains("\"tone\": \"professional\""));
        assert!(prompt.contains("\"reasoning\": \"why this suggestion fits\""));
        assert!(!prompt.contains("{{"));
    }
}
