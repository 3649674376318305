//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 回复建议请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// 收到的消息原文
    pub received_message: String,
    /// 与对方的关系，例如 colleague、partner、friend
    pub relationship_type: String,
    /// 希望回复达成的目标
    pub desired_outcome: String,
}

impl SuggestionRequest {
    /// 从任意 JSON 值校验并构建请求
    ///
    /// 三个字段都必须存在且为字符串（允许空字符串）。失败时一次性返回
    /// 所有出错字段，而不是遇到第一个就停止。
    pub fn from_value(value: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = value.as_object() else {
            return Err(vec![FieldError {
                loc: vec!["body".to_string()],
                msg: "Input should be a valid dictionary".to_string(),
                kind: "dict_type".to_string(),
            }]);
        };

        let mut errors = Vec::new();
        let mut take = |name: &str| match object.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errors.push(FieldError::not_a_string(name));
                None
            }
            None => {
                errors.push(FieldError::missing(name));
                None
            }
        };

        let received_message = take("received_message");
        let relationship_type = take("relationship_type");
        let desired_outcome = take("desired_outcome");

        match (received_message, relationship_type, desired_outcome) {
            (Some(received_message), Some(relationship_type), Some(desired_outcome)) => Ok(Self {
                received_message,
                relationship_type,
                desired_outcome,
            }),
            _ => Err(errors),
        }
    }
}

/// 单条字段校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 出错位置，如 ["body", "desired_outcome"]
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "Field required".to_string(),
            kind: "missing".to_string(),
        }
    }

    pub fn not_a_string(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "Input should be a valid string".to_string(),
            kind: "string_type".to_string(),
        }
    }

    /// 请求体本身无法解码为 JSON
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: "json_invalid".to_string(),
        }
    }
}

/// 单条回复建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 建议的消息文本
    pub text: String,
    /// 语气标签
    pub tone: String,
    /// 一句话说明
    pub reasoning: String,
}

/// 回复建议响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_empty_strings() {
        let value = json!({
            "received_message": "",
            "relationship_type": "friend",
            "desired_outcome": ""
        });
        let request = SuggestionRequest::from_value(&value).unwrap();
        assert_eq!(request.relationship_type, "friend");
        assert!(request.received_message.is_empty());
    }

    #[test]
    fn test_from_value_reports_missing_field() {
        let value = json!({
            "received_message": "Can we meet Tuesday at 3pm?",
            "relationship_type": "colleague"
        });
        let errors = SuggestionRequest::from_value(&value).unwrap_err();
        assert_eq!(errors, vec![FieldError::missing("desired_outcome")]);
    }

    #[test]
    fn test_from_value_reports_every_bad_field() {
        let value = json!({
            "received_message": 42,
            "relationship_type": null
        });
        let errors = SuggestionRequest::from_value(&value).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::not_a_string("received_message"),
                FieldError::not_a_string("relationship_type"),
                FieldError::missing("desired_outcome"),
            ]
        );
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let errors = SuggestionRequest::from_value(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body"]);
        assert_eq!(errors[0].kind, "dict_type");
    }
}
