//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 请求体校验失败，列出所有出错字段
    #[error("Malformed request: {} invalid field(s)", .0.len())]
    MalformedRequest(Vec<FieldError>),

    /// 模型服务调用失败
    #[error("Error generating suggestions: {0}")]
    Upstream(String),

    /// 模型输出无法解析为建议列表
    #[error("Failed to parse AI response: {0}")]
    ResponseParse(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MalformedRequest(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": errors }),
            ),
            AppError::Config(_) | AppError::Upstream(_) | AppError::ResponseParse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "detail": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
