//! 回复建议端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{FieldError, SuggestionRequest, SuggestionResponse};
use crate::state::AppState;

/// 生成回复建议
///
/// 请求体先按 JSON 解码，再逐字段校验，以便 422 响应列出所有出错字段。
async fn suggest_messages(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SuggestionResponse>> {
    let request_id = Uuid::new_v4().to_string()[..8].to_string();

    let Json(value) = payload.map_err(|rejection| {
        warn!("[{}] rejected request body: {}", request_id, rejection.body_text());
        AppError::MalformedRequest(vec![FieldError::invalid_body(rejection.body_text())])
    })?;

    let request = SuggestionRequest::from_value(&value).map_err(|errors| {
        warn!("[{}] request validation failed: {:?}", request_id, errors);
        AppError::MalformedRequest(errors)
    })?;

    info!(
        "[{}] suggest request: relationship_type={:?}, message_len={}",
        request_id,
        request.relationship_type,
        request.received_message.len()
    );

    let response = state.suggestions.suggest(&request, &request_id).await?;
    Ok(Json(response))
}

/// 创建回复建议路由
pub fn suggest_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/suggest-messages", post(suggest_messages))
}
