//! Token API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 令牌签发请求 - 客户端登录后提交的身份负载
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt - 为身份负载签发一小时有效期的令牌
///
/// 无刷新、无吊销：过期后客户端重新登录换取新令牌。
pub async fn issue(
    State(state): State<ServerState>,
    Json(payload): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .get_jwt_service()
        .issue_token(&payload.email, payload.name.as_deref())
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    Ok(Json(TokenResponse { token }))
}
