//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`ErrorBody`] - 错误响应结构 `{error, message}`
//!
//! # 错误分类
//!
//! | 分类 | HTTP 状态码 |
//! |------|------------|
//! | 认证错误 (未登录、令牌过期、无效令牌) | 401 |
//! | 权限错误 (非管理员、身份不匹配) | 403 |
//! | 业务逻辑错误 (不存在、重复、验证失败) | 404 / 409 / 400 |
//! | 系统错误 (数据库、支付网关、内部) | 500 / 502 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("User not found"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// 错误响应结构
///
/// ```json
/// {
///   "error": true,
///   "message": "unauthorized access"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 恒为 true (成功响应不使用本结构)
    pub error: bool,
    /// 错误消息
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401) ==========
    #[error("unauthorized access")]
    /// 缺少或无法解析 Authorization 头
    Unauthorized,

    #[error("token expired")]
    /// 令牌过期
    TokenExpired,

    #[error("invalid token: {0}")]
    /// 无效令牌
    InvalidToken(String),

    // ========== 权限错误 (403) ==========
    #[error("forbidden access: {0}")]
    /// 无权限或身份不匹配
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("payment processor error: {0}")]
    /// 支付网关错误 (502)
    Payment(String),

    #[error("internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    /// HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::TokenExpired | AppError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Payment(_) => StatusCode::BAD_GATEWAY,
        }
    }

    // ==================== Convenience constructors ====================

    /// 未认证错误
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    /// 令牌过期错误
    pub fn token_expired() -> Self {
        Self::TokenExpired
    }

    /// 无效令牌错误
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    /// 无权限错误
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// 资源不存在错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 资源冲突错误
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// 验证失败错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 数据库错误
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// 支付网关错误
    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }

    /// 内部错误
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized access".to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "token expired".to_string()),
            AppError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "unauthorized access".to_string())
            }
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "database error".to_string())
            }
            AppError::Payment(msg) => {
                error!(target: "payment", error = %msg, "Payment processor error occurred");
                (StatusCode::BAD_GATEWAY, "payment processor error".to_string())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        let body = Json(ErrorBody {
            error: true,
            message,
        });

        (status, body).into_response()
    }
}
