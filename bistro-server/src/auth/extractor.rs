//! Auth Extractors
//!
//! 认证/授权提取器：
//! - [`CurrentUser`] - 验证 Bearer 令牌，注入调用者身份
//! - [`AdminUser`] - 在身份之上回查 user 表校验管理员角色
//!
//! 公开接口与受保护接口在同一路径上按方法混布
//! (如 `GET /menu` 公开、`POST /menu` 仅管理员)，
//! 所以保护声明在 handler 签名上，而不是路由级中间件。

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted on this request
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::unauthorized());
            }
        };

        let jwt_service = state.get_jwt_service();
        match jwt_service.verify_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);

                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );

                match e {
                    JwtError::ExpiredToken => Err(AppError::token_expired()),
                    _ => Err(AppError::invalid_token("Invalid token")),
                }
            }
        }
    }
}

/// 管理员用户 - 身份验证之上的角色授权
///
/// 每次都对 user 表做即时读取，无缓存：
/// 提权/降权立即生效，代价是每个管理接口一次数据库查询。
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl FromRequestParts<ServerState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state).await?;

        let repo = UserRepository::new(state.get_db());
        let user = repo
            .find_by_email(&current.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        match user {
            Some(u) if u.is_admin() => Ok(AdminUser(current)),
            _ => {
                security_log!(
                    "WARN",
                    "admin_required",
                    email = current.email.clone(),
                    uri = format!("{:?}", parts.uri)
                );
                Err(AppError::forbidden("forbidden access"))
            }
        }
    }
}
