//! 认证授权模块
//!
//! 提供 JWT 认证和基于角色的授权：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文 (提取器验证 Bearer 令牌)
//! - [`AdminUser`] - 管理员授权提取器 (回查数据库角色)

pub mod extractor;
pub mod jwt;

pub use extractor::AdminUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
