//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 存活检查
//! - [`token`] - 令牌签发
//! - [`users`] - 用户管理接口
//! - [`menu`] - 菜单管理接口
//! - [`reviews`] - 评价接口
//! - [`carts`] - 购物车接口
//! - [`payments`] - 支付接口
//! - [`statistics`] - 营收统计接口

pub mod carts;
pub mod health;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod statistics;
pub mod token;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::AppResult;
