//! Statistics API 模块
//!
//! 营收统计，仅管理员可见。

mod handler;

pub use handler::{AdminStats, CategoryStat};

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin-stats", get(handler::admin_stats))
        .route("/order-stats", get(handler::order_stats))
}
