//! User API 模块

mod handler;

pub use handler::{AdminStatus, CreateUserResponse};

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list).post(handler::create))
        // GET 按邮箱查管理员身份，PATCH 按 id 提权
        .route(
            "/users/admin/{id}",
            get(handler::check_admin).patch(handler::promote),
        )
}
