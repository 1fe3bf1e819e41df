//! Cart API 模块

mod handler;

pub use handler::CartQuery;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/carts", get(handler::list).post(handler::create))
        .route("/carts/{id}", delete(handler::remove))
}
