//! Token API 模块

mod handler;

pub use handler::{TokenRequest, TokenResponse};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/jwt", post(handler::issue))
}
