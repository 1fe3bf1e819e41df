//! Payment API 模块
//!
//! 两步结账：先创建支付事务换取 client_secret，
//! 客户端确认后再提交支付记录落库。

mod handler;

pub use handler::{CreateIntentRequest, CreateIntentResponse, PaymentOutcome};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/create-payment-intent", post(handler::create_intent))
        .route("/payments", post(handler::create))
}
