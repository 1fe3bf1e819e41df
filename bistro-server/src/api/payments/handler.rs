//! Payment API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Payment, PaymentCreate};
use crate::db::repository::PaymentRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// 结账结果：支付记录 + 被清空的购物车条目数
#[derive(Debug, Serialize)]
pub struct PaymentOutcome {
    pub payment: Payment,
    pub cleared_cart_items: usize,
}

/// POST /create-payment-intent - 创建支付事务
///
/// 金额按 round(price × 100) 换算为美分提交网关。
pub async fn create_intent(
    _user: CurrentUser,
    State(state): State<ServerState>,
    Json(req): Json<CreateIntentRequest>,
) -> AppResult<Json<CreateIntentResponse>> {
    if !req.price.is_finite() || req.price <= 0.0 {
        return Err(AppError::validation("Invalid price value"));
    }

    let intent = state
        .payment_processor()
        .create_payment_intent(req.price)
        .await?;

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// POST /payments - 落库支付并清空其购物车条目
///
/// 两个写操作在同一数据库事务内完成。
pub async fn create(
    _user: CurrentUser,
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<PaymentOutcome>> {
    let repo = PaymentRepository::new(state.get_db());
    let (payment, cleared) = repo
        .create_with_cart_cleanup(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(PaymentOutcome {
        payment,
        cleared_cart_items: cleared,
    }))
}
