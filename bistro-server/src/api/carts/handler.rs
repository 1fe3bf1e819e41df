//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{CartItem, CartItemCreate};
use crate::db::repository::CartRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// GET /carts?email= - 查询购物车
///
/// 未给 email 参数时返回空列表；email 与令牌身份不一致时拒绝。
pub async fn list(
    user: CurrentUser,
    State(state): State<ServerState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<Vec<CartItem>>> {
    // 空字符串视同未提供
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    if email != user.email {
        security_log!(
            "WARN",
            "cart_owner_mismatch",
            token_email = user.email.clone(),
            requested_email = email.clone()
        );
        return Err(AppError::forbidden("forbidden access"));
    }

    let repo = CartRepository::new(state.get_db());
    let items = repo
        .find_by_email(&email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(items))
}

/// POST /carts - 加入购物车
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<CartItem>> {
    let repo = CartRepository::new(state.get_db());
    let item = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(item))
}

/// DELETE /carts/:id - 移除购物车条目
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CartRepository::new(state.get_db());
    let deleted = repo
        .delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(deleted))
}
