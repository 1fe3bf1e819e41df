//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate};
use crate::db::repository::MenuRepository;
use crate::utils::{AppError, AppResult};

/// GET /menu - 获取所有菜单项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuRepository::new(state.get_db());
    let items = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(items))
}

/// POST /menu - 创建菜单项 (仅管理员)
pub async fn create(
    _admin: AdminUser,
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuRepository::new(state.get_db());
    let item = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(item))
}

/// DELETE /menu/:id - 删除菜单项 (仅管理员)
pub async fn remove(
    _admin: AdminUser,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuRepository::new(state.get_db());
    let deleted = repo
        .delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(deleted))
}
