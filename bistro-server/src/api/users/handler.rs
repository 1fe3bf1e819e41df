//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::auth::{AdminUser, CurrentUser};
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::{RepoError, UserRepository};
use crate::utils::{AppError, AppResult};

/// 创建用户的响应：新记录或已存在提示
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateUserResponse {
    Created(User),
    AlreadyExists { message: String },
}

/// 管理员身份查询结果
#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// GET /users - 获取所有用户 (仅管理员)
pub async fn list(
    _admin: AdminUser,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.get_db());
    let users = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(users))
}

/// POST /users - 首次登录建档
///
/// 邮箱已存在时返回提示消息，不重复插入。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<CreateUserResponse>> {
    let repo = UserRepository::new(state.get_db());
    match repo.create(payload).await {
        Ok(user) => Ok(Json(CreateUserResponse::Created(user))),
        Err(RepoError::Duplicate(message)) => {
            Ok(Json(CreateUserResponse::AlreadyExists { message }))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /users/admin/:email - 查询邮箱是否管理员
///
/// 第二层校验：令牌身份与查询邮箱不一致时直接返回 false，不回查数据库。
pub async fn check_admin(
    user: CurrentUser,
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatus>> {
    if user.email != email {
        return Ok(Json(AdminStatus { admin: false }));
    }

    let repo = UserRepository::new(state.get_db());
    let found = repo
        .find_by_email(&email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(AdminStatus {
        admin: found.map(|u| u.is_admin()).unwrap_or(false),
    }))
}

/// PATCH /users/admin/:id - 提升用户为管理员
pub async fn promote(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.promote_to_admin(&id).await?;
    Ok(Json(user))
}
