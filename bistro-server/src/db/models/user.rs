//! User Model

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type UserId = Thing;

/// 管理员角色标识
pub const ROLE_ADMIN: &str = "admin";

/// User model
///
/// 用户在首次登录时创建，email 全局唯一。
/// role 仅通过提权接口修改，不会被删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// 角色标记，"admin" 表示管理员，普通用户为空
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }
}

/// 创建用户的请求负载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
