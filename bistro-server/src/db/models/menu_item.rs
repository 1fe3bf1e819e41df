//! Menu Item Model

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type MenuItemId = Thing;

/// 菜单项
///
/// 仅管理员可以创建/删除，所有人可读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<MenuItemId>,
    pub name: String,
    /// 菜品分类 (如 "pizza", "salad", "dessert")
    pub category: String,
    pub price: f64,
    /// 菜品描述
    #[serde(default)]
    pub recipe: Option<String>,
    /// 图片 URL
    #[serde(default)]
    pub image: Option<String>,
}

/// 创建菜单项的请求负载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
