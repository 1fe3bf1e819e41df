//! Cart Item Model

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type CartItemId = Thing;

/// 购物车条目 - 等待支付的订单行
///
/// email 标识归属用户；读取仅限归属者本人，
/// 创建和按 id 删除不要求登录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CartItemId>,
    /// 归属用户 email
    pub email: String,
    /// 引用的菜单项
    #[serde(with = "serde_thing")]
    pub menu_item_id: Thing,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
}

/// 加入购物车的请求负载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemCreate {
    pub email: String,
    /// 菜单项 id ("menu_item:xxx" 或纯 id)
    pub menu_item_id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
}
