//! Payment Model
//!
//! 支付记录在结账时写入，同一事务内清空其引用的购物车条目。

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// 支付记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Thing>,
    pub email: String,
    pub price: f64,
    /// 支付网关返回的交易 id
    pub transaction_id: String,
    /// 支付时间 (Unix 毫秒，服务端写入)
    pub date: i64,
    #[serde(default)]
    pub status: Option<String>,
    /// 本次支付清空的购物车条目
    #[serde(default, with = "serde_thing::vec")]
    pub cart_item_ids: Vec<Thing>,
    /// 购买的菜单项 (统计用)
    #[serde(default, with = "serde_thing::vec")]
    pub menu_item_ids: Vec<Thing>,
}

/// 结账请求负载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    #[serde(default)]
    pub status: Option<String>,
    /// 购物车条目 id 列表
    #[serde(default)]
    pub cart_item_ids: Vec<String>,
    /// 菜单项 id 列表
    #[serde(default)]
    pub menu_item_ids: Vec<String>,
}
