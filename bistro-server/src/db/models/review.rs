//! Review Model

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// 顾客评价
///
/// 只读数据，由运营侧导入，API 不暴露创建接口。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        default,
        with = "serde_thing::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Thing>,
    pub name: String,
    pub details: String,
    pub rating: f64,
}
