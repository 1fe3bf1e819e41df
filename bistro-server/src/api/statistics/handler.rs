//! Statistics API Handlers

use std::collections::{BTreeMap, HashMap, HashSet};

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::models::{MenuItem, Payment};
use crate::db::repository::{MenuRepository, PaymentRepository, UserRepository};
use crate::utils::{AppError, AppResult};

// ============================================================================
// Response Types
// ============================================================================

/// 总览统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStats {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
    pub revenue: f64,
}

/// 分类营收统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    /// 该分类下的订单行数
    pub count: i64,
    /// 该分类的营收合计 (保留两位小数)
    pub total: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /admin-stats - 总览统计 (仅管理员)
pub async fn admin_stats(
    _admin: AdminUser,
    State(state): State<ServerState>,
) -> AppResult<Json<AdminStats>> {
    let db = state.get_db();

    let users = UserRepository::new(db.clone())
        .count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let products = MenuRepository::new(db.clone())
        .count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let payment_repo = PaymentRepository::new(db);
    let orders = payment_repo
        .count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // 营收在进程内对全部支付记录逐笔累加
    let payments = payment_repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let revenue = payments.iter().map(|p| p.price).sum();

    Ok(Json(AdminStats {
        users,
        products,
        orders,
        revenue,
    }))
}

/// GET /order-stats - 分类营收统计 (仅管理员)
///
/// 展开每笔支付引用的菜单项，按分类分组统计行数与金额。
/// 目录中已不存在的菜单项被排除；没有成交的分类不出现在结果中。
pub async fn order_stats(
    _admin: AdminUser,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<CategoryStat>>> {
    let db = state.get_db();

    let payments = PaymentRepository::new(db.clone())
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // 目录查询去重，分组统计按出现次数计数
    let mut seen = HashSet::new();
    let unique_ids: Vec<Thing> = payments
        .iter()
        .flat_map(|p| p.menu_item_ids.iter().cloned())
        .filter(|id| seen.insert(id.to_string()))
        .collect();

    let catalog = MenuRepository::new(db)
        .find_by_ids(unique_ids)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(aggregate_order_stats(&payments, &catalog)))
}

// ============================================================================
// Aggregation
// ============================================================================

/// 对支付记录引用的菜单项按分类分组
fn aggregate_order_stats(payments: &[Payment], catalog: &[MenuItem]) -> Vec<CategoryStat> {
    let by_id: HashMap<String, &MenuItem> = catalog
        .iter()
        .filter_map(|item| item.id.as_ref().map(|id| (id.to_string(), item)))
        .collect();

    let mut grouped: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for payment in payments {
        for item_id in &payment.menu_item_ids {
            if let Some(item) = by_id.get(&item_id.to_string()) {
                let entry = grouped.entry(item.category.clone()).or_insert((0, 0.0));
                entry.0 += 1;
                entry.1 += item.price;
            }
        }
    }

    grouped
        .into_iter()
        .map(|(category, (count, total))| CategoryStat {
            category,
            count,
            total: round_two(total),
        })
        .collect()
}

/// 保留两位小数
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
