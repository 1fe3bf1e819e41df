//! Payment Repository
//!
//! 结账写入 payment 表，同一事务内删除其引用的购物车条目，
//! 避免支付已落库而购物车残留的中间状态。

use super::{BaseRepository, RepoError, RepoResult, make_thing};
use crate::db::models::{CartItem, Payment, PaymentCreate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::sql::Thing;

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a payment and clear its cart items in one transaction
    ///
    /// 返回创建的支付记录和被清空的购物车条目数。
    pub async fn create_with_cart_cleanup(
        &self,
        data: PaymentCreate,
    ) -> RepoResult<(Payment, usize)> {
        let cart_ids: Vec<Thing> = data
            .cart_item_ids
            .iter()
            .map(|id| make_thing("cart_item", id))
            .collect();

        let menu_item_ids: Vec<Thing> = data
            .menu_item_ids
            .iter()
            .map(|id| make_thing("menu_item", id))
            .collect();

        let payment = Payment {
            id: None,
            email: data.email,
            price: data.price,
            transaction_id: data.transaction_id,
            date: now_millis(),
            status: data.status,
            cart_item_ids: cart_ids.clone(),
            menu_item_ids,
        };

        let mut result = self
            .base
            .db()
            .query("BEGIN TRANSACTION")
            .query("CREATE payment CONTENT $payment")
            .query("DELETE cart_item WHERE id INSIDE $cart_ids RETURN BEFORE")
            .query("COMMIT TRANSACTION")
            .bind(("payment", payment))
            .bind(("cart_ids", cart_ids))
            .await?;

        let created: Vec<Payment> = result.take(0)?;
        let removed: Vec<CartItem> = result.take(1)?;

        let payment = created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))?;

        Ok((payment, removed.len()))
    }

    /// Find all payments
    pub async fn find_all(&self) -> RepoResult<Vec<Payment>> {
        let payments: Vec<Payment> = self.base.db().select("payment").await?;
        Ok(payments)
    }

    /// Count all payments
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM payment GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
