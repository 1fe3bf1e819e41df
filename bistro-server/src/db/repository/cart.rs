//! Cart Repository

use super::{BaseRepository, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{CartItem, CartItemCreate};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "cart_item";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all cart items owned by `email`
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<CartItem>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM cart_item WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?;
        let items: Vec<CartItem> = result.take(0)?;
        Ok(items)
    }

    /// Add an item to a cart
    pub async fn create(&self, data: CartItemCreate) -> RepoResult<CartItem> {
        let item = CartItem {
            id: None,
            email: data.email,
            menu_item_id: make_thing("menu_item", &data.menu_item_id),
            name: data.name,
            image: data.image,
            price: data.price,
        };

        let created: Option<CartItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| super::RepoError::Database("Failed to create cart item".to_string()))
    }

    /// Remove a cart item, returns whether a record was removed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<CartItem> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
