//! Menu Repository

use super::{BaseRepository, RepoResult, strip_table_prefix};
use crate::db::models::{MenuItem, MenuItemCreate};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::sql::Thing;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self.base.db().select(TABLE).await?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(item)
    }

    /// Find every menu item whose id appears in `ids`
    ///
    /// 统计聚合用：不存在的 id 直接缺席，不报错。
    pub async fn find_by_ids(&self, ids: Vec<Thing>) -> RepoResult<Vec<MenuItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id INSIDE $ids")
            .bind(("ids", ids))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let item = MenuItem {
            id: None,
            name: data.name,
            category: data.category,
            price: data.price,
            recipe: data.recipe,
            image: data.image,
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| super::RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Hard delete a menu item, returns whether a record was removed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<MenuItem> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }

    /// Count all menu items
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM menu_item GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
