//! Review Repository

use super::{BaseRepository, RepoResult};
use crate::db::models::Review;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reviews
    pub async fn find_all(&self) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self.base.db().select(TABLE).await?;
        Ok(reviews)
    }
}
