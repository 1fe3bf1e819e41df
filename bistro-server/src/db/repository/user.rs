//! User Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing};
use crate::db::models::{ROLE_ADMIN, User, UserCreate};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self.base.db().select(TABLE).await?;
        Ok(users)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user
    ///
    /// 邮箱已存在时返回 [`RepoError::Duplicate`]，不插入重复记录。
    /// 唯一索引兜底 check-then-insert 之间的并发竞争。
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate("user already exists".to_string()));
        }

        let user = User {
            id: None,
            email: data.email,
            name: data.name,
            role: None,
        };

        let created: Option<User> = self
            .base
            .db()
            .create(TABLE)
            .content(user)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                if msg.to_lowercase().contains("index") {
                    RepoError::Duplicate("user already exists".to_string())
                } else {
                    RepoError::Database(msg)
                }
            })?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Promote a user to the admin role
    pub async fn promote_to_admin(&self, id: &str) -> RepoResult<User> {
        let thing = make_thing(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET role = $role")
            .bind(("thing", thing))
            .bind(("role", ROLE_ADMIN.to_string()))
            .await?;
        let updated: Vec<User> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    /// Count all users
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM user GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
