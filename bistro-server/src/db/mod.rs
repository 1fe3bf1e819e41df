//! Database Module
//!
//! SurrealDB 连接与启动期 schema 定义。
//!
//! 连接字符串决定引擎：
//!
//! | DB_ADDR | 引擎 |
//! |---------|------|
//! | `rocksdb://<path>` | 嵌入式 RocksDB |
//! | `ws://host:port` | 远程节点 (使用 DB_USER/DB_PASS 登录) |
//! | `mem://` | 内存 (测试) |

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::utils::AppError;

/// Database service, owns the SurrealDB connection handle
///
/// `Surreal<Any>` 是浅拷贝句柄，所有请求共享同一连接。
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, select namespace/database and apply the startup schema
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        // 嵌入式引擎需要数据目录存在
        if let Some(path) = config.db_addr.strip_prefix("rocksdb://")
            && let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::internal(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = any::connect(&config.db_addr)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.db_addr)))?;

        // Root signin only applies to remote endpoints
        if let (Some(user), Some(pass)) = (&config.db_user, &config.db_pass)
            && is_remote_addr(&config.db_addr)
        {
            db.signin(Root {
                username: user.as_str(),
                password: pass.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Database signin failed: {e}")))?;
        }

        db.use_ns(&config.db_namespace)
            .use_db(&config.db_database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        define_schema(&db).await?;

        tracing::info!(
            addr = %config.db_addr,
            ns = %config.db_namespace,
            db = %config.db_database,
            "Database connection established"
        );

        Ok(Self { db })
    }
}

fn is_remote_addr(addr: &str) -> bool {
    addr.starts_with("ws://")
        || addr.starts_with("wss://")
        || addr.starts_with("http://")
        || addr.starts_with("https://")
}

/// 启动期 schema：user.email 唯一索引保证邮箱全局唯一
async fn define_schema(db: &Surreal<Any>) -> Result<(), AppError> {
    db.query("DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user FIELDS email UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
