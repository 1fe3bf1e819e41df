use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::PaymentProcessor;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 每个请求克隆一份浅拷贝；数据库句柄与 JWT 服务显式注入
/// 各 handler，不存在进程级全局变量。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | SurrealDB 连接句柄 |
/// | jwt_service | JWT 认证服务 |
/// | payments | 支付网关客户端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库连接
    pub db: Surreal<Any>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 支付网关客户端
    pub payments: Arc<PaymentProcessor>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：数据库连接 (含 schema)、JWT 服务、支付网关客户端。
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        let db_service = DbService::new(config)
            .await
            .expect("Failed to initialize database");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        if config.enable_payments && config.payment_secret_key.is_empty() {
            tracing::warn!("PAYMENT_SECRET_KEY is not set; payment intent creation will fail");
        }

        let payments = Arc::new(PaymentProcessor::new(
            config.payment_secret_key.clone(),
            config.payment_api_url.clone(),
        ));

        Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            payments,
        }
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取支付网关客户端
    pub fn payment_processor(&self) -> Arc<PaymentProcessor> {
        self.payments.clone()
    }
}
