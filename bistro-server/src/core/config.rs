use crate::auth::JwtConfig;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | DB_ADDR | rocksdb://data/bistro.db | 数据库连接字符串 |
/// | DB_NS | bistro | SurrealDB namespace |
/// | DB_NAME | bistro | SurrealDB database |
/// | DB_USER / DB_PASS | (无) | 远程数据库 root 凭证 |
/// | JWT_SECRET | (必须) | 令牌签名密钥 (≥32 字节) |
/// | JWT_EXPIRATION_MINUTES | 60 | 令牌过期时间 |
/// | PAYMENT_SECRET_KEY | (空) | 支付网关 secret key |
/// | PAYMENT_API_URL | https://api.stripe.com | 支付网关地址 |
/// | ENABLE_PAYMENTS | true | 是否启用支付与统计接口 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DB_ADDR=mem:// cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库连接字符串 (rocksdb:// | ws:// | mem://)
    pub db_addr: String,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_database: String,
    /// 远程数据库用户名
    pub db_user: Option<String>,
    /// 远程数据库密码
    pub db_pass: Option<String>,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 支付网关 secret key
    pub payment_secret_key: String,
    /// 支付网关地址
    pub payment_api_url: String,
    /// 功能开关：支付 + 营收统计接口
    ///
    /// 关闭后路由中不含 /create-payment-intent、/payments、
    /// /admin-stats、/order-stats (精简部署形态)。
    pub enable_payments: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            db_addr: std::env::var("DB_ADDR")
                .unwrap_or_else(|_| "rocksdb://data/bistro.db".into()),
            db_namespace: std::env::var("DB_NS").unwrap_or_else(|_| "bistro".into()),
            db_database: std::env::var("DB_NAME").unwrap_or_else(|_| "bistro".into()),
            db_user: std::env::var("DB_USER").ok(),
            db_pass: std::env::var("DB_PASS").ok(),
            jwt: JwtConfig::default(),
            payment_secret_key: std::env::var("PAYMENT_SECRET_KEY").unwrap_or_default(),
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
            enable_payments: std::env::var("ENABLE_PAYMENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(db_addr: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_addr = db_addr.into();
        config.http_port = http_port;
        config
    }
}
