//! Bistro Boss Server - 餐厅点餐系统后端
//!
//! # 架构概述
//!
//! 本模块是点餐后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): SurrealDB 文档存储 (嵌入式 / 远程，由连接字符串决定)
//! - **认证** (`auth`): JWT Bearer 认证 + 数据库角色授权
//! - **HTTP API** (`api`): RESTful API 接口 (用户/菜单/评价/购物车/支付/统计)
//! - **支付** (`services`): 支付网关 PaymentIntent 集成
//!
//! # 模块结构
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、管理员授权
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓库)
//! ├── services/      # 支付网关客户端
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{AdminUser, CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();
    utils::logger::init_logger();
}

pub fn print_banner() {
    println!(
        r#"
    ____  _      __
   / __ )(_)____/ /__________
  / __  / / ___/ __/ ___/ __ \
 / /_/ / (__  ) /_/ /  / /_/ /
/_____/_/____/\__/_/   \____/
    ____
   / __ )____  __________
  / __  / __ \/ ___/ ___/
 / /_/ / /_/ (__  |__  )
/_____/\____/____/____/
    "#
    );
}
