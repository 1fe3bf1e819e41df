//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ErrorBody`] - 错误响应结构
//! - 日志等工具

pub mod error;
pub mod logger;

pub use error::{AppError, ErrorBody};
pub use logger::{init_logger, init_logger_with_file};

/// Application-level Result type
///
/// Used in HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;

/// 当前 Unix 毫秒时间戳
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
