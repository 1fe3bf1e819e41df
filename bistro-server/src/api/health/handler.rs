//! Health API Handlers

/// GET / - 存活探针
pub async fn liveness() -> &'static str {
    "bistro is running"
}
