//! Review API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Review;
use crate::db::repository::ReviewRepository;
use crate::utils::{AppError, AppResult};

/// GET /reviews - 获取所有评价
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    let repo = ReviewRepository::new(state.get_db());
    let reviews = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(reviews))
}
