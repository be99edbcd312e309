use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{NewRecommendation, Recommendation};
use crate::state::SharedState;
use crate::validation::{ValidJson, ValidPath};

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let recommendations = db::recommendations::list(&state.pool, &auth.user_id).await?;
    Ok(Json(recommendations))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewRecommendation>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = db::recommendations::create(&state.pool, &auth.user_id, &req).await?;
    Ok(Json(recommendation))
}

pub async fn mark_read(
    auth: AuthUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::recommendations::mark_read(&state.pool, id, &auth.user_id).await?;
    Ok(super::success())
}

pub async fn mark_actioned(
    auth: AuthUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::recommendations::mark_actioned(&state.pool, id, &auth.user_id).await?;
    Ok(super::success())
}
