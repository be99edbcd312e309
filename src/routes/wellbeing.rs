use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{NewWellbeingMetric, WellbeingMetric};
use crate::routes::DateRange;
use crate::state::SharedState;
use crate::validation::{ValidJson, ValidQuery};

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    ValidQuery(range): ValidQuery<DateRange>,
) -> Result<Json<Vec<WellbeingMetric>>, AppError> {
    let (start, end) = range.bounds()?;
    let metrics = db::wellbeing::list(&state.pool, &auth.user_id, start, end).await?;
    Ok(Json(metrics))
}

pub async fn latest(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Option<WellbeingMetric>>, AppError> {
    let metric = db::wellbeing::latest(&state.pool, &auth.user_id).await?;
    Ok(Json(metric))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewWellbeingMetric>,
) -> Result<Json<WellbeingMetric>, AppError> {
    let metric = db::wellbeing::create(&state.pool, &auth.user_id, &req).await?;
    Ok(Json(metric))
}
