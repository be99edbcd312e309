use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};

use crate::analytics;
use crate::auth::extractor::TeamViewer;
use crate::db;
use crate::db::team::TeamScope;
use crate::error::AppError;
use crate::models::{MemberAggregate, TeamSummary, TeamWellbeingAverage, User};
use crate::state::SharedState;

async fn window_aggregates(
    state: &SharedState,
    viewer: &TeamViewer,
) -> Result<Vec<MemberAggregate>, AppError> {
    let since = Utc::now() - Duration::days(state.config.team_window_days);
    let members = db::team::member_aggregates(&state.pool, viewer.scope(), since).await?;
    Ok(members)
}

pub async fn wellbeing_average(
    viewer: TeamViewer,
    State(state): State<SharedState>,
) -> Result<Json<TeamWellbeingAverage>, AppError> {
    let members = window_aggregates(&state, &viewer).await?;
    Ok(Json(analytics::average_wellbeing(&members)))
}

pub async fn summary(
    viewer: TeamViewer,
    State(state): State<SharedState>,
) -> Result<Json<TeamSummary>, AppError> {
    let members = window_aggregates(&state, &viewer).await?;
    Ok(Json(analytics::summarize(&members)))
}

pub async fn members(
    viewer: TeamViewer,
    State(state): State<SharedState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = match viewer.scope() {
        TeamScope::DirectReports { manager_id } => {
            db::users::list_by_manager(&state.pool, manager_id).await?
        }
        TeamScope::Organisation { viewer_id } => {
            db::users::list_except(&state.pool, viewer_id).await?
        }
    };
    Ok(Json(users))
}
