pub mod admin;
pub mod auth;
pub mod productivity;
pub mod recommendations;
pub mod team;
pub mod wellbeing;

use axum::routing::{get, patch, post, put};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::SharedState;
use crate::validation::{parse_date_bound, Bound};

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/session", post(auth::create_session))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        // Wellbeing
        .route(
            "/api/wellbeing/metrics",
            get(wellbeing::list).post(wellbeing::create),
        )
        .route("/api/wellbeing/latest", get(wellbeing::latest))
        // Productivity
        .route(
            "/api/productivity/metrics",
            get(productivity::list).post(productivity::create),
        )
        .route("/api/productivity/latest", get(productivity::latest))
        // Recommendations
        .route(
            "/api/recommendations",
            get(recommendations::list).post(recommendations::create),
        )
        .route(
            "/api/recommendations/{id}/read",
            patch(recommendations::mark_read),
        )
        .route(
            "/api/recommendations/{id}/action",
            patch(recommendations::mark_actioned),
        )
        // Team analytics
        .route("/api/team/wellbeing-average", get(team::wellbeing_average))
        .route("/api/team/summary", get(team::summary))
        .route("/api/team/members", get(team::members))
        // Admin
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}/role", put(admin::update_role))
        .route("/api/admin/users/{id}/manager", put(admin::update_manager))
}

/// `?startDate=&endDate=` on the metric listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn bounds(&self) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AppError> {
        let start = parse_date_bound(self.start_date.as_deref(), Bound::Start);
        let end = parse_date_bound(self.end_date.as_deref(), Bound::End);
        match (start, end) {
            (Ok(start), Ok(end)) => Ok((start, end)),
            (start, end) => Err(AppError::Validation(
                [start.err(), end.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

pub fn success() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "success": true }))
}
