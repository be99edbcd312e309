use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;
use crate::models::Score;
use crate::validation::{Rules, Validate};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityMetric {
    pub id: Uuid,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub productivity_score: Option<Score>,
    pub focus_hours: Option<Score>,
    pub tasks_completed: Option<i32>,
    pub meeting_hours: Option<Score>,
    pub breaks_taken: Option<i32>,
    pub overtime_hours: Option<Score>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductivityMetric {
    pub date: Option<DateTime<Utc>>,
    pub productivity_score: Option<Score>,
    pub focus_hours: Option<Score>,
    pub tasks_completed: Option<i32>,
    pub meeting_hours: Option<Score>,
    pub breaks_taken: Option<i32>,
    pub overtime_hours: Option<Score>,
}

impl Validate for NewProductivityMetric {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .range("productivityScore", self.productivity_score.map(Score::value), 0.0, 10.0)
            .range("focusHours", self.focus_hours.map(Score::value), 0.0, 24.0)
            .min("tasksCompleted", self.tasks_completed, 0)
            .range("meetingHours", self.meeting_hours.map(Score::value), 0.0, 24.0)
            .min("breaksTaken", self.breaks_taken, 0)
            .range("overtimeHours", self.overtime_hours.map(Score::value), 0.0, 24.0)
            .finish()
    }
}
