use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;
use crate::models::Score;
use crate::validation::{Rules, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "stress_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingMetric {
    pub id: Uuid,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub wellbeing_score: Option<Score>,
    pub stress_level: Option<StressLevel>,
    pub work_life_balance: Option<Score>,
    pub mood_rating: Option<i32>,
    pub sleep_hours: Option<Score>,
    pub exercise_minutes: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new observation. Any `userId` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWellbeingMetric {
    pub date: Option<DateTime<Utc>>,
    pub wellbeing_score: Option<Score>,
    pub stress_level: Option<StressLevel>,
    pub work_life_balance: Option<Score>,
    pub mood_rating: Option<i32>,
    pub sleep_hours: Option<Score>,
    pub exercise_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl Validate for NewWellbeingMetric {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .range("wellbeingScore", self.wellbeing_score.map(Score::value), 0.0, 10.0)
            .range("workLifeBalance", self.work_life_balance.map(Score::value), 0.0, 10.0)
            .range("moodRating", self.mood_rating, 1, 10)
            .range("sleepHours", self.sleep_hours.map(Score::value), 0.0, 24.0)
            .min("exerciseMinutes", self.exercise_minutes, 0)
            .check(
                self.notes.as_ref().is_none_or(|n| n.chars().count() <= 5000),
                "notes",
                "must be at most 5000 characters",
            )
            .finish()
    }
}
