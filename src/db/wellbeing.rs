use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewWellbeingMetric, WellbeingMetric};

/// Metrics for `user_id`, newest observation first. Each bound is inclusive
/// and applies only when given.
pub async fn list(
    pool: &PgPool,
    user_id: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<Vec<WellbeingMetric>, sqlx::Error> {
    sqlx::query_as::<_, WellbeingMetric>(
        "SELECT * FROM wellbeing_metrics
         WHERE user_id = $1
           AND ($2::timestamptz IS NULL OR date >= $2)
           AND ($3::timestamptz IS NULL OR date <= $3)
         ORDER BY date DESC, created_at DESC",
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    user_id: &str,
    metric: &NewWellbeingMetric,
) -> Result<WellbeingMetric, sqlx::Error> {
    sqlx::query_as::<_, WellbeingMetric>(
        "INSERT INTO wellbeing_metrics
            (id, user_id, date, wellbeing_score, stress_level, work_life_balance,
             mood_rating, sleep_hours, exercise_minutes, notes)
         VALUES ($1, $2, COALESCE($3, now()), $4, $5, $6, $7, $8, $9, $10)
         RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(metric.date)
    .bind(metric.wellbeing_score)
    .bind(metric.stress_level)
    .bind(metric.work_life_balance)
    .bind(metric.mood_rating)
    .bind(metric.sleep_hours)
    .bind(metric.exercise_minutes)
    .bind(&metric.notes)
    .fetch_one(pool)
    .await
}

pub async fn latest(pool: &PgPool, user_id: &str) -> Result<Option<WellbeingMetric>, sqlx::Error> {
    sqlx::query_as::<_, WellbeingMetric>(
        "SELECT * FROM wellbeing_metrics WHERE user_id = $1
         ORDER BY date DESC, created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
