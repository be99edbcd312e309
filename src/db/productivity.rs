use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewProductivityMetric, ProductivityMetric};

pub async fn list(
    pool: &PgPool,
    user_id: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<Vec<ProductivityMetric>, sqlx::Error> {
    sqlx::query_as::<_, ProductivityMetric>(
        "SELECT * FROM productivity_metrics
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
    metric: &NewProductivityMetric,
) -> Result<ProductivityMetric, sqlx::Error> {
    sqlx::query_as::<_, ProductivityMetric>(
        "INSERT INTO productivity_metrics
            (id, user_id, date, productivity_score, focus_hours, tasks_completed,
             meeting_hours, breaks_taken, overtime_hours)
         VALUES ($1, $2, COALESCE($3, now()), $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(metric.date)
    .bind(metric.productivity_score)
    .bind(metric.focus_hours)
    .bind(metric.tasks_completed)
    .bind(metric.meeting_hours)
    .bind(metric.breaks_taken)
    .bind(metric.overtime_hours)
    .fetch_one(pool)
    .await
}

pub async fn latest(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<ProductivityMetric>, sqlx::Error> {
    sqlx::query_as::<_, ProductivityMetric>(
        "SELECT * FROM productivity_metrics WHERE user_id = $1
         ORDER BY date DESC, created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
