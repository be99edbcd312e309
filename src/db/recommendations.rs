use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewRecommendation, Recommendation};

pub const LIST_LIMIT: i64 = 10;

pub async fn list(pool: &PgPool, user_id: &str) -> Result<Vec<Recommendation>, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>(
        "SELECT * FROM recommendations WHERE user_id = $1
         ORDER BY created_at DESC, id DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    user_id: &str,
    rec: &NewRecommendation,
) -> Result<Recommendation, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>(
        "INSERT INTO recommendations
            (id, user_id, kind, title, description, priority, is_read, is_actioned, expires_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(rec.kind)
    .bind(rec.title.trim())
    .bind(&rec.description)
    .bind(rec.priority)
    .bind(rec.is_read)
    .bind(rec.is_actioned)
    .bind(rec.expires_at)
    .fetch_one(pool)
    .await
}

pub async fn mark_read(pool: &PgPool, id: Uuid, user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE recommendations SET is_read = true WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn mark_actioned(pool: &PgPool, id: Uuid, user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE recommendations SET is_actioned = true WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
