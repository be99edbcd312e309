use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{Session, SessionData};

pub async fn create(
    pool: &PgPool,
    sid: &str,
    data: &SessionData,
    expire: DateTime<Utc>,
) -> Result<Session, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        "INSERT INTO sessions (sid, sess, expire) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(sid)
    .bind(Json(data))
    .bind(expire)
    .fetch_one(pool)
    .await
}

/// Unexpired session by hashed id.
pub async fn find_active(pool: &PgPool, sid: &str) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE sid = $1 AND expire > now()")
        .bind(sid)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, sid: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE sid = $1")
        .bind(sid)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expire <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
