use sqlx::PgPool;

use crate::models::{Role, UpsertUser, User};

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts the user or refreshes its identity fields. Role, department and
/// manager are left untouched on conflict.
pub async fn upsert(pool: &PgPool, user: &UpsertUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, first_name, last_name, profile_image_url)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (id) DO UPDATE SET
            email = EXCLUDED.email,
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            profile_image_url = EXCLUDED.profile_image_url,
            updated_at = now()
         RETURNING *",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.profile_image_url)
    .fetch_one(pool)
    .await
}

pub async fn list_by_role(pool: &PgPool, role: Role) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = $1 ORDER BY created_at DESC")
        .bind(role)
        .fetch_all(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn list_by_manager(pool: &PgPool, manager_id: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE manager_id = $1 ORDER BY created_at DESC",
    )
    .bind(manager_id)
    .fetch_all(pool)
    .await
}

/// Everyone except `exclude_id`; the organisation-wide team of an HR admin.
pub async fn list_except(pool: &PgPool, exclude_id: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id <> $1 ORDER BY created_at DESC")
        .bind(exclude_id)
        .fetch_all(pool)
        .await
}

pub async fn update_role(pool: &PgPool, id: &str, role: Role) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET role = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(role)
    .fetch_one(pool)
    .await
}

pub async fn update_manager(
    pool: &PgPool,
    id: &str,
    manager_id: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET manager_id = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(manager_id)
    .fetch_one(pool)
    .await
}
