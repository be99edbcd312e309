use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::MemberAggregate;

/// Whose metrics feed a team view.
#[derive(Debug, Clone, Copy)]
pub enum TeamScope<'a> {
    DirectReports { manager_id: &'a str },
    Organisation { viewer_id: &'a str },
}

/// One row per team member with metric sums and counts since `since`.
/// Members with no samples still appear, with zero counts.
pub async fn member_aggregates(
    pool: &PgPool,
    scope: TeamScope<'_>,
    since: DateTime<Utc>,
) -> Result<Vec<MemberAggregate>, sqlx::Error> {
    let (manager_id, viewer_id) = match scope {
        TeamScope::DirectReports { manager_id } => (Some(manager_id), None),
        TeamScope::Organisation { viewer_id } => (None, Some(viewer_id)),
    };

    sqlx::query_as::<_, MemberAggregate>(
        "SELECT u.id AS user_id, u.first_name, u.last_name, u.email,
                w.wellbeing_sum, COALESCE(w.wellbeing_count, 0) AS wellbeing_count,
                w.mood_sum, COALESCE(w.mood_count, 0) AS mood_count,
                p.productivity_sum, COALESCE(p.productivity_count, 0) AS productivity_count
         FROM users u
         LEFT JOIN (
             SELECT user_id,
                    SUM(wellbeing_score) AS wellbeing_sum,
                    COUNT(wellbeing_score) AS wellbeing_count,
                    SUM(mood_rating)::float8 AS mood_sum,
                    COUNT(mood_rating) AS mood_count
             FROM wellbeing_metrics
             WHERE date >= $3
             GROUP BY user_id
         ) w ON w.user_id = u.id
         LEFT JOIN (
             SELECT user_id,
                    SUM(productivity_score) AS productivity_sum,
                    COUNT(productivity_score) AS productivity_count
             FROM productivity_metrics
             WHERE date >= $3
             GROUP BY user_id
         ) p ON p.user_id = u.id
         WHERE ($1::text IS NULL OR u.manager_id = $1)
           AND ($2::text IS NULL OR u.id <> $2)
         ORDER BY u.created_at, u.id",
    )
    .bind(manager_id)
    .bind(viewer_id)
    .bind(since)
    .fetch_all(pool)
    .await
}
