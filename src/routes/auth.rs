use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::auth::identity;
use crate::auth::session::{clear_session_cookie, generate_secret, hash_secret, session_cookie};
use crate::db;
use crate::error::{AppError, FieldError};
use crate::models::{SessionData, User};
use crate::state::SharedState;
use crate::validation::{Rules, ValidJson, Validate};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    /// Identity token issued by the external provider.
    pub token: String,
}

impl Validate for CreateSessionRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new().text("token", &self.token, 8192).finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

pub async fn create_session(
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<CreateSessionRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let claims = identity::decode_token(
        &req.token,
        &state.config.identity_secret,
        state.config.identity_issuer.as_deref(),
    )
    .map_err(|e| {
        tracing::warn!("Rejected identity token: {e}");
        AppError::Unauthorized("Invalid identity token".to_string())
    })?;

    let user = db::users::upsert(&state.pool, &claims.to_upsert())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email is already linked to another account".to_string())
            }
            _ => AppError::Database(e),
        })?;

    match db::sessions::delete_expired(&state.pool).await {
        Ok(0) => {}
        Ok(purged) => tracing::debug!("Purged {purged} expired sessions"),
        Err(e) => tracing::warn!("Failed to purge expired sessions: {e}"),
    }

    let secret = generate_secret();
    let now = Utc::now();
    let expires_at = now + Duration::hours(state.config.session_ttl_hours);
    let data = SessionData {
        user_id: user.id.clone(),
        email: user.email.clone(),
        issued_at: now,
    };
    db::sessions::create(&state.pool, &hash_secret(&secret), &data, expires_at).await?;

    tracing::info!(user_id = %user.id, "Session created");

    let jar = session_cookie(
        &secret,
        state.config.session_ttl_hours,
        state.config.secure_cookies,
    );
    Ok((jar, Json(SessionResponse {
        token: secret,
        expires_at,
        user,
    })))
}

pub async fn logout(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<(CookieJar, Json<serde_json::Value>), AppError> {
    db::sessions::delete(&state.pool, &auth.sid).await?;
    tracing::info!(user_id = %auth.user_id, "Session deleted");
    Ok((clear_session_cookie(), super::success()))
}

/// The caller's user record, or `null` if it no longer exists.
pub async fn current_user(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Option<User>>, AppError> {
    let user = db::users::find_by_id(&state.pool, &auth.user_id).await?;
    Ok(Json(user))
}
