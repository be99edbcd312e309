use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::session::{hash_secret, SESSION_COOKIE};
use crate::db;
use crate::db::team::TeamScope;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::state::SharedState;

/// Caller resolved from an unexpired session.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    /// Hashed session id, as stored.
    pub sid: String,
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Unauthorized".to_string())
}

fn bearer_or_cookie(parts: &Parts) -> Result<Option<String>, AppError> {
    if let Some(auth_header) = parts.headers.get("authorization") {
        let auth_str = auth_header.to_str().map_err(|_| unauthorized())?;
        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(Some(token.trim().to_string()));
        }
    }

    let jar = CookieJar::from_headers(&parts.headers);
    Ok(jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty()))
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let secret = bearer_or_cookie(parts)?.ok_or_else(unauthorized)?;
        let sid = hash_secret(&secret);

        let session = db::sessions::find_active(&state.pool, &sid)
            .await?
            .ok_or_else(unauthorized)?;

        Ok(AuthUser {
            user_id: session.sess.0.user_id,
            sid,
        })
    }
}

/// A manager or HR admin. Anyone else is rejected with 403.
#[derive(Debug, Clone)]
pub struct TeamViewer {
    pub user: User,
}

impl TeamViewer {
    pub fn scope(&self) -> TeamScope<'_> {
        match self.user.role {
            Role::HrAdmin => TeamScope::Organisation {
                viewer_id: &self.user.id,
            },
            Role::Manager | Role::Employee => TeamScope::DirectReports {
                manager_id: &self.user.id,
            },
        }
    }
}

impl FromRequestParts<SharedState> for TeamViewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let user = db::users::find_by_id(&state.pool, &auth.user_id)
            .await?
            .ok_or_else(AppError::access_denied)?;

        if !user.role.can_view_team() {
            return Err(AppError::access_denied());
        }
        Ok(TeamViewer { user })
    }
}

/// HR admin only.
#[derive(Debug, Clone)]
pub struct HrAdmin {
    pub user: User,
}

impl FromRequestParts<SharedState> for HrAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let user = db::users::find_by_id(&state.pool, &auth.user_id)
            .await?
            .ok_or_else(AppError::access_denied)?;

        if !user.role.is_hr_admin() {
            return Err(AppError::access_denied());
        }
        Ok(HrAdmin { user })
    }
}
