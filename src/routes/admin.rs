use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::HrAdmin;
use crate::db;
use crate::error::{AppError, FieldError};
use crate::models::{Role, User};
use crate::state::SharedState;
use crate::validation::{Rules, ValidJson, ValidPath, ValidQuery, Validate};

#[derive(Deserialize)]
pub struct ListUsersParams {
    pub role: Option<String>,
}

impl ListUsersParams {
    pub fn role(&self) -> Result<Option<Role>, AppError> {
        match self.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(raw) => raw
                .parse::<Role>()
                .map(Some)
                .map_err(|msg: String| AppError::Validation(vec![FieldError::new("role", msg)])),
            None => Ok(None),
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateRole {
    pub role: Role,
}

impl Validate for UpdateRole {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManager {
    pub manager_id: Option<String>,
}

impl Validate for UpdateManager {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .check(
                self.manager_id.as_ref().is_none_or(|m| !m.trim().is_empty()),
                "managerId",
                "must not be blank",
            )
            .finish()
    }
}

pub async fn list_users(
    _admin: HrAdmin,
    State(state): State<SharedState>,
    ValidQuery(params): ValidQuery<ListUsersParams>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = match params.role()? {
        Some(role) => db::users::list_by_role(&state.pool, role).await?,
        None => db::users::list_all(&state.pool).await?,
    };
    Ok(Json(users))
}

pub async fn update_role(
    admin: HrAdmin,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<String>,
    ValidJson(req): ValidJson<UpdateRole>,
) -> Result<Json<User>, AppError> {
    let user = db::users::update_role(&state.pool, &id, req.role)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("User not found".to_string()),
            _ => AppError::Database(e),
        })?;

    tracing::info!(
        admin_id = %admin.user.id,
        user_id = %user.id,
        role = user.role.as_str(),
        "User role changed"
    );

    Ok(Json(user))
}

pub async fn update_manager(
    admin: HrAdmin,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<String>,
    ValidJson(req): ValidJson<UpdateManager>,
) -> Result<Json<User>, AppError> {
    let manager_id = req.manager_id.as_deref().map(str::trim);
    if manager_id == Some(id.as_str()) {
        return Err(AppError::Validation(vec![FieldError::new(
            "managerId",
            "a user cannot manage themself",
        )]));
    }

    let user = db::users::update_manager(&state.pool, &id, manager_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("User not found".to_string()),
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::Validation(vec![FieldError::new("managerId", "unknown user")])
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(
        admin_id = %admin.user.id,
        user_id = %user.id,
        manager_id = user.manager_id.as_deref().unwrap_or("-"),
        "User manager changed"
    );

    Ok(Json(user))
}
