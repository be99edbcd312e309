use std::fmt::Display;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::error::{AppError, FieldError};

pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// JSON body extractor that reports both deserialization failures and
/// [`Validate`] failures as `AppError::Validation`.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![FieldError::body(rejection.body_text())]))?;
        value.validate().map_err(AppError::Validation)?;
        Ok(ValidJson(value))
    }
}

/// Path extractor whose rejection is a JSON `AppError::Validation` naming the
/// offending parameter.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![path_error(rejection)]))?;
        Ok(ValidPath(value))
    }
}

fn path_error(rejection: PathRejection) -> FieldError {
    let key = match &rejection {
        PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
            ErrorKind::ParseErrorAtKey { key, .. }
            | ErrorKind::InvalidUtf8InPathParam { key }
            | ErrorKind::DeserializeError { key, .. } => Some(key.clone()),
            _ => None,
        },
        _ => None,
    };
    match key {
        Some(key) => FieldError::new(&key, rejection.body_text()),
        None => FieldError::body(rejection.body_text()),
    }
}

/// Query string extractor that reports malformed input as
/// `AppError::Validation` instead of a plain-text rejection.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![FieldError::body(rejection.body_text())]))?;
        Ok(ValidQuery(value))
    }
}

/// Accumulates field errors so a single response can name every bad field.
#[derive(Debug, Default)]
pub struct Rules {
    errors: Vec<FieldError>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range<T>(&mut self, path: &str, value: Option<T>, min: T, max: T) -> &mut Self
    where
        T: PartialOrd + Display + Copy,
    {
        if let Some(v) = value {
            if v < min || v > max {
                self.errors
                    .push(FieldError::new(path, format!("must be between {min} and {max}")));
            }
        }
        self
    }

    pub fn min<T>(&mut self, path: &str, value: Option<T>, min: T) -> &mut Self
    where
        T: PartialOrd + Display + Copy,
    {
        if let Some(v) = value {
            if v < min {
                self.errors
                    .push(FieldError::new(path, format!("must be at least {min}")));
            }
        }
        self
    }

    pub fn text(&mut self, path: &str, value: &str, max_chars: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(path, "must not be empty"));
        } else if value.chars().count() > max_chars {
            self.errors
                .push(FieldError::new(path, format!("must be at most {max_chars} characters")));
        }
        self
    }

    pub fn check(&mut self, ok: bool, path: &str, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError::new(path, message));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Parses a `startDate`/`endDate` query value: RFC 3339, or `YYYY-MM-DD`
/// meaning midnight UTC of that day.
///
/// An unescaped `+` in the offset arrives form-decoded as a space, so a space
/// in the offset position is read back as `+`.
pub fn parse_date_bound(raw: Option<&str>, bound: Bound) -> Result<Option<DateTime<Utc>>, FieldError> {
    let path = match bound {
        Bound::Start => "startDate",
        Bound::End => "endDate",
    };
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let restored;
    let raw = match raw.len().checked_sub(6) {
        Some(i) if raw.contains('T') && raw.as_bytes()[i] == b' ' => {
            restored = format!("{}+{}", &raw[..i], &raw[i + 1..]);
            restored.as_str()
        }
        _ => raw,
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| FieldError::new(path, "must be an RFC 3339 timestamp or YYYY-MM-DD date"))
}
