use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;
use crate::validation::{Rules, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recommendation_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Break,
    Mindfulness,
    Workload,
    Meeting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recommendation_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub is_read: bool,
    pub is_actioned: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_actioned: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Validate for NewRecommendation {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .text("title", &self.title, 200)
            .check(
                self.description.as_ref().is_none_or(|d| d.chars().count() <= 2000),
                "description",
                "must be at most 2000 characters",
            )
            .check(
                self.expires_at.is_none_or(|at| at > Utc::now()),
                "expiresAt",
                "must be in the future",
            )
            .finish()
    }
}
