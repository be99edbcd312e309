use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    HrAdmin,
}

impl Role {
    /// Whether this role may read team-scoped analytics.
    pub fn can_view_team(self) -> bool {
        match self {
            Role::Manager | Role::HrAdmin => true,
            Role::Employee => false,
        }
    }

    pub fn is_hr_admin(self) -> bool {
        matches!(self, Role::HrAdmin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::HrAdmin => "hr_admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "manager" => Ok(Role::Manager),
            "hr_admin" => Ok(Role::HrAdmin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: Role,
    pub department: Option<String>,
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn display_name(
    id: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> String {
    let full = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !full.is_empty() {
        return full;
    }
    match email.map(str::trim).filter(|s| !s.is_empty()) {
        Some(email) => email.to_string(),
        None => id.to_string(),
    }
}

/// Identity fields refreshed on every sign-in.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_managers_and_hr_admins_view_team() {
        assert!(!Role::Employee.can_view_team());
        assert!(Role::Manager.can_view_team());
        assert!(Role::HrAdmin.can_view_team());
    }

    #[test]
    fn role_round_trips_through_its_label() {
        for role in [Role::Employee, Role::Manager, Role::HrAdmin] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::HrAdmin).unwrap(), "\"hr_admin\"");
    }

    #[test]
    fn display_name_falls_back_to_email_then_id() {
        assert_eq!(display_name("u1", Some("Alex"), Some("Chen"), None), "Alex Chen");
        assert_eq!(display_name("u1", Some("  "), None, Some("a@x.io")), "a@x.io");
        assert_eq!(display_name("u1", None, None, None), "u1");
    }
}
