use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered user. Owns zero or more sessions.
///
/// `password_hash` and `salt` are opaque credential material (see
/// [`crate::auth`]); they are stored and compared, never interpreted.
/// Users are soft-deactivated via `is_active`, not deleted, in normal flow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub experience_years: Option<i64>,
    /// Target exam date in `DD/MM/YYYY`, free-form user input.
    pub target_exam_date: Option<String>,
    pub study_hours_daily: Option<i64>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub experience_years: Option<i64>,
    pub target_exam_date: Option<String>,
    pub study_hours_daily: Option<i64>,
}
