use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StudyMode;

/// Default display name for a session the user has not renamed.
pub const DEFAULT_SESSION_NAME: &str = "Nueva Conversación";

/// A single conversation thread, owned by one user.
///
/// `mode` is immutable after creation: switching mode in the controller
/// always creates a new session. `last_used_at` is monotonically
/// non-decreasing and bumped in the same transaction as every message append.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub mode: StudyMode,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}
