//! Analytics report types.
//!
//! A [`StudyReport`] is a plain value: every derivation ships precomputed so
//! any presentation layer can render it without recomputation. Derivations
//! whose sample threshold was not met carry `has_data: false` and `None`
//! fields; insufficient data is a successful result, never an error and
//! never a fabricated number.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EngagementTrend, StudyMode};

/// Full descriptive report for one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudyReport {
    pub overview: Overview,
    pub per_mode: Vec<ModeDetail>,
    pub patterns: StudyPatterns,
    pub trends: TrendReport,
    pub frequency: FrequencyReport,
    pub topics: Vec<TopicCount>,
}

/// Headline counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Overview {
    pub total_sessions: i64,
    pub total_messages: i64,
    /// Estimated hours invested, summed over sessions.
    pub study_hours: f64,
    /// Consecutive calendar days (ending today, one-day grace) with ≥1
    /// session created.
    pub streak_days: u32,
    pub sessions_by_mode: Vec<ModeCount>,
}

/// Session count for one mode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModeCount {
    pub mode: StudyMode,
    pub sessions: i64,
}

/// Per-mode activity breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModeDetail {
    pub mode: StudyMode,
    pub sessions: i64,
    pub messages: i64,
    pub user_messages: i64,
    pub assistant_messages: i64,
    pub study_hours: f64,
}

/// When the user tends to study. Requires ≥3 sessions; below that,
/// `has_data` is false and no best hour/day is reported.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPatterns {
    pub has_data: bool,
    /// Hour of day (0–23) with the most session starts.
    pub best_hour: Option<u8>,
    /// Spanish weekday name with the most session starts.
    pub best_day: Option<String>,
    /// Session starts per hour of day.
    pub hour_histogram: Vec<u32>,
    /// Session starts per weekday, Monday = index 0.
    pub day_histogram: Vec<u32>,
}

impl StudyPatterns {
    /// The no-data representation: empty histograms, no best hour/day.
    #[must_use]
    pub fn insufficient() -> Self {
        Self {
            has_data: false,
            best_hour: None,
            best_day: None,
            hour_histogram: vec![0; 24],
            day_histogram: vec![0; 7],
        }
    }
}

/// Engagement trend over the chronological session history.
/// Requires ≥4 sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendReport {
    pub has_data: bool,
    pub classification: Option<EngagementTrend>,
}

impl TrendReport {
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            has_data: false,
            classification: None,
        }
    }
}

/// Assessment-session frequency. Requires ≥2 qualifying sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FrequencyReport {
    pub has_data: bool,
    pub sessions_per_week: Option<f64>,
}

impl FrequencyReport {
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            has_data: false,
            sessions_per_week: None,
        }
    }
}

/// Mentions of one vocabulary topic across assistant messages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub mentions: u32,
}

/// Message counts and duration for a single session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SessionStats {
    pub session_id: String,
    pub total_messages: i64,
    pub user_messages: i64,
    pub assistant_messages: i64,
    /// Wall-clock span between first and last message, in minutes.
    /// 0.0 for empty or single-message sessions.
    pub duration_minutes: f64,
}
