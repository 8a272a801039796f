//! Study modes, message roles, and derived classifications for Estudia.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The mode and role sets are closed: storage, controller dispatch, and
//! analytics all `match` exhaustively, so adding a variant forces every
//! consumer to be updated at compile time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StudyMode
// ---------------------------------------------------------------------------

/// What kind of conversation a session is. Immutable once the session exists;
/// "switching mode" always creates a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    FreeChat,
    GuidedStudy,
    Assessment,
    TimedSimulation,
    AnalyticsDashboard,
}

impl StudyMode {
    /// All modes, in menu order.
    pub const ALL: &'static [Self] = &[
        Self::FreeChat,
        Self::GuidedStudy,
        Self::Assessment,
        Self::TimedSimulation,
        Self::AnalyticsDashboard,
    ];

    /// String representation used in SQL storage and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeChat => "free_chat",
            Self::GuidedStudy => "guided_study",
            Self::Assessment => "assessment",
            Self::TimedSimulation => "timed_simulation",
            Self::AnalyticsDashboard => "analytics_dashboard",
        }
    }

    /// Spanish product label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeChat => "Charlemos",
            Self::GuidedStudy => "Estudiemos",
            Self::Assessment => "Evaluemos",
            Self::TimedSimulation => "Simulemos",
            Self::AnalyticsDashboard => "Analicemos",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageRole
// ---------------------------------------------------------------------------

/// Who authored a stored message. Closed two-value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EngagementTrend
// ---------------------------------------------------------------------------

/// Classification of how a user's per-session engagement is moving.
///
/// Derived by comparing mean user-turn counts of the first half vs the
/// second half of the chronological session history, with a ±10% band
/// counting as `stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTrend {
    Improving,
    Declining,
    Stable,
}

impl EngagementTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for EngagementTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PasswordStrength
// ---------------------------------------------------------------------------

/// Coarse password quality level reported at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
        }
    }

    /// Spanish product label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Débil",
            Self::Medium => "Media",
            Self::Strong => "Fuerte",
            Self::VeryStrong => "Muy fuerte",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(mode_free_chat, StudyMode, StudyMode::FreeChat, "free_chat");
    test_serde_roundtrip!(
        mode_guided_study,
        StudyMode,
        StudyMode::GuidedStudy,
        "guided_study"
    );
    test_serde_roundtrip!(
        mode_assessment,
        StudyMode,
        StudyMode::Assessment,
        "assessment"
    );
    test_serde_roundtrip!(
        mode_timed_simulation,
        StudyMode,
        StudyMode::TimedSimulation,
        "timed_simulation"
    );
    test_serde_roundtrip!(
        mode_analytics_dashboard,
        StudyMode,
        StudyMode::AnalyticsDashboard,
        "analytics_dashboard"
    );

    test_serde_roundtrip!(role_user, MessageRole, MessageRole::User, "user");
    test_serde_roundtrip!(
        role_assistant,
        MessageRole,
        MessageRole::Assistant,
        "assistant"
    );

    test_serde_roundtrip!(
        trend_improving,
        EngagementTrend,
        EngagementTrend::Improving,
        "improving"
    );
    test_serde_roundtrip!(
        trend_stable,
        EngagementTrend,
        EngagementTrend::Stable,
        "stable"
    );

    test_serde_roundtrip!(
        strength_very_strong,
        PasswordStrength,
        PasswordStrength::VeryStrong,
        "very_strong"
    );

    // --- Display / as_str consistency ---

    #[test]
    fn display_matches_as_str() {
        for mode in StudyMode::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
        }
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Assistant.to_string(), "assistant");
        assert_eq!(EngagementTrend::Declining.to_string(), "declining");
        assert_eq!(PasswordStrength::Medium.to_string(), "medium");
    }

    #[test]
    fn mode_labels_are_spanish_menu_names() {
        assert_eq!(StudyMode::FreeChat.label(), "Charlemos");
        assert_eq!(StudyMode::GuidedStudy.label(), "Estudiemos");
        assert_eq!(StudyMode::Assessment.label(), "Evaluemos");
        assert_eq!(StudyMode::TimedSimulation.label(), "Simulemos");
        assert_eq!(StudyMode::AnalyticsDashboard.label(), "Analicemos");
    }

    #[test]
    fn all_modes_covers_every_variant() {
        assert_eq!(StudyMode::ALL.len(), 5);
        let unique: std::collections::HashSet<_> =
            StudyMode::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(unique.len(), 5);
    }
}
