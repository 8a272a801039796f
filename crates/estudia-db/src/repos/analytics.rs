//! Analytics engine.
//!
//! Read-only derivations over the stored session/message stream: time
//! invested, streaks, frequency, trend classification, study patterns, and
//! per-mode/per-topic breakdowns. Every figure is measured from persisted
//! rows; a derivation below its sample threshold reports insufficient data
//! instead of synthesizing a number.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, Timelike, Utc};

use estudia_core::entities::{Message, Session};
use estudia_core::enums::{EngagementTrend, MessageRole, StudyMode};
use estudia_core::report::{
    FrequencyReport, ModeCount, ModeDetail, Overview, SessionStats, StudyPatterns, StudyReport,
    TopicCount, TrendReport,
};
use estudia_core::topics::PMP_TOPICS;

use crate::error::DatabaseError;
use crate::repos::message::row_to_message;
use crate::service::EstudiaService;

/// Assumed engagement per message, in minutes. A session's time estimate is
/// floored at `message count × unit`, so short transcripts (or a single
/// message, where the wall-clock span is zero) still count for something.
const UNIT_MINUTES_PER_MESSAGE: f64 = 2.0;

/// Below this many sessions, study patterns report "no pattern yet".
const PATTERN_MIN_SESSIONS: usize = 3;

/// Minimum session count for a trend classification.
const TREND_MIN_SESSIONS: usize = 4;

/// Minimum assessment-session count for a frequency figure.
const FREQUENCY_MIN_SESSIONS: usize = 2;

/// Relative band around 1.0 inside which a turn-count ratio reads as stable.
const TREND_BAND: f64 = 0.1;

/// Weekday names for `best_day`, indexed Monday = 0.
const WEEKDAY_NAMES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

impl EstudiaService {
    /// Build the full descriptive report for one user.
    ///
    /// Reads the user's complete session and message history once; all
    /// derivations are computed in memory from that snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the underlying queries fail.
    pub async fn study_report(&self, user_id: &str) -> Result<StudyReport, DatabaseError> {
        let mut sessions = self.list_sessions(user_id, None).await?;
        sessions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let messages = self.messages_by_session(user_id).await?;
        Ok(build_report(&sessions, &messages, Utc::now().date_naive()))
    }

    /// Message counts and duration for a single session.
    ///
    /// Returns `None` if the session does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the queries fail.
    pub async fn session_stats(
        &self,
        session_id: &str,
    ) -> Result<Option<SessionStats>, DatabaseError> {
        if self.get_session(session_id).await?.is_none() {
            return Ok(None);
        }
        let messages = self.list_messages(session_id).await?;
        let user_messages = count_role(&messages, MessageRole::User);
        let total_messages = messages.len() as i64;

        let duration_minutes = match (messages.first(), messages.last()) {
            (Some(first), Some(last)) if messages.len() > 1 => {
                round1((last.timestamp - first.timestamp).num_seconds() as f64 / 60.0)
            }
            _ => 0.0,
        };

        Ok(Some(SessionStats {
            session_id: session_id.to_string(),
            total_messages,
            user_messages,
            assistant_messages: total_messages - user_messages,
            duration_minutes,
        }))
    }

    /// Fetch all of a user's messages in one query, grouped by session and
    /// ordered within each group by conversation order.
    async fn messages_by_session(
        &self,
        user_id: &str,
    ) -> Result<HashMap<String, Vec<Message>>, DatabaseError> {
        let mut grouped: HashMap<String, Vec<Message>> = HashMap::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT m.id, m.session_id, m.role, m.content, m.timestamp
                 FROM messages m
                 JOIN sessions s ON s.id = m.session_id
                 WHERE s.user_id = ?1
                 ORDER BY m.timestamp ASC, m.rowid ASC",
                [user_id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let message = row_to_message(&row)?;
            grouped
                .entry(message.session_id.clone())
                .or_default()
                .push(message);
        }
        Ok(grouped)
    }
}

/// Assemble the report from a chronological session list and the message
/// groups. `today` anchors the streak calculation.
fn build_report(
    sessions: &[Session],
    messages: &HashMap<String, Vec<Message>>,
    today: NaiveDate,
) -> StudyReport {
    if sessions.is_empty() {
        return StudyReport {
            overview: Overview {
                total_sessions: 0,
                total_messages: 0,
                study_hours: 0.0,
                streak_days: 0,
                sessions_by_mode: Vec::new(),
            },
            per_mode: Vec::new(),
            patterns: StudyPatterns::insufficient(),
            trends: TrendReport::insufficient(),
            frequency: FrequencyReport::insufficient(),
            topics: Vec::new(),
        };
    }

    let empty: Vec<Message> = Vec::new();
    let msgs_of = |session: &Session| messages.get(&session.id).unwrap_or(&empty);

    let total_messages: i64 = sessions.iter().map(|s| msgs_of(s).len() as i64).sum();
    let total_minutes: f64 = sessions.iter().map(|s| session_minutes(msgs_of(s))).sum();

    let session_dates: Vec<NaiveDate> =
        sessions.iter().map(|s| s.created_at.date_naive()).collect();

    let mut sessions_by_mode = Vec::new();
    let mut per_mode = Vec::new();
    for &mode in StudyMode::ALL {
        let of_mode: Vec<&Session> = sessions.iter().filter(|s| s.mode == mode).collect();
        if of_mode.is_empty() {
            continue;
        }
        let mode_messages: i64 = of_mode.iter().map(|s| msgs_of(s).len() as i64).sum();
        let mode_user: i64 = of_mode
            .iter()
            .map(|s| count_role(msgs_of(s), MessageRole::User))
            .sum();
        let mode_minutes: f64 = of_mode.iter().map(|s| session_minutes(msgs_of(s))).sum();

        sessions_by_mode.push(ModeCount {
            mode,
            sessions: of_mode.len() as i64,
        });
        per_mode.push(ModeDetail {
            mode,
            sessions: of_mode.len() as i64,
            messages: mode_messages,
            user_messages: mode_user,
            assistant_messages: mode_messages - mode_user,
            study_hours: round1(mode_minutes / 60.0),
        });
    }

    // Trend input: user turns per session, oldest first.
    let user_turns: Vec<i64> = sessions
        .iter()
        .map(|s| count_role(msgs_of(s), MessageRole::User))
        .collect();

    let assessment_dates: Vec<NaiveDate> = sessions
        .iter()
        .filter(|s| s.mode == StudyMode::Assessment)
        .map(|s| s.created_at.date_naive())
        .collect();

    let assistant_texts: Vec<&str> = sessions
        .iter()
        .flat_map(|s| msgs_of(s).iter())
        .filter(|m| m.role == MessageRole::Assistant)
        .map(|m| m.content.as_str())
        .collect();

    StudyReport {
        overview: Overview {
            total_sessions: sessions.len() as i64,
            total_messages,
            study_hours: round1(total_minutes / 60.0),
            streak_days: streak_days(&session_dates, today),
            sessions_by_mode,
        },
        per_mode,
        patterns: build_patterns(sessions),
        trends: match classify_trend(&user_turns) {
            Some(classification) => TrendReport {
                has_data: true,
                classification: Some(classification),
            },
            None => TrendReport::insufficient(),
        },
        frequency: build_frequency(&assessment_dates),
        topics: scan_topics(&assistant_texts),
    }
}

/// Estimated minutes spent in one session:
/// `max(last - first message time, message count × unit)`.
fn session_minutes(messages: &[Message]) -> f64 {
    let (Some(first), Some(last)) = (messages.first(), messages.last()) else {
        return 0.0;
    };
    let span = (last.timestamp - first.timestamp).num_seconds() as f64 / 60.0;
    span.max(messages.len() as f64 * UNIT_MINUTES_PER_MESSAGE)
}

/// Length of the run of consecutive calendar days with at least one session,
/// counting backward from today. A streak is still alive if the most recent
/// session day is yesterday (today's session simply hasn't happened yet).
fn streak_days(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = dates.iter().copied().collect();
    let mut anchor = if days.contains(&today) {
        today
    } else if days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&anchor) {
        streak += 1;
        anchor -= Duration::days(1);
    }
    streak
}

/// Compare mean user turns of the first half vs. the second half of the
/// chronological session history (odd middle session goes to the second
/// half). `None` below the sample threshold.
fn classify_trend(user_turns: &[i64]) -> Option<EngagementTrend> {
    if user_turns.len() < TREND_MIN_SESSIONS {
        return None;
    }
    let (first, second) = user_turns.split_at(user_turns.len() / 2);
    let mean = |half: &[i64]| half.iter().sum::<i64>() as f64 / half.len() as f64;
    let (early, late) = (mean(first), mean(second));

    if early.abs() < f64::EPSILON {
        return Some(if late.abs() < f64::EPSILON {
            EngagementTrend::Stable
        } else {
            EngagementTrend::Improving
        });
    }
    let ratio = late / early;
    Some(if ratio > 1.0 + TREND_BAND {
        EngagementTrend::Improving
    } else if ratio < 1.0 - TREND_BAND {
        EngagementTrend::Declining
    } else {
        EngagementTrend::Stable
    })
}

/// Session-start histograms by hour and weekday, with their argmax picks.
fn build_patterns(sessions: &[Session]) -> StudyPatterns {
    if sessions.len() < PATTERN_MIN_SESSIONS {
        return StudyPatterns::insufficient();
    }

    let mut hour_histogram = vec![0u32; 24];
    let mut day_histogram = vec![0u32; 7];
    for session in sessions {
        hour_histogram[session.created_at.hour() as usize] += 1;
        day_histogram[session.created_at.weekday().num_days_from_monday() as usize] += 1;
    }

    let best_day = WEEKDAY_NAMES[argmax(&day_histogram)].to_string();
    StudyPatterns {
        has_data: true,
        best_hour: Some(argmax(&hour_histogram) as u8),
        best_day: Some(best_day),
        hour_histogram,
        day_histogram,
    }
}

/// Assessment sessions per week over the first-to-last qualifying span.
fn build_frequency(dates: &[NaiveDate]) -> FrequencyReport {
    if dates.len() < FREQUENCY_MIN_SESSIONS {
        return FrequencyReport::insufficient();
    }
    // min/max rather than first/last, so input order doesn't matter.
    let first = dates.iter().min().copied().unwrap_or_default();
    let last = dates.iter().max().copied().unwrap_or_default();
    let span_days = (last - first).num_days().max(1);
    let per_week = dates.len() as f64 / span_days as f64 * 7.0;
    FrequencyReport {
        has_data: true,
        sessions_per_week: Some(round1(per_week)),
    }
}

/// Count assistant messages mentioning each vocabulary topic
/// (case-insensitive substring). Topics never mentioned are omitted.
fn scan_topics(assistant_texts: &[&str]) -> Vec<TopicCount> {
    let lowered: Vec<String> = assistant_texts.iter().map(|t| t.to_lowercase()).collect();

    let mut counts = Vec::new();
    for topic in PMP_TOPICS {
        let needle = topic.to_lowercase();
        let mentions = lowered.iter().filter(|text| text.contains(&needle)).count() as u32;
        if mentions > 0 {
            counts.push(TopicCount {
                topic: (*topic).to_string(),
                mentions,
            });
        }
    }
    counts.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.topic.cmp(&b.topic)));
    counts
}

/// Index of the first maximum in a histogram (earliest hour/day wins ties).
fn argmax(histogram: &[u32]) -> usize {
    let mut best = 0;
    for (idx, &count) in histogram.iter().enumerate() {
        if count > histogram[best] {
            best = idx;
        }
    }
    best
}

fn count_role(messages: &[Message], role: MessageRole) -> i64 {
    messages.iter().filter(|m| m.role == role).count() as i64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
