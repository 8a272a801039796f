use anyhow::Context;
use estudia_core::enums::EngagementTrend;
use estudia_core::report::{SessionStats, StudyReport};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::user::require_current_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(id) = &args.session {
        let stats = ctx
            .service
            .session_stats(id)
            .await?
            .with_context(|| format!("no session '{id}'"))?;
        return output(&stats, flags.format, || session_text(&stats));
    }

    let user = require_current_user(ctx).await?;
    let report = ctx.service.study_report(&user.id).await?;
    output(&report, flags.format, || report_text(&report))
}

const INSUFFICIENT: &str = "  Datos insuficientes";

fn session_text(stats: &SessionStats) -> String {
    format!(
        "Sesión {}\n  Mensajes totales: {}\n  Tuyos: {}\n  Del tutor: {}\n  Duración: {:.1} min",
        stats.session_id,
        stats.total_messages,
        stats.user_messages,
        stats.assistant_messages,
        stats.duration_minutes
    )
}

fn trend_label(trend: EngagementTrend) -> &'static str {
    match trend {
        EngagementTrend::Improving => "Mejorando",
        EngagementTrend::Declining => "En descenso",
        EngagementTrend::Stable => "Estable",
    }
}

fn report_text(report: &StudyReport) -> String {
    let mut lines = vec!["Resumen".to_string()];
    lines.push(format!(
        "  Sesiones totales: {}",
        report.overview.total_sessions
    ));
    lines.push(format!(
        "  Mensajes totales: {}",
        report.overview.total_messages
    ));
    lines.push(format!(
        "  Horas de estudio: {:.1}",
        report.overview.study_hours
    ));
    lines.push(format!("  Racha (días): {}", report.overview.streak_days));

    lines.push(String::new());
    lines.push("Por modo".to_string());
    if report.per_mode.is_empty() {
        lines.push("  (sin sesiones)".to_string());
    } else {
        for detail in &report.per_mode {
            lines.push(format!(
                "  {}: {} sesiones, {} mensajes ({} tuyos, {} del tutor), {:.1} h",
                detail.mode.label(),
                detail.sessions,
                detail.messages,
                detail.user_messages,
                detail.assistant_messages,
                detail.study_hours
            ));
        }
    }

    lines.push(String::new());
    lines.push("Patrones".to_string());
    match (report.patterns.best_hour, &report.patterns.best_day) {
        (Some(hour), Some(day)) if report.patterns.has_data => {
            lines.push(format!("  Mejor hora: {hour:02}:00"));
            lines.push(format!("  Mejor día: {day}"));
        }
        _ => lines.push(INSUFFICIENT.to_string()),
    }

    lines.push(String::new());
    lines.push("Tendencia".to_string());
    match report.trends.classification {
        Some(trend) if report.trends.has_data => lines.push(format!("  {}", trend_label(trend))),
        _ => lines.push(INSUFFICIENT.to_string()),
    }

    lines.push(String::new());
    lines.push("Frecuencia (evaluaciones)".to_string());
    match report.frequency.sessions_per_week {
        Some(rate) if report.frequency.has_data => {
            lines.push(format!("  {rate:.1} sesiones/semana"));
        }
        _ => lines.push(INSUFFICIENT.to_string()),
    }

    lines.push(String::new());
    lines.push("Temas frecuentes".to_string());
    if report.topics.is_empty() {
        lines.push("  (sin menciones)".to_string());
    } else {
        for topic in &report.topics {
            lines.push(format!("  {} ({})", topic.topic, topic.mentions));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use estudia_core::report::{
        FrequencyReport, Overview, StudyPatterns, StudyReport, TrendReport,
    };
    use pretty_assertions::assert_eq;

    use super::report_text;

    #[test]
    fn empty_history_renders_every_derivation_as_insufficient() {
        let report = StudyReport {
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

        let text = report_text(&report);
        assert_eq!(text.matches("Datos insuficientes").count(), 3);
        assert!(text.contains("Sesiones totales: 0"));
    }
}
