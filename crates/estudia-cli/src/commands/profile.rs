use anyhow::anyhow;
use chrono::NaiveDate;
use estudia_core::entities::{User, UserProfile};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::commands::shared::user::{require_current_user, user_view};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_current_user(ctx).await?;

    let profile = UserProfile {
        full_name: args.full_name.clone(),
        phone: args.phone.clone(),
        company: args.company.clone(),
        position: args.position.clone(),
        experience_years: args.experience_years,
        target_exam_date: args.target_exam_date.clone(),
        study_hours_daily: args.study_hours_daily,
    };

    if profile == UserProfile::default() {
        return output(&json!({ "user": user_view(&user) }), flags.format, || {
            profile_text(&user)
        });
    }

    if let Some(date) = &args.target_exam_date {
        NaiveDate::parse_from_str(date, "%d/%m/%Y")
            .map_err(|_| anyhow!("invalid --target-exam-date '{date}': expected DD/MM/YYYY"))?;
    }

    let updated = ctx.service.update_user_profile(&user.id, &profile).await?;

    output(&json!({ "user": user_view(&updated) }), flags.format, || {
        format!("Perfil actualizado\n{}", profile_text(&updated))
    })
}

fn profile_text(user: &User) -> String {
    let line = |label: &str, value: Option<&str>| {
        format!("  {label}: {}", value.unwrap_or("-"))
    };
    let years = user.experience_years.map(|v| v.to_string());
    let hours = user.study_hours_daily.map(|v| v.to_string());

    [
        format!("Perfil de {} <{}>", user.username, user.email),
        line("Nombre completo", user.full_name.as_deref()),
        line("Teléfono", user.phone.as_deref()),
        line("Empresa", user.company.as_deref()),
        line("Cargo", user.position.as_deref()),
        line("Años de experiencia", years.as_deref()),
        line("Fecha objetivo del examen", user.target_exam_date.as_deref()),
        line("Horas de estudio diarias", hours.as_deref()),
    ]
    .join("\n")
}
