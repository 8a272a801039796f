use estudia_core::enums::StudyMode;

use crate::cli::GlobalFlags;
use crate::commands::session::session_line;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::user::require_current_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(mode: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_current_user(ctx).await?;
    let mode = mode
        .map(|value| parse_enum::<StudyMode>(value, "mode"))
        .transpose()?;

    let sessions = ctx.service.list_sessions(&user.id, mode).await?;

    output(&sessions, flags.format, || {
        if sessions.is_empty() {
            "(sin sesiones)".to_string()
        } else {
            sessions
                .iter()
                .map(session_line)
                .collect::<Vec<_>>()
                .join("\n")
        }
    })
}
