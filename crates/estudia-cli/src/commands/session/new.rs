use estudia_core::enums::StudyMode;

use crate::cli::GlobalFlags;
use crate::commands::session::session_line;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::user::require_current_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    mode: Option<&str>,
    name: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = require_current_user(ctx).await?;
    let mode = match mode {
        Some(value) => parse_enum::<StudyMode>(value, "mode")?,
        None => ctx.config.general.study_mode()?,
    };

    let session = ctx.service.create_session(&user.id, name, mode).await?;

    output(&session, flags.format, || {
        format!("Sesión creada\n{}", session_line(&session))
    })
}
