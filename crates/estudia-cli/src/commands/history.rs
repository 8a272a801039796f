use anyhow::Context;
use estudia_core::entities::Message;
use estudia_core::enums::{MessageRole, StudyMode};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::user::require_current_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = match &args.session {
        Some(id) => ctx
            .service
            .get_session(id)
            .await?
            .with_context(|| format!("no session '{id}'"))?,
        None => {
            let user = require_current_user(ctx).await?;
            let mode = args
                .mode
                .as_deref()
                .map(|value| parse_enum::<StudyMode>(value, "mode"))
                .transpose()?;
            ctx.service.latest_session(&user.id, mode).await?
        }
    };

    let messages = ctx.service.list_messages(&session.id).await?;
    let limit = args.limit.unwrap_or(ctx.config.general.history_limit) as usize;
    let skipped = messages.len().saturating_sub(limit);
    let recent = &messages[skipped..];

    output(
        &json!({
            "session": session,
            "messages": recent,
        }),
        flags.format,
        || {
            let mut lines = vec![format!("{} \"{}\"", session.id, session.name)];
            if skipped > 0 {
                lines.push(format!("... ({skipped} mensajes anteriores omitidos)"));
            }
            lines.extend(recent.iter().map(message_line));
            lines.join("\n")
        },
    )
}

fn message_line(message: &Message) -> String {
    let speaker = match message.role {
        MessageRole::User => "Tú",
        MessageRole::Assistant => "Tutor",
    };
    format!(
        "[{}] {speaker}: {}",
        message.timestamp.format("%d/%m %H:%M"),
        message.content
    )
}
