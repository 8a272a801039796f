mod delete;
mod list;
mod new;
mod rename;

use estudia_core::entities::Session;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;

/// Handle `est session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::New { mode, name } => {
            new::run(mode.as_deref(), name.as_deref(), ctx, flags).await
        }
        SessionCommands::List { mode } => list::run(mode.as_deref(), ctx, flags).await,
        SessionCommands::Rename { id, name } => rename::run(id, name, ctx, flags).await,
        SessionCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}

/// One-line text rendering shared by the session commands.
fn session_line(session: &Session) -> String {
    format!(
        "{}  [{}]  \"{}\"  último uso: {}",
        session.id,
        session.mode.label(),
        session.name,
        session.last_used_at.format("%d/%m/%Y %H:%M")
    )
}
