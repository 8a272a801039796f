use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx
        .service
        .get_session(id)
        .await?
        .with_context(|| format!("no session '{id}'"))?;
    let messages = ctx.service.message_count(id).await?;

    ctx.service.delete_session(id).await?;

    output(
        &json!({
            "deleted": session,
            "messages_removed": messages,
        }),
        flags.format,
        || {
            format!(
                "Sesión \"{}\" eliminada ({messages} mensajes)",
                session.name
            )
        },
    )
}
