use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::session::session_line;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.service.rename_session(id, name).await?;
    // Renaming a missing id is a silent no-op at the store; surface it here.
    let session = ctx
        .service
        .get_session(id)
        .await?
        .with_context(|| format!("no session '{id}'"))?;

    output(&session, flags.format, || {
        format!("Sesión renombrada\n{}", session_line(&session))
    })
}
