use estudia_chat::{Conversation, OpenAiProvider, SendOutcome};
use estudia_core::enums::StudyMode;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::user::require_current_user;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_current_user(ctx).await?;
    ctx.config.provider.require_configured()?;

    let mode = match &args.mode {
        Some(value) => parse_enum::<StudyMode>(value, "mode")?,
        None => ctx.config.general.study_mode()?,
    };

    let provider = OpenAiProvider::with_base_url(
        ctx.config.provider.api_key.clone(),
        ctx.config.provider.base_url.clone(),
    )
    .with_model(ctx.config.provider.model.clone())
    .with_temperature(ctx.config.provider.temperature);

    let mut conversation = Conversation::bind(&ctx.service, &provider, &user.id, mode)
        .await?
        .with_timeout(ctx.config.provider.timeout());

    if args.new || args.name.is_some() {
        conversation.start_new(args.name.as_deref()).await?;
    }

    let outcome = conversation.send(&args.message).await?;

    match &outcome {
        SendOutcome::Reply(reply) => output(
            &json!({
                "session": conversation.session(),
                "reply": reply,
            }),
            flags.format,
            || reply.clone(),
        ),
        SendOutcome::Unavailable { notice } => output(
            &json!({
                "session": conversation.session(),
                "unavailable": notice,
            }),
            flags.format,
            || notice.clone(),
        ),
    }
}
