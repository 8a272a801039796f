use estudia_core::auth::{password_strength, validate_registration};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegisterArgs;
use crate::commands::shared::user::user_view;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &RegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let confirm = args.confirm.as_deref().unwrap_or(&args.password);
    validate_registration(&args.username, &args.email, &args.password, confirm)?;

    let user = ctx
        .service
        .create_user(&args.username, &args.email, &args.password)
        .await?;
    let strength = password_strength(&args.password);

    output(
        &json!({
            "user": user_view(&user),
            "password_strength": strength,
        }),
        flags.format,
        || {
            format!(
                "Usuario '{}' registrado exitosamente\nContraseña: {}\nInicia sesión con 'est login'",
                user.username,
                strength.label()
            )
        },
    )
}
