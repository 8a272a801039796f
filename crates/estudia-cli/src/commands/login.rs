use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::commands::shared::user::user_view;
use crate::context::AppContext;
use crate::output::output;
use crate::state;

pub async fn run(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(user) = ctx
        .service
        .authenticate_user(&args.username, &args.password)
        .await?
    else {
        anyhow::bail!("Usuario o contraseña incorrectos");
    };

    state::save_current_user(&user.id)?;

    output(&json!({ "user": user_view(&user) }), flags.format, || {
        format!("Bienvenido, {}!", user.username)
    })
}
