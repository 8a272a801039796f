use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Register(args) => commands::register::run(&args, ctx, flags).await,
        Commands::Login(args) => commands::login::run(&args, ctx, flags).await,
        Commands::Profile(args) => commands::profile::run(&args, ctx, flags).await,
        Commands::Session { action } => commands::session::handle(&action, ctx, flags).await,
        Commands::Chat(args) => commands::chat::run(&args, ctx, flags).await,
        Commands::History(args) => commands::history::run(&args, ctx, flags).await,
        Commands::Report(args) => commands::report::run(&args, ctx, flags).await,
    }
}
