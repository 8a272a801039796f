use clap::{Args, Subcommand};

use crate::cli::subcommands::SessionCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Register a new account.
    Register(RegisterArgs),
    /// Sign in; later commands act as this user.
    Login(LoginArgs),
    /// Show or update the signed-in user's profile.
    Profile(ProfileArgs),
    /// Session management.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Send a message to the tutor and print the reply.
    Chat(ChatArgs),
    /// Print a session transcript.
    History(HistoryArgs),
    /// Derived study analytics.
    Report(ReportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    /// Username (3-50 chars: letters, digits, underscores).
    #[arg(long)]
    pub username: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Password (min 6 chars, at least one letter and one digit).
    #[arg(long)]
    pub password: String,

    /// Password confirmation; defaults to the password itself.
    #[arg(long)]
    pub confirm: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

/// With no flags, prints the current profile. Any flag set updates that field.
#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub experience_years: Option<i64>,

    /// Target exam date, DD/MM/YYYY.
    #[arg(long)]
    pub target_exam_date: Option<String>,

    #[arg(long)]
    pub study_hours_daily: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// The message to send.
    pub message: String,

    /// Study mode (free_chat, guided_study, assessment, timed_simulation,
    /// analytics_dashboard). Defaults to general.default_mode.
    #[arg(long)]
    pub mode: Option<String>,

    /// Start a fresh session instead of continuing the latest one.
    #[arg(long)]
    pub new: bool,

    /// Name for the fresh session (implies --new).
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Session id; defaults to the latest session.
    #[arg(long)]
    pub session: Option<String>,

    /// Restrict the default lookup to one mode.
    #[arg(long)]
    pub mode: Option<String>,

    /// Maximum number of messages (most recent kept).
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Per-session stats instead of the full report.
    #[arg(long)]
    pub session: Option<String>,
}
