use clap::Subcommand;

/// Session lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Create a new session.
    New {
        /// Study mode; defaults to general.default_mode.
        #[arg(long)]
        mode: Option<String>,
        /// Session name; defaults to "Nueva Conversación".
        #[arg(long)]
        name: Option<String>,
    },
    /// List sessions, most recently used first.
    List {
        /// Optional mode filter.
        #[arg(long)]
        mode: Option<String>,
    },
    /// Rename a session.
    Rename {
        /// Session id.
        id: String,
        /// New name.
        name: String,
    },
    /// Delete a session and its messages.
    Delete {
        /// Session id.
        id: String,
    },
}
