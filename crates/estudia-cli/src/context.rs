//! Application context shared by all command handlers.

use estudia_config::EstudiaConfig;
use estudia_db::service::EstudiaService;
use tracing::debug;

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub config: EstudiaConfig,
    pub service: EstudiaService,
}

impl AppContext {
    /// Load configuration (dotenv + TOML + env) and open the database.
    ///
    /// `--db` wins over the configured `database.path`.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = EstudiaConfig::load_with_dotenv()?;
        let db_path = flags
            .db
            .as_deref()
            .unwrap_or(config.database.path.as_str())
            .to_string();
        debug!("opening database at {db_path}");
        let service = EstudiaService::new_local(&db_path).await?;
        Ok(Self { config, service })
    }
}
