use core_config::{env_or_default, server::ServerConfig, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Public front-end origin; when unset CORS falls back to
    /// allowing any origin
    pub frontend_url: Option<String>,
    /// Directory uploaded images are written to and served from
    pub uploads_dir: String,
    /// Directory holding the built front-end, if deployed alongside
    pub frontend_dir: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let frontend_url = std::env::var("FRONTEND_URL").ok().filter(|v| !v.is_empty());
        let uploads_dir = env_or_default("UPLOADS_DIR", "uploads");
        let frontend_dir = env_or_default("FRONTEND_DIR", "../frontend");

        Ok(Self {
            mongodb,
            server,
            environment,
            frontend_url,
            uploads_dir,
            frontend_dir,
        })
    }
}
