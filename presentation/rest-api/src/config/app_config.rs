use super::{cors_config, server_config::ServerConfig, token_config::TokenConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub token: TokenConfig,
}

impl AppConfig {
    /// Reads every section from the environment.
    ///
    /// # Errors
    /// Returns error if a required variable (see [`TokenConfig::from_env`]) is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            token: TokenConfig::from_env()?,
        })
    }
}
