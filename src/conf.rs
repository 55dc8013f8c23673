use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Runtime settings, read from `JOBBOARD_*` environment variables.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub addr: String,
    pub max_workers: usize,
    /// JSON dataset to serve instead of the bundled one.
    pub data_path: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("JOBBOARD"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("addr", "127.0.0.1:3000")?
            .set_default("max_workers", 8)?
            .add_source(env.try_parsing(true))
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        s.socket_addr()?;
        if s.max_workers == 0 {
            return Err(ConfigError::Message(
                "JOBBOARD_MAX_WORKERS must be at least 1".into(),
            ));
        }
        Ok(s)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr
            .parse()
            .map_err(|e| ConfigError::Message(format!("JOBBOARD_ADDR '{}': {e}", self.addr)))
    }
}
