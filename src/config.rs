use std::path::PathBuf;
use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::GymFlowError;

/// Process-wide configuration, read once from defaults and `GYMFLOW_*` env vars.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(cfg) => cfg,
    Err(e) => panic!("invalid configuration: {e}"),
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Directory of `<collection>.json` seed files imported at startup.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://gymflow.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            catalog_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, GymFlowError> {
        Self::figment().extract().map_err(GymFlowError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("GYMFLOW_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults extract");
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
        assert_eq!(cfg.loglevel, "info");
        assert!(cfg.catalog_dir.is_none());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GYMFLOW_DATABASE_URL", "sqlite::memory:");
            jail.set_env("GYMFLOW_CATALOG_DIR", "/srv/catalog");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.catalog_dir, Some(PathBuf::from("/srv/catalog")));
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }
}
