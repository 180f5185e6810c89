//! Lightweight configuration loader.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars,
//! where `<env>` comes from `RUST_ENV` and `__` separates nested keys
//! (`APP_MODEL__KIND=trainable` sets `model.kind`).

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ModelConfig;

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Load from the current working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            other => tracing::warn!(env = other, "unrecognised RUST_ENV, skipping env-specific config"),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        tracing::debug!(dir = %dir.display(), env = %env_name, "configuration loaded");
        Ok(Self::from_figment(figment))
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    /// The `[model]` section, or defaults when the section is absent.
    ///
    /// A config file that fails to parse is an error, never a fallback.
    pub fn model(&self) -> Result<ModelConfig> {
        match self.figment.extract_inner::<ModelConfig>("model") {
            Err(e) if e.missing() => Ok(ModelConfig::default()),
            r => r.map_err(|e| Error::InvalidConfig(format!("Failed to get 'model': {}", e))),
        }
    }
}
