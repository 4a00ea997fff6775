//! Layered application configuration.
//!
//! Precedence, lowest first:
//! 1. built-in defaults
//! 2. YAML file (`--config`)
//! 3. environment variables `NESTEGG__<SECTION>__<KEY>`
//! 4. `PORT` environment variable
//! 5. CLI overrides

use std::path::Path;

use anyhow::Context;
use contribution_settings::SettingsConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use nestegg_api::{CorsConfig, build_cors_layer};
use retirement_projection::ProjectionConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "NESTEGG__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub contribution_settings: SettingsConfig,
    pub retirement_projection: ProjectionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    /// # Errors
    /// Returns an error if any layer is malformed or has unknown keys.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    /// Checks the values that deserialization alone cannot.
    ///
    /// # Errors
    /// Returns the first invalid section.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.retirement_projection
            .validate()
            .context("invalid retirement_projection section")?;
        build_cors_layer(&self.cors).context("invalid cors section")?;
        Ok(())
    }

    /// # Errors
    /// Returns an error if the config cannot be rendered as YAML.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
