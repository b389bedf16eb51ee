use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use report::{DEFAULT_IMAGE_PATH, ReportRenderer};
use serde::Deserialize;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Name of the optional configuration file, looked up without extension
pub const CONFIG_FILE: &str = "wattcast";
/// Prefix of environment variables overriding the configuration file
pub const ENV_PREFIX: &str = "WATTCAST";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Address the web server binds to
    pub bind_address: String,
    /// Location of the pre-rendered forecast plot
    pub image_path: PathBuf,
    /// Per-request timeout for the web server
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `wattcast.toml` if present, then `WATTCAST_*` variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let builder = Self::builder(File::with_name(CONFIG_FILE).required(false))?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        let config = Self::from_builder(builder)?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: AppConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn builder<S>(file: S) -> Result<config::ConfigBuilder<config::builder::DefaultState>>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = AppConfig::default();
        Ok(Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default(
                "image_path",
                defaults.image_path.to_string_lossy().into_owned(),
            )?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(file))
    }

    /// Rejects values the server cannot run with.
    fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, bind_address: Option<String>, image_path: Option<PathBuf>) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(image_path) = image_path {
            self.image_path = image_path;
        }
        self
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: AppConfig) -> Result<AppState> {
    model::validate().context("Published datasets failed validation")?;

    info!("Forecast image path: {}", config.image_path.display());
    let renderer = ReportRenderer::new(config.image_path.clone());

    Ok(AppState {
        renderer,
        config: Arc::new(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.image_path, PathBuf::from("electricity_consumption_forecast.png"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wattcast.toml");
        std::fs::write(&path, "bind_address = \"127.0.0.1:8080\"\nrequest_timeout_secs = 5\n").unwrap();

        let config: AppConfig = AppConfig::builder(File::from(path.as_path()))
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.image_path, PathBuf::from(DEFAULT_IMAGE_PATH));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wattcast.toml");
        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let builder = AppConfig::builder(File::from(path.as_path())).unwrap();

        let err = AppConfig::from_builder(builder).unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = AppConfig::default()
            .with_overrides(None, Some(PathBuf::from("/tmp/plot.png")));
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.image_path, PathBuf::from("/tmp/plot.png"));
    }

    #[test]
    fn test_initialize_app_state() {
        let state = initialize_app_state(AppConfig::default()).unwrap();
        assert_eq!(
            state.renderer.image_path(),
            std::path::Path::new(DEFAULT_IMAGE_PATH)
        );
    }
}
