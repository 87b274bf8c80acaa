//! # Sniffer Configuration
//!
//! Layered configuration for the capture pipeline.
//!
//! ## Features
//! - **Layering**: defaults, YAML files and `SNIFFER_*` environment variables
//! - **Validation**: interface names, snapshot length and timeout ranges are
//!   checked before a capture handle is ever opened

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

mod capture;
mod error;
mod telemetry;
mod validation;

pub use capture::{CaptureConfig, LinkLayerMode};
pub use error::ConfigError;
pub use telemetry::TelemetryConfig;

const BASE_CONFIG_FILE: &str = "config/sniffer.yaml";
const ENV_PREFIX: &str = "SNIFFER_";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq)]
pub struct SnifferConfig {
    /// Live capture parameters.
    #[validate(nested)]
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Logging and metrics.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl SnifferConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/sniffer.yaml`, if present
    /// 3. `config/<SNIFFER_ENV>.yaml`, if present (`SNIFFER_ENV` defaults to `production`)
    /// 4. `SNIFFER_*` environment variables, `__` separating sections
    ///    (e.g. `SNIFFER_CAPTURE__INTERFACE=wlan0`)
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SnifferConfig::default()));

        if Path::new(BASE_CONFIG_FILE).exists() {
            figment = figment.merge(Yaml::file(BASE_CONFIG_FILE));
        } else {
            debug!("{} not found, using default configuration", BASE_CONFIG_FILE);
        }

        let env = std::env::var("SNIFFER_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific file, still honouring environment overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment =
            Figment::from(Serialized::defaults(SnifferConfig::default())).merge(Yaml::file(path));
        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sniffer-config-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn full_config_validation() {
        let config = SnifferConfig::default();
        config.validate().expect("Default config should validate");
    }

    #[test]
    fn load_from_file() {
        let path = write_temp(
            "ok.yaml",
            "capture:\n  interface: wlan0\n  snaplen: 4KiB\n  link_layer: present\n  frame_limit: 25\n",
        );
        let config = SnifferConfig::load_from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.capture.interface, "wlan0");
        assert_eq!(config.capture.snaplen, 4096);
        assert_eq!(config.capture.link_layer, LinkLayerMode::Present);
        assert_eq!(config.capture.frame_limit, Some(25));
        assert!(config.capture.promiscuous);
    }

    #[test]
    fn invalid_file_is_rejected() {
        let path = write_temp("bad.yaml", "capture:\n  interface: \"eth 0\"\n");
        let err = SnifferConfig::load_from_path(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("capture.interface"));
    }

    #[test]
    fn missing_file() {
        let err = SnifferConfig::load_from_path("/nonexistent/sniffer.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn environment_override() {
        std::env::set_var("SNIFFER_TELEMETRY__METRICS_SUMMARY", "true");
        let config = SnifferConfig::load().unwrap();
        assert!(config.telemetry.metrics_summary);
    }
}
