//! Dial configuration: defaults, TOML loading and validation.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::types::Location;

/// Looked up in the working directory when no explicit path is given.
pub const LOCAL_CONFIG_FILE: &str = "daylight-dial.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialSettings {
    /// Radius of the scale in drawing units; every other dimension derives from it.
    pub radius: f64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self { radius: 600.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub interval_ms: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self { interval_ms: 50 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub location: Location,
    pub dial: DialSettings,
    pub demo: DemoSettings,
}

impl DialConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dial.radius.is_finite() && self.dial.radius > 0.0) {
            return Err(ConfigError::Validation(format!(
                "dial radius must be positive, got {}",
                self.dial.radius
            )));
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ConfigError::Validation(format!(
                "latitude must be within ±90°, got {}",
                self.location.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ConfigError::Validation(format!(
                "longitude must be within ±180°, got {}",
                self.location.longitude
            )));
        }
        Ok(())
    }
}

/// Find and load configuration.
///
/// Search order:
/// 1. Explicit path if provided (must exist)
/// 2. `daylight-dial.toml` in the working directory
/// 3. Built-in defaults
pub fn load_config(explicit_path: Option<&Path>) -> Result<DialConfig, ConfigError> {
    if let Some(path) = explicit_path {
        info!("Loading configuration from {}", path.display());
        return load_config_file(path);
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        info!("Loading configuration from {}", local.display());
        return load_config_file(local);
    }

    debug!("No configuration file found, using defaults");
    Ok(DialConfig::default())
}

fn load_config_file(path: &Path) -> Result<DialConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<DialConfig, ConfigError> {
    let cfg: DialConfig = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, DialConfig::default());
        assert!(approx(cfg.dial.radius, 600.0, 1e-12));
        assert_eq!(cfg.demo.interval_ms, 50);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse_config(
            r#"
[location]
latitude = 60.17
longitude = 24.94

[dial]
radius = 300
"#,
        )
        .unwrap();
        assert!(approx(cfg.location.latitude, 60.17, 1e-12));
        assert!(approx(cfg.location.longitude, 24.94, 1e-12));
        assert!(approx(cfg.dial.radius, 300.0, 1e-12));
        assert_eq!(cfg.demo, DemoSettings::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_config("[dial\nradius = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn non_positive_radius_fails_validation() {
        assert!(matches!(
            parse_config("[dial]\nradius = 0\n"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn latitude_out_of_range_fails_validation() {
        assert!(matches!(
            parse_config("[location]\nlatitude = 95.0\nlongitude = 0.0\n"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::MissingFile(p)) if p == path
        ));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dial.toml");
        std::fs::write(&path, "[demo]\ninterval_ms = 250\n").unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.demo.interval_ms, 250);
        assert_eq!(cfg.location, Location::default());
    }
}
