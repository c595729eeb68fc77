//! Host-side configuration.
//!
//! # Responsibility
//! - Deserialize host tuning (log level, load policy, vouched license tags)
//!   from TOML.
//! - Keep every field defaulted so an empty config file is valid.

use crate::host::LoadPolicy;
use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Host loader configuration, usually read from `kmodlet.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Log level for the host's own diagnostics (`trace..error`).
    pub log_level: String,
    /// Absolute directory for host log files; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
    /// Policy applied to unrecognized license tags.
    pub load_policy: LoadPolicy,
    /// License tags this host vouches for beyond the fixed recognized set.
    pub extra_recognized_licenses: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            load_policy: LoadPolicy::default(),
            extra_recognized_licenses: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Parses a configuration document; missing fields fall back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Configuration load/parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: PathBuf, message: String },
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read config `{}`: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "failed to parse config: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, HostConfig};
    use crate::host::LoadPolicy;

    #[test]
    fn empty_document_yields_defaults() {
        let config = HostConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.load_policy, LoadPolicy::TaintAndLoad);
        assert!(config.extra_recognized_licenses.is_empty());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn parses_full_document() {
        let raw = r#"
            log_level = "debug"
            log_dir = "/var/log/kmodlet"
            load_policy = "reject_unrecognized"
            extra_recognized_licenses = ["Vendor-Internal"]
        "#;
        let config = HostConfig::from_toml_str(raw).expect("full config parses");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.load_policy, LoadPolicy::RejectUnrecognized);
        assert_eq!(
            config.extra_recognized_licenses,
            vec!["Vendor-Internal".to_string()]
        );
    }

    #[test]
    fn rejects_unknown_policy_value() {
        let raw = "load_policy = \"panic_and_reboot\"";
        let err = HostConfig::from_toml_str(raw).expect_err("unknown policy must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
