//! Configuration for both binaries.
//!
//! The page generator has no config file: its knobs are the constants below
//! plus CLI flags (`--images-root`, `--output`, `--hero`).
//!
//! The form relay reads its SMTP settings from a small TOML file. The file is
//! optional and sparse: stock defaults are the base layer and user keys are
//! merged on top, so a file only needs the values it changes:
//!
//! ```toml
//! host = "smtp.example.com"
//! port = 587
//! tls = "starttls"          # "none" | "starttls" | "wrapper"
//! from = "website@example.com"
//! username = "website@example.com"
//! password = "app-password"
//! timeout_secs = 20
//! ```
//!
//! The file is looked up at `$FORM_RELAY_CONFIG`, falling back to
//! `form-relay.toml` in the working directory. Unknown keys are rejected to
//! catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory scanned for project folders when `--images-root` is not given.
pub const DEFAULT_IMAGES_ROOT: &str = "images";
/// Directory that receives `<slug>.html` when `--output` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "projects";
/// Per-project subdirectory holding the curated media.
pub const SELECTED_DIR: &str = "selected";
/// Number of slots in the gallery grid.
pub const GALLERY_SLOTS: usize = 4;
/// Media URLs are relative to the generated page, which lives one level below
/// the site root next to `images/`.
pub const MEDIA_BASE_URL: &str = "../images";
pub const STYLESHEET_HREF: &str = "../css/style.css";
pub const SCRIPT_SRC: &str = "../js/main.js";
pub const NEXT_PROJECT_HREF: &str = "../index.html#work";

pub const RELAY_CONFIG_ENV: &str = "FORM_RELAY_CONFIG";
pub const RELAY_CONFIG_FILE: &str = "form-relay.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain connection, for a local MTA on port 25.
    None,
    /// Upgrade with STARTTLS (port 587).
    Starttls,
    /// Implicit TLS (port 465).
    Wrapper,
}

/// SMTP settings for the form relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
    /// Envelope and header sender.
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 25,
            tls: TlsMode::None,
            from: "no-reply@localhost".to_string(),
            username: None,
            password: None,
            timeout_secs: 20,
        }
    }
}

impl RelayConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".into()));
        }
        if !self.from.contains('@') {
            return Err(ConfigError::Validation(
                "from must be an email address".into(),
            ));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(ConfigError::Validation(
                "username and password must be set together".into(),
            ));
        }
        Ok(())
    }
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse relay config text on top of the stock defaults and validate it.
pub fn parse_relay_config(content: &str) -> Result<RelayConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(content)?;
    let base = toml::Value::try_from(RelayConfig::default())
        .map_err(|e| ConfigError::Validation(e.to_string()))?;
    let config: RelayConfig = merge_toml(base, overlay).try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load relay config from `path`, or stock defaults if the file is absent.
pub fn load_relay_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    if !path.exists() {
        return Ok(RelayConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_relay_config(&content)
}

/// Where the relay looks for its config file.
pub fn relay_config_path() -> PathBuf {
    std::env::var_os(RELAY_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(RELAY_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        RelayConfig::default().validate().unwrap();
    }

    #[test]
    fn sparse_file_overrides_only_given_keys() {
        let config = parse_relay_config("host = \"smtp.example.com\"\nport = 587\n").unwrap();
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert_eq!(config.tls, TlsMode::None);
        assert_eq!(config.from, "no-reply@localhost");
    }

    #[test]
    fn tls_mode_parses_lowercase() {
        let config = parse_relay_config("tls = \"wrapper\"\nport = 465\n").unwrap();
        assert_eq!(config.tls, TlsMode::Wrapper);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = parse_relay_config("hostname = \"typo\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn credentials_must_come_in_pairs() {
        let result = parse_relay_config("username = \"me@example.com\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn from_must_look_like_an_address() {
        let result = parse_relay_config("from = \"website\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_relay_config(&tmp.path().join("form-relay.toml")).unwrap();
        assert_eq!(config.host, "localhost");
    }

    #[test]
    fn file_is_loaded_when_present() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("form-relay.toml");
        fs::write(&path, "from = \"site@example.com\"\n").unwrap();
        let config = load_relay_config(&path).unwrap();
        assert_eq!(config.from, "site@example.com");
    }

    #[test]
    fn merge_replaces_scalars_and_keeps_others() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }
}
