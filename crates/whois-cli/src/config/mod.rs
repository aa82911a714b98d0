//! Configuration management.

pub mod patterns;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use whois_client::ClientConfig;

pub use patterns::PatternConfig;

/// System-wide pattern file consulted when the user config names none.
pub const DEFAULT_PATTERNS_FILE: &str = "/etc/whois.conf";

/// User configuration, read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tag sent to servers that accept client identification.
    pub client_tag: Option<String>,

    /// Hide legal disclaimers (as if -H was passed).
    pub hide_disclaimers: bool,

    /// Server for queries that match no registry.
    pub default_server: Option<String>,

    /// Give up after this many referrals.
    pub max_referrals: Option<usize>,

    /// Pattern file mapping queries to servers.
    pub patterns_file: Option<PathBuf>,
}

impl Config {
    /// Get the config file path.
    ///
    /// `WHOIS_CONFIG` takes precedence over the platform config directory.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("WHOIS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("net", "whois-rs", "whois").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, falling back to defaults when there is no file.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read {}: {e}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow!("invalid configuration in {}: {e}", path.display()))
    }

    /// Pattern file to consult.
    pub fn patterns_path(&self) -> &Path {
        self.patterns_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_PATTERNS_FILE))
    }

    /// Client settings: built-in defaults, then this file, then the environment.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new()
            .hide_disclaimers(self.hide_disclaimers)
            .max_referrals(self.max_referrals);
        if let Some(tag) = &self.client_tag {
            config = config.client_tag(tag.as_str());
        }
        if let Some(server) = &self.default_server {
            config = config.default_server(server.as_str());
        }
        config.apply_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "client_tag = \"mytool\"\nhide_disclaimers = true\nmax_referrals = 4\n\
             patterns_file = \"/tmp/whois-patterns.conf\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.client_tag.as_deref(), Some("mytool"));
        assert!(config.hide_disclaimers);
        assert_eq!(config.max_referrals, Some(4));
        assert_eq!(config.patterns_path(), Path::new("/tmp/whois-patterns.conf"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.patterns_path(), Path::new("/etc/whois.conf"));

        let client = config.client_config();
        assert_eq!(client.max_referrals, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"x\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_client_config_from_file() {
        let config = Config {
            client_tag: Some("mytool".into()),
            max_referrals: Some(2),
            ..Config::default()
        };
        let client = config.client_config();
        assert_eq!(client.client_tag, "mytool");
        assert_eq!(client.max_referrals, Some(2));
    }
}
