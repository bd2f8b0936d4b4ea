//! Credential configuration.
//!
//! The API key is resolved once per process from an ordered list of
//! [`CredentialSource`]s, first non-empty wins: the local config file, then
//! the `CLOUDFLARE_API_KEY` environment variable.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable consulted after the local config file.
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";

/// One capability: supply an API key, or nothing.
pub trait CredentialSource {
    fn api_key(&self) -> Option<String>;
}

/// The JSON config file under the user config directory.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default)]
    pub cloudflare_api_key: String,
}

impl LocalConfig {
    /// Every settable field, by its config key. The schema is fixed and
    /// enumerated; `get`/`set` below are the only accessors.
    pub const FIELDS: &'static [&'static str] = &["cloudflare_api_key"];

    /// `<config-dir>/cfcli/config.json`.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("cannot determine the user config directory")?;
        Ok(dir.join("cfcli").join("config.json"))
    }

    /// Load the config file. A missing file is an empty config, not an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data)
                .with_context(|| format!("malformed config file: {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("cannot read config file: {}", path.display()))
            }
        }
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create config directory: {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(self).context("cannot serialize config")?;
        fs::write(&path, data)
            .with_context(|| format!("cannot write config file: {}", path.display()))?;
        Ok(())
    }

    /// Read a field by config key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "cloudflare_api_key" => Some(&self.cloudflare_api_key),
            _ => None,
        }
    }

    /// Set a field by config key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cloudflare_api_key" => {
                self.cloudflare_api_key = value.to_string();
                Ok(())
            }
            _ => bail!("unknown config key: {key}"),
        }
    }

    /// All `(key, value)` pairs in schema order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::FIELDS
            .iter()
            .map(|field| (*field, self.get(field).unwrap_or_default().to_string()))
            .collect()
    }
}

impl CredentialSource for LocalConfig {
    fn api_key(&self) -> Option<String> {
        (!self.cloudflare_api_key.is_empty()).then(|| self.cloudflare_api_key.clone())
    }
}

/// Reads [`ENV_API_KEY`] from the process environment.
pub struct EnvCredential;

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        env::var(ENV_API_KEY).ok().filter(|key| !key.is_empty())
    }
}

/// Ordered credential sources composed first-non-empty-wins.
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// The production order: local config file, then environment.
    pub fn default_sources() -> Result<Self> {
        let local = LocalConfig::load()?;
        Ok(Self::new(vec![Box::new(local), Box::new(EnvCredential)]))
    }

    /// The first key any source supplies.
    #[must_use]
    pub fn resolve(&self) -> Option<String> {
        self.sources.iter().find_map(|source| source.api_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<String>);

    impl CredentialSource for Fixed {
        fn api_key(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn chain_prefers_the_first_source() {
        let chain = CredentialChain::new(vec![
            Box::new(Fixed(Some("local-key".to_string()))),
            Box::new(Fixed(Some("env-key".to_string()))),
        ]);
        assert_eq!(chain.resolve().as_deref(), Some("local-key"));
    }

    #[test]
    fn chain_falls_through_empty_sources() {
        let chain = CredentialChain::new(vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some("env-key".to_string()))),
        ]);
        assert_eq!(chain.resolve().as_deref(), Some("env-key"));
    }

    #[test]
    fn chain_with_no_keys_resolves_to_none() {
        let chain = CredentialChain::new(vec![Box::new(Fixed(None)), Box::new(Fixed(None))]);
        assert_eq!(chain.resolve(), None);
    }

    #[test]
    fn local_config_empty_key_yields_nothing() {
        let config = LocalConfig::default();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn local_config_non_empty_key_is_supplied() {
        let config = LocalConfig {
            cloudflare_api_key: "abc".to_string(),
        };
        assert_eq!(config.api_key().as_deref(), Some("abc"));
    }

    #[test]
    fn schema_get_and_set_round_trip() {
        let mut config = LocalConfig::default();
        config.set("cloudflare_api_key", "xyz").unwrap();
        assert_eq!(config.get("cloudflare_api_key"), Some("xyz"));
    }

    #[test]
    fn schema_rejects_unknown_keys() {
        let mut config = LocalConfig::default();
        assert!(config.set("nonexistent", "v").is_err());
        assert_eq!(config.get("nonexistent"), None);
    }

    #[test]
    fn entries_cover_every_schema_field() {
        let config = LocalConfig {
            cloudflare_api_key: "abc".to_string(),
        };
        let entries = config.entries();
        assert_eq!(entries.len(), LocalConfig::FIELDS.len());
        assert_eq!(entries[0], ("cloudflare_api_key", "abc".to_string()));
    }

    #[test]
    fn missing_config_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = LocalConfig::load_from(&path).unwrap();
        assert!(config.cloudflare_api_key.is_empty());
    }

    #[test]
    fn config_file_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = LocalConfig {
            cloudflare_api_key: "file-key".to_string(),
        };
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let loaded = LocalConfig::load_from(&path).unwrap();
        assert_eq!(loaded.cloudflare_api_key, "file-key");
    }
}
