//
//  ashby-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client configuration holds the only state the client keeps across calls:
//! the credential, the base URL and the transport settings. It never changes
//! after the client is built.
//!
//! ## Resolution Order
//!
//! 1. Values set explicitly in code
//! 2. Environment variables (`ASHBY_API_KEY`, `ASHBY_BASE_URL`)
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ashby/config.toml`
//! - **macOS**: `~/Library/Application Support/ashby/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ashby\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! api_key = "your-api-key"
//! base_url = "https://api.ashbyhq.com"
//! timeout_secs = 60
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ashby_sdk::config::ClientConfig;
//!
//! // File + environment
//! let config = ClientConfig::load()?;
//!
//! // Fully explicit
//! let config = ClientConfig::default().with_api_key("key");
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::API_KEY_ENV;

/// Name of the environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ASHBY_BASE_URL";

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.ashbyhq.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable client configuration.
///
/// All fields use `#[serde(default)]` so partial configuration files load
/// cleanly.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API key. Absence is reported on first use, not at construction.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL; endpoint names are appended as path segments.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout handed to the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Loads the configuration file (if any) and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or
    /// an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_lookup(|name| std::env::var(name).ok()))
    }

    /// Reads a configuration file without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Builds a configuration from defaults and the process environment only.
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|name| std::env::var(name).ok())
    }

    /// Path of the configuration file for the current platform.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "ashby")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlays environment values obtained through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = present(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = present(BASE_URL_ENV) {
            self.base_url = url;
        }
        self
    }

    /// Sets the API key explicitly.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL explicitly.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Effective request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Effective user agent.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("ashby-sdk/{}", crate::VERSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("ashby-sdk/"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = ClientConfig::default()
            .with_api_key("from-file")
            .with_env_lookup(lookup(&[
                ("ASHBY_API_KEY", "from-env"),
                ("ASHBY_BASE_URL", "http://localhost:9000"),
            ]));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = ClientConfig::default()
            .with_api_key("kept")
            .with_env_lookup(lookup(&[("ASHBY_API_KEY", "  ")]));
        assert_eq!(config.api_key.as_deref(), Some("kept"));
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = \"abc\"\ntimeout_secs = 5\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [").unwrap();
        assert!(ClientConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let config = ClientConfig::default().with_api_key("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
