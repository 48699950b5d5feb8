//! Configuration management for ufwban.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the persisted blocklist (JSON array of addresses)
    pub blocklist_file: PathBuf,

    /// Path of the append-only audit log
    pub log_file: PathBuf,

    /// UFW executable to invoke (bare name resolved via PATH, or absolute)
    pub ufw_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blocklist_file: PathBuf::from("/var/lib/ufwban/blocklist.json"),
            log_file: PathBuf::from("/var/log/ufwban.log"),
            ufw_path: "ufw".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.blocklist_file.as_os_str().is_empty() {
            anyhow::bail!("blocklist_file must not be empty");
        }
        if self.log_file.as_os_str().is_empty() {
            anyhow::bail!("log_file must not be empty");
        }
        if self.ufw_path.is_empty() {
            anyhow::bail!("ufw_path must not be empty");
        }
        Ok(())
    }

    /// Lock file guarding mutations of the blocklist file.
    /// Lives next to the blocklist so per-list locking works when the
    /// config points different invocations at different files.
    pub fn lock_file(&self) -> PathBuf {
        let mut path: OsString = self.blocklist_file.clone().into_os_string();
        path.push(".lock");
        PathBuf::from(path)
    }
}
