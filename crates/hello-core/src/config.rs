//! Configuration management for Hello
//!
//! Default greeting text lives in `.hello/config.toml` under the repo root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Greeting, HelloError, Result};

/// Repository-level Hello configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloConfig {
    /// Text used when the caller gives none
    #[serde(default)]
    pub greeting: GreetingDefaults,
}

/// Default title and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingDefaults {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_message")]
    pub message: String,
}

fn default_title() -> String {
    "Welcome to AbarCloud".to_string()
}

fn default_message() -> String {
    "Hello World!".to_string()
}

impl Default for GreetingDefaults {
    fn default() -> Self {
        Self {
            title: default_title(),
            message: default_message(),
        }
    }
}

impl HelloConfig {
    /// Path of the config file under `repo_root`
    pub fn path(repo_root: &Path) -> PathBuf {
        repo_root.join(".hello").join("config.toml")
    }

    /// Load configuration from `.hello/config.toml` or use defaults
    pub fn load_or_default(repo_root: &Path) -> Result<Self> {
        let config_path = Self::path(repo_root);

        let content = match std::fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {:?}, using defaults", config_path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded config from {:?}", config_path);
        toml::from_str(&content).map_err(|e| {
            HelloError::Config(format!("Failed to parse {}: {}", config_path.display(), e))
        })
    }

    /// Write default configuration to `.hello/config.toml`
    pub fn write_default(repo_root: &Path) -> Result<PathBuf> {
        let config_path = Self::path(repo_root);
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| HelloError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Greeting built from the configured defaults
    pub fn greeting(&self) -> Greeting {
        Greeting::new(self.greeting.title.clone(), self.greeting.message.clone())
    }
}
