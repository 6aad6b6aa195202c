//! Configuration management for socialgraph.
//!
//! Configuration lives in a small YAML file:
//!
//! ```yaml
//! self-follows: reject   # allow | reject
//! startup: empty         # empty | demo
//! ```
//!
//! A missing file is not an error; every field has a default.

use crate::error::{Error, Result};
use crate::graph::{GraphEngine, SelfFollowPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Default configuration file name, resolved against the working directory
pub const CONFIG_FILE_NAME: &str = "socialgraph.yaml";

/// What the graph holds when the application starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Startup {
    /// No users
    #[default]
    Empty,
    /// The predefined demo dataset
    Demo,
}

/// Configuration file structure for socialgraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SocialGraphConfig {
    /// Whether users may follow themselves
    pub self_follows: SelfFollowPolicy,

    /// Initial graph contents
    pub startup: Startup,
}

impl Default for SocialGraphConfig {
    fn default() -> Self {
        Self {
            self_follows: SelfFollowPolicy::Reject,
            startup: Startup::Empty,
        }
    }
}

impl SocialGraphConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => {
                let config = Self::from_yaml(&content)?;
                tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Build an empty graph that enforces this configuration's policy.
    pub fn new_graph(&self) -> GraphEngine {
        GraphEngine::with_policy(self.self_follows)
    }
}
