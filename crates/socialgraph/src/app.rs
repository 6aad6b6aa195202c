//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that owns the configuration and the
//! graph for one session.
//!
//! # Example
//!
//! ```no_run
//! use socialgraph::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::load(Path::new("socialgraph.yaml"), true).await?;
//!     println!("{}", app.graph().adjacency_text());
//!     Ok(())
//! }
//! ```

use crate::config::{SocialGraphConfig, Startup};
use crate::demo::{self, DemoSummary};
use crate::error::Result;
use crate::graph::GraphEngine;
use std::path::Path;

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    /// The graph for this session
    graph: GraphEngine,

    /// Loaded configuration
    config: SocialGraphConfig,

    /// Set when the demo dataset was loaded at startup
    demo: Option<DemoSummary>,
}

impl App {
    /// Create an App from an already loaded configuration.
    ///
    /// The demo dataset is loaded when `force_demo` is set or the
    /// configuration asks for it.
    pub fn new(config: SocialGraphConfig, force_demo: bool) -> Self {
        let mut graph = config.new_graph();
        let demo = (force_demo || config.startup == Startup::Demo)
            .then(|| demo::load_demo(&mut graph));

        Self {
            graph,
            config,
            demo,
        }
    }

    /// Load configuration from `config_path` and create the App.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub async fn load(config_path: &Path, force_demo: bool) -> Result<Self> {
        let config = SocialGraphConfig::load(config_path).await?;
        Ok(Self::new(config, force_demo))
    }

    /// Get an immutable reference to the graph.
    pub fn graph(&self) -> &GraphEngine {
        &self.graph
    }

    /// Get a mutable reference to the graph.
    pub fn graph_mut(&mut self) -> &mut GraphEngine {
        &mut self.graph
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &SocialGraphConfig {
        &self.config
    }

    /// Summary of the demo load, if it happened.
    pub fn demo(&self) -> Option<DemoSummary> {
        self.demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SelfFollowPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_app_default_config_is_empty() {
        let app = App::new(SocialGraphConfig::default(), false);
        assert_eq!(app.graph().user_count(), 0);
        assert!(app.demo().is_none());
        assert_eq!(app.graph().policy(), SelfFollowPolicy::Reject);
    }

    #[test]
    fn test_app_force_demo() {
        let app = App::new(SocialGraphConfig::default(), true);
        assert_eq!(app.graph().user_count(), 12);
        assert_eq!(app.demo().map(|d| d.follows_added), Some(18));
    }

    #[tokio::test]
    async fn test_app_load_demo_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("socialgraph.yaml");
        std::fs::write(&path, "startup: demo\nself-follows: allow\n").unwrap();

        let app = App::load(&path, false).await.unwrap();
        assert_eq!(app.graph().follow_count(), 18);
        assert_eq!(app.config().self_follows, SelfFollowPolicy::Allow);
    }

    #[tokio::test]
    async fn test_app_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("socialgraph.yaml");
        std::fs::write(&path, "startup: [not, a, startup]\n").unwrap();

        let err = App::load(&path, false).await.unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
