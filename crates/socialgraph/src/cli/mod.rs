//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for socialgraph using
//! clap's derive API. There is no persistence: every run starts from the
//! configured startup graph (empty or the demo dataset). Mutations are
//! therefore only offered inside the interactive shell, which is the
//! default command.
//!
//! # Commands
//!
//! - `shell`: Interactive session (default)
//! - `summary`: Adjacency list and totals
//! - `users`: List users
//! - `adjacency`: Adjacency list
//! - `queries`: Users without followers, most influential, most active
//! - `bfs`: Breadth-first search from a user plus the full depth-first search
//! - `dfs`: Full depth-first search with cycle detection
//! - `reachable`: Whether one user reaches another
//! - `degree`: Follower and following counts
//! - `totals`: Number of users and follows
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (one-shot commands)
//! - `--demo`: Start from the demo dataset
//! - `--config`: Configuration file path
//!
//! # Example
//!
//! ```bash
//! socialgraph --demo queries
//! socialgraph --demo --json bfs a
//! socialgraph --demo
//! ```

mod args;
mod execute;
mod shell;
mod types;
mod validators;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{AddArgs, PairArgs, UpdateArgs, UserArgs};

// Re-export types
pub use types::RoleArg;

// Re-export validators for external use
pub use validators::{validate_name, validate_user_id};

pub use shell::run_shell;

use crate::app::App;
use crate::config::CONFIG_FILE_NAME;
use crate::output::{OutputConfig, OutputMode};

/// Socialgraph - a directed follows graph of users
///
/// Explore who follows whom: traversals, reachability, cycle detection, and
/// follower rankings over an in-memory graph.
#[derive(Parser, Debug)]
#[command(name = "socialgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Start from the demo dataset regardless of configuration
    #[arg(long, global = true)]
    pub demo: bool,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive shell (default)
    ///
    /// Add and remove users and follows, then run any query. Type `help`
    /// inside the shell for the command list.
    Shell,

    /// Show the adjacency list and totals
    Summary,

    /// List all users
    Users,

    /// Show the adjacency list, one line per user sorted by id
    Adjacency,

    /// Show users without followers, the most influential and the most active
    Queries,

    /// Breadth-first search from a user, followed by the full depth-first search
    Bfs(UserArgs),

    /// Depth-first search over every user, reporting whether a cycle exists
    Dfs,

    /// Check whether one user reaches another through follows
    Reachable(PairArgs),

    /// Show a user's follower and following counts
    Degree(UserArgs),

    /// Show the number of users and follows
    Totals,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let output_config = OutputConfig::from_env();
        let mut app = App::load(&self.config, self.demo).await?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let config = &output_config;

        match &self.command {
            None | Some(Commands::Shell) => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                run_shell(app.graph_mut(), stdin.lock(), &mut out, config, interactive)
            }
            Some(Commands::Summary) => {
                execute::execute_summary(app.graph(), output_mode, &mut out, config)
            }
            Some(Commands::Users) => execute::execute_users(app.graph(), output_mode, &mut out, config),
            Some(Commands::Adjacency) => {
                execute::execute_adjacency(app.graph(), output_mode, &mut out, config)
            }
            Some(Commands::Queries) => {
                execute::execute_queries(app.graph(), output_mode, &mut out, config)
            }
            Some(Commands::Bfs(args)) => {
                execute::execute_bfs(app.graph(), args, output_mode, &mut out, config)
            }
            Some(Commands::Dfs) => execute::execute_dfs(app.graph(), output_mode, &mut out, config),
            Some(Commands::Reachable(args)) => {
                execute::execute_reachable(app.graph(), args, output_mode, &mut out, config)
            }
            Some(Commands::Degree(args)) => {
                execute::execute_degree(app.graph(), args, output_mode, &mut out, config)
            }
            Some(Commands::Totals) => {
                execute::execute_totals(app.graph(), output_mode, &mut out, config)
            }
        }
    }
}
