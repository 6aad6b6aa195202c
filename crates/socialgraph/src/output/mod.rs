//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Text writers take any [`Write`] so the interactive shell and the one-shot
//! commands render identically.

pub mod color;

use crate::domain::{BfsResult, DfsResult, User, UserId};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, success, warning};

use color::{bold, colorize_id, colorize_role, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(max_width: usize, use_colors: bool) -> Self {
        Self {
            max_width,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `SOCIALGRAPH_MAX_WIDTH`: Maximum content width (default: 100)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `SOCIALGRAPH_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let max_width = match env::var("SOCIALGRAPH_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "SOCIALGRAPH_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("SOCIALGRAPH_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_colors,
        }
    }

    /// Width available for wrapped content on the current terminal.
    pub fn content_width(&self) -> usize {
        get_terminal_width().min(self.max_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

// ============================================================================
// JSON
// ============================================================================

/// Write any serializable value as pretty JSON.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Writers
// ============================================================================

/// Join ids with `", "` and wrap to `width`, continuation lines indented.
fn wrap_ids(ids: &[UserId], width: usize, indent: &str) -> Vec<String> {
    let joined = ids
        .iter()
        .map(UserId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let options = textwrap::Options::new(width.max(20)).subsequent_indent(indent);
    textwrap::wrap(&joined, options)
        .into_iter()
        .map(|s| s.into_owned())
        .collect()
}

/// Write the adjacency table.
pub fn write_adjacency<W: Write>(w: &mut W, adjacency: &str, config: &OutputConfig) -> io::Result<()> {
    if adjacency.is_empty() {
        return writeln!(w, "{}", warning("No users in the graph.", config));
    }
    for line in adjacency.lines() {
        match line.split_once(" -> ") {
            Some((id, rest)) => {
                writeln!(w, "{} {} {rest}", colorize_id(id, config), dimmed("->", config))?;
            }
            None => writeln!(w, "{line}")?,
        }
    }
    Ok(())
}

/// Write a table of users.
pub fn write_users<'a, W: Write>(
    w: &mut W,
    users: impl IntoIterator<Item = &'a User>,
    config: &OutputConfig,
) -> io::Result<()> {
    let users: Vec<&User> = users.into_iter().collect();
    if users.is_empty() {
        return writeln!(w, "{}", warning("No users registered.", config));
    }

    writeln!(w, "{}", bold(&format!("{:<8} {:<20} {}", "ID", "NAME", "ROLE"), config))?;
    writeln!(w, "{}", dimmed(&"-".repeat(40), config))?;
    for user in users {
        // Pad before coloring so escape codes don't skew the columns
        let id = format!("{:<8}", user.id.as_str());
        writeln!(
            w,
            "{} {:<20} {}",
            colorize_id(&id, config),
            user.name,
            colorize_role(user.role, config)
        )?;
    }
    Ok(())
}

/// Write a titled list of user ids.
pub fn write_id_list<W: Write>(
    w: &mut W,
    title: &str,
    ids: &[UserId],
    config: &OutputConfig,
) -> io::Result<()> {
    let label = format!("{title}:");
    if ids.is_empty() {
        return writeln!(w, "{} {}", bold(&label, config), warning("(none)", config));
    }

    let indent = " ".repeat(label.len() + 1);
    let width = config.content_width().saturating_sub(label.len() + 1);
    let lines = wrap_ids(ids, width, &indent);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            writeln!(w, "{} {line}", bold(&label, config))?;
        } else {
            writeln!(w, "{line}")?;
        }
    }
    Ok(())
}

/// Write a breadth-first traversal result.
pub fn write_bfs<W: Write>(
    w: &mut W,
    origin: &UserId,
    result: &BfsResult,
    config: &OutputConfig,
) -> io::Result<()> {
    write_id_list(w, &format!("BFS from {origin}"), &result.order, config)?;
    writeln!(w, "{} {}", dimmed("Reached:", config), result.reachable)
}

/// Write a full depth-first traversal result.
pub fn write_dfs<W: Write>(w: &mut W, result: &DfsResult, config: &OutputConfig) -> io::Result<()> {
    write_id_list(w, "Full DFS", &result.order, config)?;
    let verdict = if result.cycle_detected {
        error("yes", config)
    } else {
        success("no", config)
    };
    writeln!(w, "{} {verdict}", dimmed("Cycle detected:", config))
}

/// Write the user and follow totals.
pub fn write_totals<W: Write>(
    w: &mut W,
    users: usize,
    follows: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{} {users}", dimmed("Total users:", config))?;
    writeln!(w, "{} {follows}", dimmed("Total follows:", config))
}

/// Write a reachability answer.
pub fn write_reachable<W: Write>(
    w: &mut W,
    from: &UserId,
    to: &UserId,
    reachable: bool,
    config: &OutputConfig,
) -> io::Result<()> {
    let answer = if reachable {
        success("yes", config)
    } else {
        warning("no", config)
    };
    writeln!(
        w,
        "Is {} reachable from {}? {answer}",
        colorize_id(to.as_str(), config),
        colorize_id(from.as_str(), config)
    )
}

/// Write a user's in and out degree.
pub fn write_degree<W: Write>(
    w: &mut W,
    id: &UserId,
    in_degree: usize,
    out_degree: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{}: {} {in_degree}, {} {out_degree}",
        colorize_id(id.as_str(), config),
        dimmed("followers", config),
        dimmed("following", config)
    )
}
