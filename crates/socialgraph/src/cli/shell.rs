//! Interactive shell.
//!
//! Reads one command per line, runs it against the session graph, and keeps
//! going after errors. Lines are split on whitespace; double quotes group
//! words, so `add A "Ana Maria" student` works. Each line is parsed with clap
//! in multicall mode, so the first word names the command.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use super::args::{AddArgs, PairArgs, UpdateArgs, UserArgs};
use super::execute;
use crate::graph::GraphEngine;
use crate::output::{self, OutputConfig, OutputMode};

const PROMPT: &str = "socialgraph> ";

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands available inside the shell
#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Add a user: add <ID> <NAME> <ROLE>
    Add(AddArgs),
    /// Remove a user and all of its follows
    Remove(UserArgs),
    /// Add a follow: follow <FROM> <TO>
    Follow(PairArgs),
    /// Remove a follow: unfollow <FROM> <TO>
    Unfollow(PairArgs),
    /// Change a user's name and/or role
    Update(UpdateArgs),
    /// Show the adjacency list
    Adjacency,
    /// Users without followers, most influential, most active
    Queries,
    /// Breadth-first search from a user, then the full depth-first search
    Bfs(UserArgs),
    /// Full depth-first search with cycle detection
    Dfs,
    /// Whether one user can reach another through follows
    Reachable(PairArgs),
    /// Follower and following counts of a user
    Degree(UserArgs),
    /// Number of users and follows
    Totals,
    /// List all users
    Users,
    /// List the commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words. Double quotes group words and are removed.
fn tokenize(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err("Unterminated quote".to_string());
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}

fn write_help<W: Write>(w: &mut W, config: &OutputConfig) -> std::io::Result<()> {
    let command = ShellLine::command();
    writeln!(w, "{}", output::color::bold("Commands:", config))?;
    for sub in command.get_subcommands() {
        let about = sub.get_about().map(ToString::to_string).unwrap_or_default();
        writeln!(w, "  {:<10} {about}", sub.get_name())?;
    }
    Ok(())
}

/// Run a command against the graph. Returns `false` when the shell should stop.
fn dispatch<W: Write>(
    graph: &mut GraphEngine,
    command: &ShellCommand,
    w: &mut W,
    config: &OutputConfig,
) -> Result<bool> {
    let mode = OutputMode::Text;
    match command {
        ShellCommand::Add(args) => execute::execute_add(graph, args, w, config)?,
        ShellCommand::Remove(args) => execute::execute_remove(graph, args, w, config)?,
        ShellCommand::Follow(args) => execute::execute_follow(graph, args, w, config)?,
        ShellCommand::Unfollow(args) => execute::execute_unfollow(graph, args, w, config)?,
        ShellCommand::Update(args) => execute::execute_update(graph, args, w, config)?,
        ShellCommand::Adjacency => execute::execute_adjacency(graph, mode, w, config)?,
        ShellCommand::Queries => execute::execute_queries(graph, mode, w, config)?,
        ShellCommand::Bfs(args) => execute::execute_bfs(graph, args, mode, w, config)?,
        ShellCommand::Dfs => execute::execute_dfs(graph, mode, w, config)?,
        ShellCommand::Reachable(args) => execute::execute_reachable(graph, args, mode, w, config)?,
        ShellCommand::Degree(args) => execute::execute_degree(graph, args, mode, w, config)?,
        ShellCommand::Totals => execute::execute_totals(graph, mode, w, config)?,
        ShellCommand::Users => execute::execute_users(graph, mode, w, config)?,
        ShellCommand::Help => write_help(w, config)?,
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Run the shell until `quit` or end of input.
///
/// When `interactive` is set a banner and a prompt are printed; scripted
/// input gets neither. Only I/O failures on `input` or `w` end the session
/// with an error.
pub fn run_shell<R: BufRead, W: Write>(
    graph: &mut GraphEngine,
    input: R,
    w: &mut W,
    config: &OutputConfig,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(w, "{}", output::color::bold("=== socialgraph interactive shell ===", config))?;
        if graph.user_count() > 0 {
            execute::execute_summary(graph, OutputMode::Text, w, config)?;
        }
        writeln!(w, "Type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(w, "{PROMPT}")?;
            w.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let words = match tokenize(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                writeln!(w, "{}", output::error(&format!("[error] {e}"), config))?;
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(w, "{}", e.render())?;
                continue;
            }
        };

        tracing::debug!(command = ?parsed.command, "Shell command");
        match dispatch(graph, &parsed.command, w, config) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => writeln!(w, "{}", output::error(&format!("[error] {e}"), config))?,
        }
    }

    if interactive {
        writeln!(w, "Bye.")?;
    }
    Ok(())
}
