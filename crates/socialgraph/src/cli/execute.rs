//! Command execution logic.
//!
//! Each function runs one command against the graph and renders the result.
//! A rejected operation becomes an error; the one-shot CLI turns it into a
//! non-zero exit and the shell prints it and keeps going.

use std::io::Write;

use anyhow::Result;
use serde_json::json;

use super::args::{AddArgs, PairArgs, UpdateArgs, UserArgs};
use crate::domain::{Role, UserId};
use crate::error::Error;
use crate::graph::{GraphEngine, SelfFollowPolicy};
use crate::output::{self, OutputConfig, OutputMode};

/// Resolve a validated id to a known user.
fn existing_user(graph: &GraphEngine, id: &str) -> Result<UserId> {
    let id = UserId::from(id);
    if graph.contains(&id) {
        Ok(id)
    } else {
        Err(Error::UserNotFound(id).into())
    }
}

fn adjacency_json(graph: &GraphEngine) -> serde_json::Map<String, serde_json::Value> {
    graph
        .users()
        .map(|user| {
            let following: Vec<&str> = graph.following(&user.id).iter().map(UserId::as_str).collect();
            (user.id.to_string(), json!(following))
        })
        .collect()
}

// ========== Queries ==========

/// Execute the summary command: adjacency listing plus totals
pub fn execute_summary<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({
                "users": graph.user_count(),
                "follows": graph.follow_count(),
                "adjacency": adjacency_json(graph),
            }),
        )?,
        OutputMode::Text => {
            output::write_adjacency(w, &graph.adjacency_text(), config)?;
            writeln!(w)?;
            output::write_totals(w, graph.user_count(), graph.follow_count(), config)?;
        }
    }
    Ok(())
}

/// Execute the users command
pub fn execute_users<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => {
            let users: Vec<_> = graph.users().collect();
            output::write_json(w, &users)?;
        }
        OutputMode::Text => output::write_users(w, graph.users(), config)?,
    }
    Ok(())
}

/// Execute the adjacency command
pub fn execute_adjacency<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => output::write_json(w, &adjacency_json(graph))?,
        OutputMode::Text => output::write_adjacency(w, &graph.adjacency_text(), config)?,
    }
    Ok(())
}

/// Execute the queries command: no followers, most influential, most active
pub fn execute_queries<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let without_followers = graph.users_without_followers();
    let most_influential = graph.most_influential();
    let most_active = graph.most_active();

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({
                "without_followers": without_followers,
                "most_influential": most_influential,
                "most_active": most_active,
            }),
        )?,
        OutputMode::Text => {
            output::write_id_list(w, "Users without followers", &without_followers, config)?;
            output::write_id_list(w, "Most influential users", &most_influential, config)?;
            output::write_id_list(w, "Most active users", &most_active, config)?;
        }
    }
    Ok(())
}

/// Execute the bfs command: traversal from one user, then the full DFS
pub fn execute_bfs<W: Write>(
    graph: &GraphEngine,
    args: &UserArgs,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let origin = existing_user(graph, &args.id)?;
    let bfs = graph.bfs(&origin);
    let dfs = graph.dfs_full();

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({ "origin": origin, "bfs": bfs, "dfs": dfs }),
        )?,
        OutputMode::Text => {
            output::write_bfs(w, &origin, &bfs, config)?;
            output::write_dfs(w, &dfs, config)?;
        }
    }
    Ok(())
}

/// Execute the dfs command
pub fn execute_dfs<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let dfs = graph.dfs_full();
    match mode {
        OutputMode::Json => output::write_json(w, &dfs)?,
        OutputMode::Text => output::write_dfs(w, &dfs, config)?,
    }
    Ok(())
}

/// Execute the reachable command
pub fn execute_reachable<W: Write>(
    graph: &GraphEngine,
    args: &PairArgs,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let from = existing_user(graph, &args.from)?;
    let to = existing_user(graph, &args.to)?;
    let reachable = graph.is_reachable(&from, &to);

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({ "from": from, "to": to, "reachable": reachable }),
        )?,
        OutputMode::Text => output::write_reachable(w, &from, &to, reachable, config)?,
    }
    Ok(())
}

/// Execute the degree command
pub fn execute_degree<W: Write>(
    graph: &GraphEngine,
    args: &UserArgs,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let id = existing_user(graph, &args.id)?;
    let (in_degree, out_degree) = (graph.in_degree(&id), graph.out_degree(&id));

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({ "id": id, "in_degree": in_degree, "out_degree": out_degree }),
        )?,
        OutputMode::Text => output::write_degree(w, &id, in_degree, out_degree, config)?,
    }
    Ok(())
}

/// Execute the totals command
pub fn execute_totals<W: Write>(
    graph: &GraphEngine,
    mode: OutputMode,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => output::write_json(
            w,
            &json!({ "users": graph.user_count(), "follows": graph.follow_count() }),
        )?,
        OutputMode::Text => {
            output::write_totals(w, graph.user_count(), graph.follow_count(), config)?;
        }
    }
    Ok(())
}

// ========== Mutations (shell only) ==========

/// Execute the add command
pub fn execute_add<W: Write>(
    graph: &mut GraphEngine,
    args: &AddArgs,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let role = Role::from(args.role);
    if !graph.add_user(args.id.as_str(), args.name.as_str(), role) {
        return Err(Error::Command(format!("User id '{}' already exists", args.id)).into());
    }

    writeln!(
        w,
        "{}",
        output::success(&format!("Added user {} - {} ({role})", args.id, args.name), config)
    )?;
    Ok(())
}

/// Execute the remove command
pub fn execute_remove<W: Write>(
    graph: &mut GraphEngine,
    args: &UserArgs,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let id = existing_user(graph, &args.id)?;
    if !graph.remove_user(&id) {
        return Err(Error::Command(format!("Could not remove user {id}")).into());
    }

    writeln!(w, "{}", output::success(&format!("Removed user {id}"), config))?;
    Ok(())
}

/// Execute the follow command
pub fn execute_follow<W: Write>(
    graph: &mut GraphEngine,
    args: &PairArgs,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let from = existing_user(graph, &args.from)?;
    let to = existing_user(graph, &args.to)?;

    if !graph.add_follow(&from, &to) {
        let reason = if from == to && graph.policy() == SelfFollowPolicy::Reject {
            "users cannot follow themselves".to_string()
        } else {
            format!("{from} already follows {to}")
        };
        return Err(Error::Command(format!("Could not add {from} -> {to}: {reason}")).into());
    }

    writeln!(w, "{}", output::success(&format!("Added follow {from} -> {to}"), config))?;
    Ok(())
}

/// Execute the unfollow command
pub fn execute_unfollow<W: Write>(
    graph: &mut GraphEngine,
    args: &PairArgs,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let from = existing_user(graph, &args.from)?;
    let to = existing_user(graph, &args.to)?;

    if !graph.remove_follow(&from, &to) {
        return Err(Error::Command(format!("{from} does not follow {to}")).into());
    }

    writeln!(w, "{}", output::success(&format!("Removed follow {from} -> {to}"), config))?;
    Ok(())
}

/// Execute the update command
pub fn execute_update<W: Write>(
    graph: &mut GraphEngine,
    args: &UpdateArgs,
    w: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    let id = existing_user(graph, &args.id)?;
    if args.name.is_none() && args.role.is_none() {
        writeln!(w, "{}", output::warning("Nothing to update", config))?;
        return Ok(());
    }

    if !graph.update_user(&id, args.name.as_deref(), args.role.map(Role::from)) {
        return Err(Error::UserNotFound(id).into());
    }

    writeln!(w, "{}", output::success(&format!("Updated user {id}"), config))?;
    Ok(())
}
