//! Traversal algorithms over the adjacency table.
//!
//! - Breadth-first search from a single origin
//! - Depth-first search over every user with back-edge (cycle) detection
//!
//! The adjacency table's key order is the user collection order, so the
//! depth-first roots are taken straight from it.

use crate::domain::{BfsResult, DfsResult, UserId};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};

/// Per-user state during depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not reached yet
    Unvisited,
    /// On the current depth-first path
    InProgress,
    /// Fully explored
    Done,
}

/// Breadth-first traversal.
///
/// Users are marked visited when enqueued, so each is enqueued at most once.
/// Neighbors are enqueued in adjacency order.
pub(super) fn bfs_impl(adjacency: &IndexMap<UserId, Vec<UserId>>, origin: &UserId) -> BfsResult {
    if !adjacency.contains_key(origin) {
        return BfsResult::default();
    }

    let mut order = Vec::new();
    let mut visited: HashSet<&UserId> = HashSet::new();
    let mut queue: VecDeque<&UserId> = VecDeque::new();

    visited.insert(origin);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        for neighbor in adjacency.get(current).into_iter().flatten() {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    let reachable = order.len();
    BfsResult { order, reachable }
}

/// Depth-first traversal over every user.
///
/// Each unvisited user, in collection order, roots a new search. A neighbor
/// that is still in progress is an ancestor on the current path, so the edge
/// to it is a back-edge and the graph has a cycle.
///
/// Uses an explicit stack of `(user, next neighbor index)` frames instead of
/// recursion; the visit order is identical to the recursive form.
pub(super) fn dfs_full_impl(adjacency: &IndexMap<UserId, Vec<UserId>>) -> DfsResult {
    let mut colors: HashMap<&UserId, Color> =
        adjacency.keys().map(|id| (id, Color::Unvisited)).collect();
    let mut order = Vec::with_capacity(adjacency.len());
    let mut cycle_detected = false;

    for root in adjacency.keys() {
        if colors.get(root) != Some(&Color::Unvisited) {
            continue;
        }

        colors.insert(root, Color::InProgress);
        order.push(root.clone());
        let mut stack: Vec<(&UserId, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let neighbor = adjacency.get(current).and_then(|n| n.get(next));

            let Some(neighbor) = neighbor else {
                colors.insert(current, Color::Done);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match colors.get(neighbor).copied() {
                Some(Color::Unvisited) => {
                    colors.insert(neighbor, Color::InProgress);
                    order.push(neighbor.clone());
                    stack.push((neighbor, 0));
                }
                Some(Color::InProgress) => {
                    if !cycle_detected {
                        tracing::trace!(from = %current, to = %neighbor, "Back-edge found");
                    }
                    cycle_detected = true;
                }
                Some(Color::Done) | None => {}
            }
        }
    }

    DfsResult {
        order,
        cycle_detected,
    }
}
