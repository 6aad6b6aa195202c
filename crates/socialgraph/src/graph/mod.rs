//! In-memory follows graph.
//!
//! [`GraphEngine`] owns every user and every follow relationship and is the
//! only place where the structural invariants are enforced:
//!
//! 1. Every id present in the adjacency or in-degree tables is a known user.
//! 2. `in_degree[v]` equals the number of follows `(x, v)` across all
//!    adjacency lists.
//! 3. No adjacency list holds a duplicate destination.
//! 4. Removing a user removes every follow touching it.
//!
//! # Edge Direction
//!
//! A follow `a -> b` means "a follows b". It is stored in `a`'s adjacency
//! list and counted in `b`'s in-degree (b's followers).
//!
//! # Failure Reporting
//!
//! Every operation is total. Mutations return `false` when a precondition
//! fails and perform no mutation at all in that case. Queries about unknown
//! users return `0` or an empty result.
//!
//! # Ordering
//!
//! The user collection keeps insertion order (removal preserves the order of
//! the remaining users). Ranking queries and the full depth-first traversal
//! iterate users in that order, so their results are deterministic.

mod queries;
mod traversal;

use crate::domain::{BfsResult, DfsResult, Role, User, UserId};
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a user may follow themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfFollowPolicy {
    /// `a -> a` is an ordinary follow (still subject to uniqueness)
    #[default]
    Allow,

    /// `a -> a` is rejected like any other invalid follow
    Reject,
}

/// The follows graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphEngine {
    /// User records indexed by id, in insertion order
    users: IndexMap<UserId, User>,

    /// Outgoing follows per user, in insertion order
    adjacency: IndexMap<UserId, Vec<UserId>>,

    /// Follower count per user
    in_degree: IndexMap<UserId, usize>,

    policy: SelfFollowPolicy,
}

impl GraphEngine {
    /// Create an empty graph that permits self-follows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with an explicit self-follow policy.
    pub fn with_policy(policy: SelfFollowPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The self-follow policy this graph enforces.
    pub fn policy(&self) -> SelfFollowPolicy {
        self.policy
    }

    // ========== Mutation ==========

    /// Add a user with an empty follow list and no followers.
    ///
    /// Returns `false` if `id` is empty or already taken.
    pub fn add_user(&mut self, id: impl Into<UserId>, name: impl Into<String>, role: Role) -> bool {
        let id = id.into();
        if id.is_empty() || self.users.contains_key(&id) {
            tracing::trace!(user = %id, "Rejected add_user");
            return false;
        }

        let user = User {
            id: id.clone(),
            name: name.into(),
            role,
        };
        self.adjacency.insert(id.clone(), Vec::new());
        self.in_degree.insert(id.clone(), 0);
        self.users.insert(id.clone(), user);

        tracing::debug!(user = %id, %role, "Added user");
        true
    }

    /// Remove a user and every follow touching it.
    ///
    /// Returns `false` if `id` is unknown.
    pub fn remove_user(&mut self, id: &UserId) -> bool {
        if !self.users.contains_key(id) {
            tracing::trace!(user = %id, "Rejected remove_user: unknown user");
            return false;
        }

        // Incoming follows (and a self-follow, which sits in its own list)
        for following in self.adjacency.values_mut() {
            if let Some(pos) = following.iter().position(|dest| dest == id) {
                following.remove(pos);
            }
        }

        // Outgoing follows
        let outgoing = self.adjacency.shift_remove(id).unwrap_or_default();
        for dest in &outgoing {
            self.decrement_in_degree(dest);
        }

        self.in_degree.shift_remove(id);
        self.users.shift_remove(id);

        tracing::debug!(user = %id, dropped_follows = outgoing.len(), "Removed user");
        true
    }

    /// Record that `from` follows `to`.
    ///
    /// Returns `false` if either user is unknown, the follow already exists,
    /// or it is a self-follow under [`SelfFollowPolicy::Reject`].
    pub fn add_follow(&mut self, from: &UserId, to: &UserId) -> bool {
        if !self.users.contains_key(to) {
            tracing::trace!(%from, %to, "Rejected add_follow: unknown user");
            return false;
        }
        if from == to && self.policy == SelfFollowPolicy::Reject {
            tracing::trace!(user = %from, "Rejected add_follow: self-follow");
            return false;
        }
        let Some(following) = self.adjacency.get_mut(from) else {
            tracing::trace!(%from, %to, "Rejected add_follow: unknown user");
            return false;
        };
        if following.contains(to) {
            tracing::trace!(%from, %to, "Rejected add_follow: duplicate");
            return false;
        }

        following.push(to.clone());
        *self.in_degree.entry(to.clone()).or_insert(0) += 1;

        tracing::debug!(%from, %to, "Added follow");
        true
    }

    /// Remove the follow `from -> to`.
    ///
    /// Returns `false` if either user is unknown or the follow does not exist.
    pub fn remove_follow(&mut self, from: &UserId, to: &UserId) -> bool {
        if !self.users.contains_key(to) {
            tracing::trace!(%from, %to, "Rejected remove_follow: unknown user");
            return false;
        }
        let Some(following) = self.adjacency.get_mut(from) else {
            tracing::trace!(%from, %to, "Rejected remove_follow: unknown user");
            return false;
        };
        let Some(pos) = following.iter().position(|dest| dest == to) else {
            tracing::trace!(%from, %to, "Rejected remove_follow: no such follow");
            return false;
        };

        following.remove(pos);
        self.decrement_in_degree(to);

        tracing::debug!(%from, %to, "Removed follow");
        true
    }

    /// Overwrite a user's name and/or role.
    ///
    /// `name` is applied only when it is `Some` and non-empty; `role` only
    /// when it is `Some`. The id never changes. Returns `false` if `id` is
    /// unknown.
    pub fn update_user(&mut self, id: &UserId, name: Option<&str>, role: Option<Role>) -> bool {
        let Some(user) = self.users.get_mut(id) else {
            tracing::trace!(user = %id, "Rejected update_user: unknown user");
            return false;
        };

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            user.name = name.to_string();
        }
        if let Some(role) = role {
            user.role = role;
        }

        tracing::debug!(user = %id, name = %user.name, role = %user.role, "Updated user");
        true
    }

    fn decrement_in_degree(&mut self, id: &UserId) {
        if let Some(count) = self.in_degree.get_mut(id) {
            debug_assert!(*count > 0, "in-degree underflow for {id}");
            *count = count.saturating_sub(1);
        }
    }

    // ========== Lookup ==========

    /// Whether `id` is a known user.
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    /// Get a user by id.
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// All users in collection order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Users that `id` follows, in the order the follows were added.
    ///
    /// Empty for unknown users.
    pub fn following(&self, id: &UserId) -> &[UserId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of users (|V|).
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of follows (|E|).
    pub fn follow_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Follower count of `id`, or 0 if unknown.
    pub fn in_degree(&self, id: &UserId) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Number of users `id` follows, or 0 if unknown.
    pub fn out_degree(&self, id: &UserId) -> usize {
        self.adjacency.get(id).map_or(0, Vec::len)
    }

    // ========== Traversal ==========

    /// Breadth-first traversal from `origin`.
    ///
    /// An unknown origin yields an empty order and a count of 0.
    pub fn bfs(&self, origin: &UserId) -> BfsResult {
        traversal::bfs_impl(&self.adjacency, origin)
    }

    /// Depth-first traversal covering every user, with cycle detection.
    pub fn dfs_full(&self) -> DfsResult {
        traversal::dfs_full_impl(&self.adjacency)
    }

    /// Whether `to` appears in the breadth-first order from `from`.
    pub fn is_reachable(&self, from: &UserId, to: &UserId) -> bool {
        self.bfs(from).order.contains(to)
    }

    // ========== Rankings ==========

    /// Users nobody follows.
    pub fn users_without_followers(&self) -> Vec<UserId> {
        queries::users_without_followers(&self.in_degree)
    }

    /// Users with the highest follower count. Ties are all included.
    pub fn most_influential(&self) -> Vec<UserId> {
        queries::top_by_degree(self.in_degree.iter().map(|(id, count)| (id, *count)))
    }

    /// Users following the most others. Ties are all included.
    pub fn most_active(&self) -> Vec<UserId> {
        queries::top_by_degree(
            self.adjacency
                .iter()
                .map(|(id, following)| (id, following.len())),
        )
    }

    // ========== Rendering and Export ==========

    /// Render the adjacency table, one `id -> a, b` line per user sorted by
    /// id, with `-` for users that follow nobody.
    pub fn adjacency_text(&self) -> String {
        let mut rows: Vec<(&UserId, &Vec<UserId>)> = self.adjacency.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        rows.into_iter()
            .map(|(id, following)| {
                let dests = if following.is_empty() {
                    "-".to_string()
                } else {
                    following
                        .iter()
                        .map(UserId::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("{id} -> {dests}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Export the graph as a petgraph `DiGraph`.
    ///
    /// Nodes are added in collection order and edges in adjacency order.
    pub fn to_digraph(&self) -> DiGraph<UserId, ()> {
        let mut graph = DiGraph::with_capacity(self.user_count(), self.follow_count());
        let node_map: HashMap<&UserId, NodeIndex> = self
            .users
            .keys()
            .map(|id| (id, graph.add_node(id.clone())))
            .collect();

        for (from, following) in &self.adjacency {
            for to in following {
                if let (Some(&a), Some(&b)) = (node_map.get(from), node_map.get(to)) {
                    graph.add_edge(a, b, ());
                }
            }
        }

        graph
    }
}
