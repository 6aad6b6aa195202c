//! Predefined demo dataset.
//!
//! Twelve users and eighteen follows, loaded through the engine's public
//! mutation API like any other caller would. The follows include the cycles
//! `A -> C -> A` and `E -> F -> G -> H -> E`, and two isolated users (I, J).

use crate::domain::{Role, UserId};
use crate::graph::GraphEngine;
use serde::Serialize;

/// Users as `(id, name, role)`.
pub const DEMO_USERS: [(&str, &str, Role); 12] = [
    ("A", "Ana", Role::Student),
    ("B", "Beto", Role::Teacher),
    ("C", "Caro", Role::Graduate),
    ("D", "Dani", Role::Teacher),
    ("E", "Elena", Role::Student),
    ("F", "Fede", Role::Teacher),
    ("G", "Gina", Role::Graduate),
    ("H", "Hugo", Role::Student),
    ("I", "Iris", Role::Teacher),
    ("J", "Juan", Role::Graduate),
    ("K", "Karla", Role::Student),
    ("L", "Leo", Role::Teacher),
];

/// Follows as `(follower, followed)`.
pub const DEMO_FOLLOWS: [(&str, &str); 18] = [
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("A", "E"),
    ("D", "E"),
    ("D", "F"),
    ("D", "G"),
    ("D", "H"),
    ("B", "C"),
    ("C", "A"),
    ("E", "F"),
    ("F", "G"),
    ("G", "H"),
    ("H", "E"),
    ("K", "A"),
    ("K", "D"),
    ("L", "A"),
    ("L", "K"),
];

/// How much of the dataset the graph accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoSummary {
    /// Users added
    pub users_added: usize,
    /// Follows added
    pub follows_added: usize,
}

/// Load the demo dataset into `graph`.
///
/// Entries the graph rejects (for example ids that already exist) are
/// skipped and not counted.
pub fn load_demo(graph: &mut GraphEngine) -> DemoSummary {
    let users_added = DEMO_USERS
        .iter()
        .filter(|(id, name, role)| graph.add_user(*id, *name, *role))
        .count();

    let follows_added = DEMO_FOLLOWS
        .iter()
        .filter(|(from, to)| graph.add_follow(&UserId::from(*from), &UserId::from(*to)))
        .count();

    tracing::info!(users_added, follows_added, "Loaded demo dataset");

    DemoSummary {
        users_added,
        follows_added,
    }
}
