//! Integration tests for the graph engine.
//!
//! These tests exercise the public API: mutation rules, degree bookkeeping,
//! traversal order, cycle detection, and the ranking queries.

use petgraph::algo::is_cyclic_directed;
use rstest::{fixture, rstest};
use socialgraph::domain::{Role, UserId};
use socialgraph::graph::{GraphEngine, SelfFollowPolicy};

fn id(s: &str) -> UserId {
    UserId::from(s)
}

fn ids(list: &[&str]) -> Vec<UserId> {
    list.iter().map(|s| id(s)).collect()
}

/// Build a graph with the given users (all students) and follows.
fn build(users: &[&str], follows: &[(&str, &str)]) -> GraphEngine {
    let mut graph = GraphEngine::new();
    for &user in users {
        assert!(graph.add_user(user, format!("User {user}"), Role::Student));
    }
    for &(from, to) in follows {
        assert!(graph.add_follow(&id(from), &id(to)), "follow {from} -> {to}");
    }
    graph
}

fn degree_sums(graph: &GraphEngine) -> (usize, usize) {
    let in_sum = graph.users().map(|u| graph.in_degree(&u.id)).sum();
    let out_sum = graph.users().map(|u| graph.out_degree(&u.id)).sum();
    (in_sum, out_sum)
}

/// Chain A -> B -> C -> D
#[fixture]
fn chain() -> GraphEngine {
    build(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")])
}

/// 3-cycle A -> B -> C -> A plus isolated D
#[fixture]
fn triangle() -> GraphEngine {
    build(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "A")])
}

// ========== Scenarios ==========

#[test]
fn test_two_users_one_follow() {
    let mut graph = GraphEngine::new();
    assert!(graph.add_user("A", "Ana", Role::Student));
    assert!(graph.add_user("B", "Beto", Role::Teacher));

    assert!(graph.add_follow(&id("A"), &id("B")));
    assert_eq!(graph.in_degree(&id("B")), 1);
    assert_eq!(graph.out_degree(&id("A")), 1);
    assert_eq!(graph.adjacency_text(), "A -> B\nB -> -");
}

#[rstest]
fn test_cycle_with_isolated_user(triangle: GraphEngine) {
    let result = triangle.dfs_full();

    assert!(result.cycle_detected);
    assert_eq!(result.order.len(), 4);
    for user in ["A", "B", "C", "D"] {
        assert_eq!(result.order.iter().filter(|v| v.as_str() == user).count(), 1);
    }
}

#[rstest]
fn test_bfs_along_chain(chain: GraphEngine) {
    let from_a = chain.bfs(&id("A"));
    assert_eq!(from_a.order, ids(&["A", "B", "C", "D"]));
    assert_eq!(from_a.reachable, 4);

    let from_d = chain.bfs(&id("D"));
    assert_eq!(from_d.order, ids(&["D"]));
    assert_eq!(from_d.reachable, 1);
}

#[test]
fn test_most_influential_single_and_tied() {
    // In-degrees: A=0, B=2, C=1
    let mut graph = build(&["A", "B", "C"], &[("A", "B"), ("C", "B"), ("A", "C")]);
    assert_eq!(graph.most_influential(), ids(&["B"]));

    // Tie: C also reaches 2
    assert!(graph.add_follow(&id("B"), &id("C")));
    assert_eq!(graph.most_influential(), ids(&["B", "C"]));
}

#[test]
fn test_remove_followed_user() {
    // B and C both follow X; B also follows C
    let mut graph = build(
        &["B", "C", "X"],
        &[("B", "X"), ("C", "X"), ("B", "C")],
    );

    assert!(graph.remove_user(&id("X")));

    assert_eq!(graph.following(&id("B")), ids(&["C"]).as_slice());
    assert!(graph.following(&id("C")).is_empty());
    assert_eq!(graph.in_degree(&id("C")), 1);
    assert_eq!(graph.in_degree(&id("B")), 0);
    assert_eq!(graph.follow_count(), 1);
}

// ========== Mutation Rules ==========

#[test]
fn test_duplicate_user_rejected() {
    let mut graph = build(&["A"], &[]);
    let before = graph.clone();

    assert!(!graph.add_user("A", "Other", Role::Teacher));
    assert_eq!(graph, before);
    assert_eq!(graph.user(&id("A")).unwrap().name, "User A");
}

#[test]
fn test_duplicate_follow_rejected() {
    let mut graph = build(&["A", "B"], &[("A", "B")]);

    assert!(!graph.add_follow(&id("A"), &id("B")));
    assert_eq!(graph.following(&id("A")), ids(&["B"]).as_slice());
    assert_eq!(graph.in_degree(&id("B")), 1);
}

#[rstest]
#[case::unknown_from("Z", "A")]
#[case::unknown_to("A", "Z")]
#[case::both_unknown("Y", "Z")]
#[case::duplicate("A", "B")]
fn test_rejected_add_follow_leaves_graph_unchanged(#[case] from: &str, #[case] to: &str) {
    let mut graph = build(&["A", "B"], &[("A", "B")]);
    let before = graph.clone();

    assert!(!graph.add_follow(&id(from), &id(to)));
    assert_eq!(graph, before);
}

#[rstest]
#[case::unknown_from("Z", "A")]
#[case::unknown_to("A", "Z")]
#[case::missing_follow("B", "A")]
fn test_rejected_remove_follow_leaves_graph_unchanged(#[case] from: &str, #[case] to: &str) {
    let mut graph = build(&["A", "B"], &[("A", "B")]);
    let before = graph.clone();

    assert!(!graph.remove_follow(&id(from), &id(to)));
    assert_eq!(graph, before);
}

#[test]
fn test_rejected_remove_and_update_leave_graph_unchanged() {
    let mut graph = build(&["A", "B"], &[("A", "B")]);
    let before = graph.clone();

    assert!(!graph.remove_user(&id("Z")));
    assert!(!graph.update_user(&id("Z"), Some("Zed"), Some(Role::Graduate)));
    assert_eq!(graph, before);
}

#[test]
fn test_remove_follow() {
    let mut graph = build(&["A", "B"], &[("A", "B")]);

    assert!(graph.remove_follow(&id("A"), &id("B")));
    assert_eq!(graph.out_degree(&id("A")), 0);
    assert_eq!(graph.in_degree(&id("B")), 0);
    assert!(!graph.remove_follow(&id("A"), &id("B")));
}

#[test]
fn test_self_follow_allowed_by_default() {
    let mut graph = build(&["A"], &[]);

    assert!(graph.add_follow(&id("A"), &id("A")));
    assert!(!graph.add_follow(&id("A"), &id("A")));
    assert_eq!(graph.in_degree(&id("A")), 1);
    assert_eq!(graph.out_degree(&id("A")), 1);
    assert!(graph.dfs_full().cycle_detected);
}

#[test]
fn test_self_follow_rejected_by_policy() {
    let mut graph = GraphEngine::with_policy(SelfFollowPolicy::Reject);
    graph.add_user("A", "Ana", Role::Student);
    let before = graph.clone();

    assert!(!graph.add_follow(&id("A"), &id("A")));
    assert_eq!(graph, before);
}

#[rstest]
#[case::name_only(Some("Ana Maria"), None, "Ana Maria", Role::Student)]
#[case::role_only(None, Some(Role::Graduate), "Ana", Role::Graduate)]
#[case::both(Some("Annie"), Some(Role::Teacher), "Annie", Role::Teacher)]
#[case::empty_name_ignored(Some(""), None, "Ana", Role::Student)]
#[case::nothing(None, None, "Ana", Role::Student)]
fn test_update_user(
    #[case] name: Option<&str>,
    #[case] role: Option<Role>,
    #[case] expected_name: &str,
    #[case] expected_role: Role,
) {
    let mut graph = GraphEngine::new();
    graph.add_user("A", "Ana", Role::Student);

    assert!(graph.update_user(&id("A"), name, role));

    let user = graph.user(&id("A")).unwrap();
    assert_eq!(user.id, id("A"));
    assert_eq!(user.name, expected_name);
    assert_eq!(user.role, expected_role);
}

#[test]
fn test_ids_are_case_sensitive() {
    let mut graph = GraphEngine::new();
    assert!(graph.add_user("a", "lower", Role::Student));
    assert!(graph.add_user("A", "upper", Role::Student));
    assert_eq!(graph.user_count(), 2);
}

// ========== Removed and Unknown Users ==========

#[rstest]
fn test_queries_on_removed_user(mut chain: GraphEngine) {
    assert!(chain.remove_user(&id("B")));

    assert_eq!(chain.in_degree(&id("B")), 0);
    assert_eq!(chain.out_degree(&id("B")), 0);
    assert!(chain.following(&id("B")).is_empty());
    assert!(chain.user(&id("B")).is_none());
    assert_eq!(chain.bfs(&id("B")).reachable, 0);
    assert!(chain.bfs(&id("B")).order.is_empty());
    assert_eq!(chain.bfs(&id("A")).order, ids(&["A"]));
}

#[test]
fn test_add_then_remove_restores_counts() {
    let mut graph = build(&["A", "B"], &[("A", "B")]);
    let (users, follows) = (graph.user_count(), graph.follow_count());

    assert!(graph.add_user("X", "Temp", Role::Teacher));
    assert!(graph.add_follow(&id("X"), &id("A")));
    assert!(graph.add_follow(&id("B"), &id("X")));
    assert!(graph.remove_user(&id("X")));

    assert_eq!((graph.user_count(), graph.follow_count()), (users, follows));
    assert_eq!(graph.in_degree(&id("A")), 0);
}

// ========== Traversal ==========

#[test]
fn test_bfs_visits_neighbors_in_follow_order() {
    let graph = build(
        &["A", "B", "C", "D", "E"],
        &[("A", "C"), ("A", "B"), ("C", "E"), ("B", "D")],
    );
    assert_eq!(graph.bfs(&id("A")).order, ids(&["A", "C", "B", "E", "D"]));
}

#[test]
fn test_dfs_roots_follow_insertion_order() {
    // D is inserted first, so it roots the first tree
    let graph = build(&["D", "A", "B"], &[("A", "B"), ("B", "D")]);
    let result = graph.dfs_full();

    assert_eq!(result.order, ids(&["D", "A", "B"]));
    assert!(!result.cycle_detected);
}

#[test]
fn test_dfs_diamond_is_acyclic() {
    let graph = build(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let result = graph.dfs_full();

    assert_eq!(result.order, ids(&["A", "B", "D", "C"]));
    assert!(!result.cycle_detected);
}

#[test]
fn test_dfs_empty_graph() {
    let result = GraphEngine::new().dfs_full();
    assert!(result.order.is_empty());
    assert!(!result.cycle_detected);
}

#[rstest]
#[case::chain(&[("A", "B"), ("B", "C")])]
#[case::triangle(&[("A", "B"), ("B", "C"), ("C", "A")])]
#[case::back_to_root(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")])]
#[case::two_trees(&[("A", "B"), ("C", "D"), ("D", "B")])]
#[case::self_follow(&[("C", "C")])]
fn test_cycle_flag_agrees_with_petgraph(#[case] follows: &[(&str, &str)]) {
    let graph = build(&["A", "B", "C", "D"], follows);
    assert_eq!(
        graph.dfs_full().cycle_detected,
        is_cyclic_directed(&graph.to_digraph())
    );
}

#[rstest]
#[case("A", "D", true)]
#[case("D", "A", false)]
#[case("B", "B", true)]
#[case("A", "Z", false)]
#[case("Z", "A", false)]
fn test_is_reachable(chain: GraphEngine, #[case] from: &str, #[case] to: &str, #[case] expected: bool) {
    assert_eq!(chain.is_reachable(&id(from), &id(to)), expected);
}

// ========== Rankings ==========

#[test]
fn test_rankings_on_empty_graph() {
    let graph = GraphEngine::new();
    assert!(graph.users_without_followers().is_empty());
    assert!(graph.most_influential().is_empty());
    assert!(graph.most_active().is_empty());
}

#[rstest]
fn test_rankings_on_chain(chain: GraphEngine) {
    assert_eq!(chain.users_without_followers(), ids(&["A"]));
    assert_eq!(chain.most_influential(), ids(&["B", "C", "D"]));
    assert_eq!(chain.most_active(), ids(&["A", "B", "C"]));
}

#[test]
fn test_rankings_without_follows_include_everyone() {
    let graph = build(&["A", "B"], &[]);
    assert_eq!(graph.users_without_followers(), ids(&["A", "B"]));
    assert_eq!(graph.most_influential(), ids(&["A", "B"]));
    assert_eq!(graph.most_active(), ids(&["A", "B"]));
}

// ========== Rendering and Totals ==========

#[test]
fn test_adjacency_text_sorted_by_id() {
    let graph = build(&["C", "A", "B"], &[("C", "B"), ("C", "A"), ("A", "C")]);
    assert_eq!(graph.adjacency_text(), "A -> C\nB -> -\nC -> B, A");
}

#[test]
fn test_adjacency_text_empty() {
    assert_eq!(GraphEngine::new().adjacency_text(), "");
}

#[rstest]
fn test_degree_sums_equal_follow_count(triangle: GraphEngine) {
    let (in_sum, out_sum) = degree_sums(&triangle);
    assert_eq!(in_sum, 3);
    assert_eq!(out_sum, 3);
    assert_eq!(triangle.follow_count(), 3);
}
