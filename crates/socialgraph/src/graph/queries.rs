//! Degree-based rankings.

use crate::domain::UserId;
use indexmap::IndexMap;

/// Users whose follower count is zero, in collection order.
pub(super) fn users_without_followers(in_degree: &IndexMap<UserId, usize>) -> Vec<UserId> {
    in_degree
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Every user attaining the maximum degree, in iteration order.
///
/// Ties are all kept. No users means no maximum, so the result is empty.
pub(super) fn top_by_degree<'a>(degrees: impl Iterator<Item = (&'a UserId, usize)>) -> Vec<UserId> {
    let degrees: Vec<(&UserId, usize)> = degrees.collect();
    let Some(max) = degrees.iter().map(|(_, degree)| *degree).max() else {
        return Vec::new();
    };

    degrees
        .into_iter()
        .filter(|(_, degree)| *degree == max)
        .map(|(id, _)| id.clone())
        .collect()
}
