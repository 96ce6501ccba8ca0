//! Breadth-first reachability with visited-set semantics.
//!
//! A node is marked visited when enqueued, never when dequeued, so every node
//! enters the queue at most once. Traversal is O(V+E) and terminates on
//! cyclic graphs.

use std::collections::VecDeque;

use petgraph::Direction;
use rustc_hash::FxHashSet;

use crate::graph::AdjacencyIndex;

/// Every id reachable from `starts` in `direction`, starts included.
pub fn reach<I, S>(starts: I, adjacency: &AdjacencyIndex, direction: Direction) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    reach_within(starts, adjacency, direction, |_| true)
}

/// Like [`reach`], but only enters nodes accepted by `admit`.
///
/// Starts are included only when admitted too, so the result always lies
/// inside the admitted subgraph.
pub fn reach_within<I, S, F>(
    starts: I,
    adjacency: &AdjacencyIndex,
    direction: Direction,
    admit: F,
) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    for start in starts {
        let start = start.as_ref();
        if admit(start) && visited.insert(start.to_string()) {
            queue.push_back(start.to_string());
        }
    }

    while let Some(current) = queue.pop_front() {
        for next in adjacency.neighbors(&current, direction) {
            if !visited.contains(next.as_str()) && admit(next.as_str()) {
                visited.insert(next.clone());
                queue.push_back(next.clone());
            }
        }
    }

    visited
}
