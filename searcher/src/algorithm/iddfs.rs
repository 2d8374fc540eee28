//! Iterative-deepening depth-first search.

use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::ensure_member;
use crate::errors::Result;
use crate::graph::{Graph, Path};
use crate::report::{Expanded, SearchReport};

/// Iterative-deepening depth-first search, bounded by `max_depth`.
///
/// Probes a depth-limited search at every budget from zero to
/// `max_depth` inclusive and returns the first hit together with the
/// depth that produced it. A probe accepts the goal only when its
/// budget is spent exactly, so the sweep stops at the smallest depth
/// where a path of exactly that many edges exists; a goal nearer than
/// the current probe is picked up by the earlier, shallower probe, not
/// by the current one.
pub fn iddfs<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    max_depth: usize,
) -> Result<SearchReport<N>>
where
    N: Debug + Clone + Hash + Eq,
{
    ensure_member(graph, start)?;
    ensure_member(graph, goal)?;

    for depth in 0..=max_depth {
        let mut branch = vec![start.clone()];
        if descend(graph, goal, depth, &mut branch) {
            return Ok(SearchReport {
                path: Some(Path::new(branch)),
                cost: None,
                expanded: Expanded::Depth(depth),
            });
        }
    }

    Ok(SearchReport {
        path: None,
        cost: None,
        expanded: Expanded::Depth(max_depth),
    })
}

/// Depth-limited search below the last node of `branch`.
///
/// `branch` holds the nodes from the start down to the current node and
/// doubles as the visited set for this branch alone; siblings explored
/// after backtracking are free to revisit nodes this branch released.
/// On success `branch` holds the complete path.
fn descend<N>(graph: &Graph<N>, goal: &N, remaining: usize, branch: &mut Vec<N>) -> bool
where
    N: Debug + Clone + Hash + Eq,
{
    let node = branch.last().expect("branch always holds its origin").clone();
    if remaining == 0 {
        return node == *goal;
    }

    for (neighbor, _) in graph.neighbors(&node) {
        if branch.contains(neighbor) {
            continue;
        }
        branch.push(neighbor.clone());
        if descend(graph, goal, remaining - 1, branch) {
            return true;
        }
        branch.pop();
    }

    false
}
