//! Building blocks shared by the search procedures.
//!
//! Breadth-first, depth-first and uniform-cost search are one traversal
//! loop instantiated with different frontier disciplines; iterative
//! deepening lives in its own module because its frontier is the call
//! stack.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};
use crate::graph::{Graph, Path};

pub(crate) mod basic;
pub(crate) mod iddfs;
pub(crate) mod ucs;

/// A frontier entry: an index into the visit arena plus the edge weight
/// accumulated along the partial path that produced it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) id: usize,
    pub(crate) cost: u32,
}

/// Queue discipline for the traversal: FIFO for breadth-first, LIFO for
/// depth-first, cheapest-first for uniform cost.
pub(crate) trait Frontier: Default {
    fn push(&mut self, entry: Entry);

    fn pop(&mut self) -> Option<Entry>;
}

/// One node reached by the traversal, linked back to the visit it
/// extended. Paths are rebuilt by walking these links on success, so
/// frontier entries stay index-sized instead of carrying path clones.
#[derive(Debug)]
struct Visit<N> {
    node: N,
    parent: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct Traversal<N> {
    pub(crate) path: Option<Path<N>>,
    pub(crate) cost: u32,
    pub(crate) expanded: usize,
}

/// Run a search from `start` under the frontier discipline `F`.
///
/// The first entry dequeued at the goal wins, before the goal node is
/// marked visited. A node expands at most once: dequeuing it again
/// discards the entry. Children are enqueued without any visited check,
/// including back along the edge just traversed; stale entries are
/// weeded out when they surface.
pub(crate) fn traverse<N, F>(graph: &Graph<N>, start: &N, goal: &N) -> Traversal<N>
where
    N: Debug + Clone + Hash + Eq,
    F: Frontier,
{
    let mut visits = vec![Visit {
        node: start.clone(),
        parent: None,
    }];
    let mut visited: HashSet<N> = HashSet::new();
    let mut frontier = F::default();
    frontier.push(Entry { id: 0, cost: 0 });

    while let Some(entry) = frontier.pop() {
        let node = visits[entry.id].node.clone();
        if node == *goal {
            return Traversal {
                path: Some(backtrack(&visits, entry.id)),
                cost: entry.cost,
                expanded: visited.len(),
            };
        }

        if visited.insert(node.clone()) {
            for (neighbor, weight) in graph.neighbors(&node) {
                let id = visits.len();
                visits.push(Visit {
                    node: neighbor.clone(),
                    parent: Some(entry.id),
                });
                frontier.push(Entry {
                    id,
                    cost: entry.cost + weight,
                });
            }
        }
    }

    Traversal {
        path: None,
        cost: 0,
        expanded: visited.len(),
    }
}

fn backtrack<N>(visits: &[Visit<N>], id: usize) -> Path<N>
where
    N: Debug + Clone,
{
    let mut nodes = Vec::new();
    let mut cursor = Some(id);
    while let Some(i) = cursor {
        nodes.push(visits[i].node.clone());
        cursor = visits[i].parent;
    }
    nodes.reverse();
    Path::new(nodes)
}

/// Searches refuse to start from or toward a node the graph does not
/// contain; an absent node is not the same thing as an unreachable one.
pub(crate) fn ensure_member<N>(graph: &Graph<N>, node: &N) -> Result<()>
where
    N: Debug + Clone + Hash + Eq,
{
    if graph.contains(node) {
        Ok(())
    } else {
        Err(SearchError::UnknownNode(format!("{:?}", node)))
    }
}
