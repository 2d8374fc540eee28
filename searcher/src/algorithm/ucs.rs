//! Uniform-cost search: cheapest accumulated distance first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{ensure_member, traverse, Entry, Frontier};
use crate::errors::Result;
use crate::graph::Graph;
use crate::report::{Expanded, SearchReport};

/// Heap ordering for the cost frontier: cheapest accumulated cost
/// first, and among equal costs the entry enqueued earliest. Arena ids
/// increase in push order, so they double as the insertion sequence and
/// make the tie-break part of the key instead of a heap accident.
#[derive(Debug)]
struct CostOrdered {
    entry: Entry,
}

impl CostOrdered {
    fn key(&self) -> (u32, usize) {
        (self.entry.cost, self.entry.id)
    }
}

impl PartialEq for CostOrdered {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl Eq for CostOrdered {}

impl Ord for CostOrdered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl PartialOrd for CostOrdered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority frontier which always surfaces the cheapest partial path,
/// breaking cost ties in favor of the oldest entry.
#[derive(Debug, Default)]
pub struct CostFrontier {
    queue: BinaryHeap<CostOrdered>,
}

impl Frontier for CostFrontier {
    fn push(&mut self, entry: Entry) {
        self.queue.push(CostOrdered { entry });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop().map(|c| c.entry)
    }
}

/// Uniform-cost search.
///
/// Expands the frontier entry with the least accumulated edge weight,
/// so with non-negative weights the first path to reach the goal is a
/// minimum-cost path. Already-visited neighbors are still enqueued;
/// their stale entries are discarded when they surface, which leaves
/// the pop order and the visit order unchanged.
pub fn ucs<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<SearchReport<N>>
where
    N: Debug + Clone + Hash + Eq,
{
    ensure_member(graph, start)?;
    ensure_member(graph, goal)?;

    let traversal = traverse::<_, CostFrontier>(graph, start, goal);
    let cost = if traversal.path.is_some() {
        Some(traversal.cost)
    } else {
        None
    };
    Ok(SearchReport {
        path: traversal.path,
        cost,
        expanded: Expanded::Nodes(traversal.expanded),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::report::Expanded;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("A", "B", 10);
        g.add_edge("B", "C", 10);
        g.add_edge("A", "C", 30);
        g
    }

    #[test]
    fn ucs_minimizes_weight_not_edge_count() {
        let report = ucs(&triangle(), &"A", &"C").unwrap();
        let path = report.path.unwrap();
        assert_eq!(path.nodes(), &["A", "B", "C"]);
        assert_eq!(report.cost, Some(20));
        assert_eq!(report.expanded, Expanded::Nodes(2));
    }

    #[test]
    fn equal_costs_break_ties_by_insertion_order() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("A", "C", 1);
        g.add_edge("B", "D", 1);
        g.add_edge("C", "D", 1);

        // Both A-B-D and A-C-D cost 2; the B branch entered the
        // frontier first and must win.
        let report = ucs(&g, &"A", &"D").unwrap();
        assert_eq!(report.path.unwrap().nodes(), &["A", "B", "D"]);
        assert_eq!(report.cost, Some(2));
        assert_eq!(report.expanded, Expanded::Nodes(3));
    }

    #[test]
    fn ucs_start_equals_goal_costs_nothing() {
        let report = ucs(&triangle(), &"C", &"C").unwrap();
        assert_eq!(report.path.as_ref().unwrap().nodes(), &["C"]);
        assert_eq!(report.cost, Some(0));
        assert_eq!(report.steps(), Some(0));
        assert_eq!(report.expanded, Expanded::Nodes(0));
    }

    #[test]
    fn ucs_reports_unreachable_goal_as_data() {
        let mut g = triangle();
        g.add_node("Z");
        let report = ucs(&g, &"A", &"Z").unwrap();
        assert!(!report.found());
        assert_eq!(report.cost, None);
        assert_eq!(report.expanded, Expanded::Nodes(3));
    }

    #[test]
    fn ucs_is_deterministic() {
        let g = triangle();
        let first = ucs(&g, &"A", &"C").unwrap();
        let second = ucs(&g, &"A", &"C").unwrap();
        assert_eq!(first, second);
    }
}
