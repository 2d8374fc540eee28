//! Side-by-side comparison of the four search strategies.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::basic::{bfs, dfs};
use crate::algorithm::ensure_member;
use crate::algorithm::iddfs::iddfs;
use crate::algorithm::ucs::ucs;
use crate::errors::Result;
use crate::graph::Graph;
use crate::report::SearchReport;

/// The four strategies, in the order they are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Iddfs,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Iddfs => "IDDFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run all four strategies against the same query and collect their
/// reports in a fixed order: BFS, DFS, UCS, IDDFS.
///
/// Start and goal membership is checked once before any strategy runs;
/// an unknown node fails the whole comparison instead of masquerading
/// as four unreachable results. An unreachable goal, by contrast, is a
/// normal row in every report.
pub fn run_all<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    max_depth: usize,
) -> Result<Vec<(Algorithm, SearchReport<N>)>>
where
    N: Debug + Clone + Hash + Eq,
{
    ensure_member(graph, start)?;
    ensure_member(graph, goal)?;

    Ok(vec![
        (Algorithm::Bfs, bfs(graph, start, goal)?),
        (Algorithm::Dfs, dfs(graph, start, goal)?),
        (Algorithm::Ucs, ucs(graph, start, goal)?),
        (Algorithm::Iddfs, iddfs(graph, start, goal, max_depth)?),
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::report::Expanded;
    use crate::SearchError;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("A", "B", 10);
        g.add_edge("B", "C", 10);
        g.add_edge("A", "C", 30);
        g
    }

    #[test]
    fn reports_come_back_in_a_fixed_order() {
        let results = run_all(&triangle(), &"A", &"C", 5).unwrap();
        let order: Vec<Algorithm> = results.iter().map(|(a, _)| *a).collect();
        assert_eq!(
            order,
            vec![Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs, Algorithm::Iddfs]
        );
    }

    #[test]
    fn strategies_disagree_on_the_triangle() {
        let results = run_all(&triangle(), &"A", &"C", 5).unwrap();

        // BFS takes the single direct edge; UCS pays two cheap edges
        // instead of one expensive one.
        let (_, by_breadth) = &results[0];
        assert_eq!(by_breadth.steps(), Some(1));
        assert_eq!(by_breadth.cost, None);

        let (_, by_cost) = &results[2];
        assert_eq!(by_cost.path.as_ref().unwrap().nodes(), &["A", "B", "C"]);
        assert_eq!(by_cost.cost, Some(20));

        let (_, by_deepening) = &results[3];
        assert_eq!(by_deepening.expanded, Expanded::Depth(1));
    }

    #[test]
    fn unknown_start_fails_the_whole_comparison() {
        let err = run_all(&triangle(), &"Nowhere", &"C", 5).unwrap_err();
        match err {
            SearchError::UnknownNode(name) => assert!(name.contains("Nowhere")),
            other => panic!("expected UnknownNode, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_goal_is_a_row_in_every_report() {
        let mut g = triangle();
        g.add_node("Z");
        let results = run_all(&g, &"A", &"Z", 5).unwrap();
        assert_eq!(results.len(), 4);
        for (_, report) in &results {
            assert!(!report.found());
            assert_eq!(report.steps(), None);
        }
    }

    #[test]
    fn algorithm_names_render_for_display() {
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert_eq!(Algorithm::Iddfs.name(), "IDDFS");
    }
}
