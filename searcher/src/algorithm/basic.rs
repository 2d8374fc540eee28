pub use self::bfs::bfs;
pub use self::dfs::dfs;

mod bfs {
    use std::collections::VecDeque;
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::{ensure_member, traverse, Entry, Frontier};
    use crate::errors::Result;
    use crate::graph::Graph;
    use crate::report::{Expanded, SearchReport};

    /// FIFO frontier: partial paths surface in the order they were
    /// enqueued, so paths with fewer edges always surface first.
    #[derive(Debug, Default)]
    pub struct BreadthFrontier {
        queue: VecDeque<Entry>,
    }

    impl Frontier for BreadthFrontier {
        fn push(&mut self, entry: Entry) {
            self.queue.push_back(entry);
        }

        fn pop(&mut self) -> Option<Entry> {
            self.queue.pop_front()
        }
    }

    /// Breadth-first search.
    ///
    /// The returned path has the minimum number of edges over all paths
    /// connecting `start` to `goal`, regardless of their weights.
    pub fn bfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<SearchReport<N>>
    where
        N: Debug + Clone + Hash + Eq,
    {
        ensure_member(graph, start)?;
        ensure_member(graph, goal)?;

        let traversal = traverse::<_, BreadthFrontier>(graph, start, goal);
        Ok(SearchReport {
            path: traversal.path,
            cost: None,
            expanded: Expanded::Nodes(traversal.expanded),
        })
    }
}

mod dfs {
    use std::collections::VecDeque;
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::{ensure_member, traverse, Entry, Frontier};
    use crate::errors::Result;
    use crate::graph::Graph;
    use crate::report::{Expanded, SearchReport};

    /// LIFO frontier: the most recently enqueued partial path surfaces
    /// first, so each expansion dives before it widens.
    #[derive(Debug, Default)]
    pub struct DepthFrontier {
        queue: VecDeque<Entry>,
    }

    impl Frontier for DepthFrontier {
        fn push(&mut self, entry: Entry) {
            self.queue.push_front(entry);
        }

        fn pop(&mut self) -> Option<Entry> {
            self.queue.pop_front()
        }
    }

    /// Depth-first search.
    ///
    /// Returns whichever path stack-order expansion reaches first, which
    /// depends on the graph's neighbor enumeration order; no shortest-path
    /// guarantee of any kind.
    pub fn dfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<SearchReport<N>>
    where
        N: Debug + Clone + Hash + Eq,
    {
        ensure_member(graph, start)?;
        ensure_member(graph, goal)?;

        let traversal = traverse::<_, DepthFrontier>(graph, start, goal);
        Ok(SearchReport {
            path: traversal.path,
            cost: None,
            expanded: Expanded::Nodes(traversal.expanded),
        })
    }
}
