use std::fmt;

use crate::graph::Path;

/// How much work a finished search did.
///
/// Breadth-first, depth-first and uniform-cost searches count the
/// distinct nodes they marked visited; iterative deepening instead
/// reports the depth bound it probed. The two are different quantities
/// and are kept typed apart rather than folded into one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expanded {
    /// Distinct nodes dequeued and marked visited.
    Nodes(usize),
    /// Depth at which the path was found, or the exhausted bound.
    Depth(usize),
}

impl fmt::Display for Expanded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expanded::Nodes(n) => write!(f, "{}", n),
            Expanded::Depth(d) => write!(f, "depth {}", d),
        }
    }
}

/// The outcome of a single search run, immutable once produced.
///
/// `cost` is the total edge weight along `path`, and is only reported
/// by the cost-aware strategy; the others do not minimize it and leave
/// it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<N> {
    pub path: Option<Path<N>>,
    pub cost: Option<u32>,
    pub expanded: Expanded,
}

impl<N> SearchReport<N> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges along the found path, if one was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.steps())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn expanded_keeps_nodes_and_depth_apart() {
        assert_ne!(Expanded::Nodes(3), Expanded::Depth(3));
        assert_eq!(Expanded::Nodes(7).to_string(), "7");
        assert_eq!(Expanded::Depth(3).to_string(), "depth 3");
    }

    #[test]
    fn steps_track_the_path() {
        let empty: SearchReport<&str> = SearchReport {
            path: None,
            cost: None,
            expanded: Expanded::Nodes(4),
        };
        assert!(!empty.found());
        assert_eq!(empty.steps(), None);
    }
}
