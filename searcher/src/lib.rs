//! Uninformed graph-search strategies, compared over a weighted road map.
//!
//! Four classic strategies run against the same [Graph] and query:
//! breadth-first ([bfs]), depth-first ([dfs]), uniform-cost ([ucs]) and
//! iterative-deepening depth-first search ([iddfs]). Each produces a
//! [SearchReport] describing the path it found and the work it took to
//! find it, and [run_all] collects all four for side-by-side comparison.

pub mod algorithm;
mod compare;
mod errors;
pub mod graph;
mod report;

pub use compare::run_all;
pub use compare::Algorithm;
pub use errors::Result;
pub use errors::SearchError;
pub use graph::Graph;
pub use graph::Path;
pub use report::Expanded;
pub use report::SearchReport;

pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::iddfs::iddfs;
pub use algorithm::ucs::ucs;
