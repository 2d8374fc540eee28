use thiserror::Error;

/// Error produced when a search cannot begin.
///
/// Failing to find a path is not an error: an unreachable goal is a
/// normal outcome, reported as data in the search report, so that all
/// four strategies can be compared even when some of them come up empty.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0} is not a node in the graph")]
    UnknownNode(String),

    #[error("depth bound must not be negative, got {0}")]
    InvalidDepthBound(i64),
}

/// Result when starting a search might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
