use std::time;
use thiserror::Error;

/// Error produced when a search is stopped before it
/// could finish.
///
/// An unreachable goal is not an error: the search still
/// returns a [crate::Route], which ends somewhere else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),

    #[error("Search cancelled after {0} steps")]
    Cancelled(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
