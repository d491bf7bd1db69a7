//! Provides the building blocks for the A* search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{Result, SearchError};

pub(crate) mod astar;
pub(crate) mod open;
pub(crate) mod visited;

/// How a successor is handled when it is already waiting
/// in the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relaxation {
    /// Only accept a new predecessor when it strictly improves the
    /// cost to reach the successor, and re-queue the successor at
    /// its improved cost. Produces shortest paths with an admissible
    /// and consistent heuristic.
    #[default]
    DecreaseKey,

    /// Always remember the latest predecessor, but never update the
    /// cost of a successor which is already open.
    ///
    /// This reproduces the legacy dungeon navigation behavior. The
    /// recorded predecessor can point along a longer path than the
    /// cost the successor was queued with, so returned paths are
    /// connected but not always shortest.
    Overwrite,
}

/// A flag which can be shared with another thread to stop
/// a running search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask any search holding this token to stop at its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for a search.
///
/// The default configuration places no limits on the search,
/// and uses [Relaxation::DecreaseKey].
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    step_limit: Option<usize>,
    time_limit: Option<Duration>,
    cancel: Option<CancelToken>,
    relaxation: Relaxation,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop with [SearchError::StepLimitExhausted] once more than
    /// `limit` nodes have been taken from the open set.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Stop with [SearchError::TimeLimitExhausted] once the search
    /// has run for longer than `limit`.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stop with [SearchError::Cancelled] once the token is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn relaxation(&self) -> Relaxation {
        self.relaxation
    }

    /// Start counting against these limits.
    fn budget(&self) -> Budget<'_> {
        Budget {
            current: 0,
            maximum: self.step_limit,
            started: Instant::now(),
            time_limit: self.time_limit,
            cancel: self.cancel.as_ref(),
        }
    }
}

/// Tracks the limits of a single running search.
#[derive(Debug)]
struct Budget<'o> {
    current: usize,
    maximum: Option<usize>,
    started: Instant,
    time_limit: Option<Duration>,
    cancel: Option<&'o CancelToken>,
}

impl<'o> Budget<'o> {
    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if let Some(maximum) = self.maximum {
            if self.current > maximum {
                return Err(SearchError::StepLimitExhausted(maximum));
            }
        }

        if let Some(limit) = self.time_limit {
            let elapsed = self.started.elapsed();
            if elapsed > limit {
                return Err(SearchError::TimeLimitExhausted(elapsed));
            }
        }

        if self.cancel.map(|c| c.is_cancelled()).unwrap_or(false) {
            return Err(SearchError::Cancelled(self.current - 1));
        }

        Ok(())
    }

    fn steps(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unlimited() {
        let options = SearchOptions::default();
        let mut budget = options.budget();
        for _ in 0..100_000 {
            budget.increment().unwrap();
        }
        assert_eq!(budget.steps(), 100_000);
    }

    #[test]
    fn step_limit() {
        let options = SearchOptions::new().with_step_limit(3);
        let mut budget = options.budget();
        for _ in 0..3 {
            budget.increment().unwrap();
        }
        assert_eq!(
            budget.increment(),
            Err(SearchError::StepLimitExhausted(3))
        );
    }

    #[test]
    fn time_limit() {
        let options = SearchOptions::new().with_time_limit(Duration::from_millis(0));
        let mut budget = options.budget();
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(
            budget.increment(),
            Err(SearchError::TimeLimitExhausted(_))
        ));
    }

    #[test]
    fn cancel() {
        let token = CancelToken::new();
        let options = SearchOptions::new().with_cancel(token.clone());
        let mut budget = options.budget();

        budget.increment().unwrap();
        budget.increment().unwrap();
        token.cancel();
        assert_eq!(budget.increment(), Err(SearchError::Cancelled(2)));
    }
}
