use std::fmt::Debug;
use std::hash::Hash;

use crate::node::Cost;

/// Positions which the search algorithm can visit.
///
/// A position is the identity of a node, so it must be hashable
/// and comparable. Positions are copied freely into the open set,
/// the closed set and the predecessor map.
pub trait Position: Debug + Clone + Eq + Hash {}

impl<T> Position for T where T: Debug + Clone + Eq + Hash {}

/// Produces every position reachable in a single unit step.
///
/// The search treats this as a black box. Adjacency rules,
/// obstacles and bounds are all the responsibility of the
/// implementor.
pub trait Successors<P> {
    fn successors(&self, position: &P) -> Vec<P>;
}

impl<P, F, I> Successors<P> for F
where
    F: Fn(&P) -> I,
    I: IntoIterator<Item = P>,
{
    fn successors(&self, position: &P) -> Vec<P> {
        self(position).into_iter().collect()
    }
}

/// Estimates the remaining cost from a position to the goal.
///
/// For the returned path to be a shortest path, the estimate must
/// never exceed the true remaining cost (admissible). Nodes are
/// never re-opened once closed, so the estimate should also be
/// consistent: it may drop by at most one per step.
pub trait Heuristic<P> {
    fn estimate(&self, position: &P, goal: &P) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    F: Fn(&P, &P) -> Cost,
{
    fn estimate(&self, position: &P, goal: &P) -> Cost {
        self(position, goal)
    }
}
