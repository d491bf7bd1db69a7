//! The result of a search.

use crate::algorithm::visited::Predecessors;
use crate::node::{Cost, Node};
use crate::traits::Position;

/// How a search came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was taken from the open set.
    GoalReached,

    /// The open set ran dry before the goal was found. The route
    /// ends at the last node which was expanded.
    Exhausted,
}

/// A route reconstructed from the search, running backwards from
/// the terminal node to the start.
///
/// A route always contains at least one node. When the goal could not
/// be reached, the terminal node is the last node the search expanded,
/// so callers which only look at the nodes must compare the terminal
/// against the goal. [Route::reached_goal] and [Route::into_path] make
/// that check explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<P> {
    steps: Vec<Node<P>>,
    outcome: Outcome,
    expanded: usize,
}

impl<P> Route<P>
where
    P: Position,
{
    /// Walk backwards from the terminal node until reaching a node with
    /// no predecessor.
    pub(crate) fn reconstruct(
        terminal: Node<P>,
        came_from: &Predecessors<P>,
        outcome: Outcome,
        expanded: usize,
    ) -> Self {
        let mut steps = vec![terminal];

        while let Some(previous) = steps.last().and_then(|n| came_from.get(n.position())) {
            steps.push(previous.clone());
        }

        Self {
            steps,
            outcome,
            expanded,
        }
    }
}

impl<P> Route<P> {

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn reached_goal(&self) -> bool {
        self.outcome == Outcome::GoalReached
    }

    /// Where the search stopped: the goal, or the fallback node.
    pub fn terminal(&self) -> &Node<P> {
        &self.steps[0]
    }

    /// Where the search began.
    pub fn start(&self) -> &Node<P> {
        &self.steps[self.steps.len() - 1]
    }

    /// Nodes from the terminal back to the start.
    pub fn nodes(&self) -> &[Node<P>] {
        &self.steps
    }

    /// Nodes from the start to the terminal, in travel order.
    pub fn forward(&self) -> impl Iterator<Item = &Node<P>> {
        self.steps.iter().rev()
    }

    /// Number of steps along this route.
    pub fn distance(&self) -> Cost {
        self.steps.len() - 1
    }

    /// Number of nodes which were expanded to find this route.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn into_nodes(self) -> Vec<Node<P>> {
        self.steps
    }

    /// Positions from start to goal, or `None` when the goal
    /// was never reached.
    pub fn into_path(self) -> Option<Vec<P>> {
        if !self.reached_goal() {
            return None;
        }

        Some(
            self.steps
                .into_iter()
                .rev()
                .map(|n| n.into_position())
                .collect(),
        )
    }
}
