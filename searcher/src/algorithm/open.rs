//! The open set: nodes waiting to be expanded, cheapest estimate first.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, HashMap};

use crate::node::{Cost, Node};
use crate::traits::Position;

/// Wrapper for nodes which sorts appropriately for A*:
/// lowest estimated total cost first, then first in, first out.
#[derive(Debug)]
struct Estimate<P> {
    node: Node<P>,
    sequence: usize,
}

impl<P> PartialEq for Estimate<P> {
    fn eq(&self, other: &Self) -> bool {
        self.node.f() == other.node.f() && self.sequence == other.sequence
    }
}

impl<P> Eq for Estimate<P> {}

impl<P> Ord for Estimate<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .f()
            .cmp(&other.node.f())
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<P> PartialOrd for Estimate<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue of open nodes, keyed by position.
///
/// The heap never updates an entry in place. When a cheaper path to an
/// open position is pushed, the older entry stays in the heap and is
/// dropped when it surfaces.
#[derive(Debug)]
pub(crate) struct OpenSet<P>
where
    P: Position,
{
    queue: BinaryHeap<Estimate<P>>,
    open: HashMap<P, Cost>,
    sequence: usize,
}

impl<P> Default for OpenSet<P>
where
    P: Position,
{
    fn default() -> Self {
        OpenSet {
            queue: BinaryHeap::new(),
            open: HashMap::new(),
            sequence: 0,
        }
    }
}

impl<P> OpenSet<P>
where
    P: Position,
{
    /// Queue a node. If the position is already open, the
    /// cost recorded for it is replaced.
    pub(crate) fn push(&mut self, node: Node<P>) {
        self.open.insert(node.position().clone(), node.g());
        self.queue.push(Estimate {
            node,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Remove the open node with the lowest estimate.
    pub(crate) fn pop(&mut self) -> Option<Node<P>> {
        while let Some(Estimate { node, .. }) = self.queue.pop() {
            match self.open.get(node.position()).copied() {
                Some(g) if g == node.g() => {
                    self.open.remove(node.position());
                    return Some(node);
                }
                // Superseded by a cheaper entry, or already taken.
                _ => continue,
            }
        }
        None
    }

    pub(crate) fn contains(&self, position: &P) -> bool {
        self.open.contains_key(position)
    }

    /// Cost of the best path queued for this position, if it is open.
    pub(crate) fn cost(&self, position: &P) -> Option<Cost> {
        self.open.get(position).copied()
    }

    /// Number of distinct open positions.
    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }
}
