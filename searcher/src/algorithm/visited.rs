//! Bookkeeping for positions the search has already seen.

use std::collections::{HashMap, HashSet};

use crate::node::Node;
use crate::traits::Position;

/// Positions which have been expanded and are final.
#[derive(Debug)]
pub(crate) struct ClosedSet<P>
where
    P: Position,
{
    closed: HashSet<P>,
}

impl<P> Default for ClosedSet<P>
where
    P: Position,
{
    fn default() -> Self {
        ClosedSet {
            closed: HashSet::new(),
        }
    }
}

impl<P> ClosedSet<P>
where
    P: Position,
{
    pub(crate) fn close(&mut self, position: P) -> bool {
        self.closed.insert(position)
    }

    pub(crate) fn contains(&self, position: &P) -> bool {
        self.closed.contains(position)
    }

    pub(crate) fn len(&self) -> usize {
        self.closed.len()
    }
}

/// Records, for each reached position, the node it was reached from.
///
/// The starting position never has an entry.
#[derive(Debug)]
pub(crate) struct Predecessors<P>
where
    P: Position,
{
    came_from: HashMap<P, Node<P>>,
}

impl<P> Default for Predecessors<P>
where
    P: Position,
{
    fn default() -> Self {
        Predecessors {
            came_from: HashMap::new(),
        }
    }
}

impl<P> Predecessors<P>
where
    P: Position,
{
    /// Remember that `position` was reached from `from`,
    /// replacing any earlier record.
    pub(crate) fn record(&mut self, position: P, from: &Node<P>) {
        self.came_from.insert(position, from.clone());
    }

    pub(crate) fn get(&self, position: &P) -> Option<&Node<P>> {
        self.came_from.get(position)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closed() {
        let mut closed = ClosedSet::default();
        assert!(closed.close((1, 1)));
        assert!(!closed.close((1, 1)));
        assert!(closed.contains(&(1, 1)));
        assert!(!closed.contains(&(1, 2)));
        assert_eq!(closed.len(), 1);
    }

    #[test]
    fn record_overwrites() {
        let mut came_from = Predecessors::default();
        came_from.record('x', &Node::new('a', 1, 1));
        came_from.record('x', &Node::new('b', 4, 4));
        assert_eq!(came_from.get(&'x').map(|n| *n.position()), Some('b'));
    }
}
