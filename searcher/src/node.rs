//! Search nodes: a position plus the costs known about it.

use std::hash::{Hash, Hasher};

/// Data type used for path costs.
///
/// Every step costs exactly one, so costs are step counts.
pub type Cost = usize;

/// A position visited by the search, along with its costs.
///
/// Two nodes are the same node when they share a position,
/// regardless of the costs attached to them.
#[derive(Debug, Clone)]
pub struct Node<P> {
    position: P,
    g: Cost,
    f: Cost,
}

impl<P> Node<P> {
    pub(crate) fn new(position: P, g: Cost, f: Cost) -> Self {
        Self { position, g, f }
    }

    /// The starting node has no cost and no estimate.
    pub(crate) fn start(position: P) -> Self {
        Self::new(position, 0, 0)
    }

    /// Where this node is.
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Cost from the start to this node along the best path known
    /// when the node was queued.
    pub fn g(&self) -> Cost {
        self.g
    }

    /// Estimated total cost of a path through this node.
    pub fn f(&self) -> Cost {
        self.f
    }

    pub fn into_position(self) -> P {
        self.position
    }
}

impl<P> PartialEq for Node<P>
where
    P: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.position.eq(&other.position)
    }
}

impl<P> Eq for Node<P> where P: Eq {}

impl<P> Hash for Node<P>
where
    P: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_costs() {
        let a = Node::new((1, 2), 3, 7);
        let b = Node::new((1, 2), 0, 0);
        let c = Node::new((2, 1), 3, 7);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut seen = HashSet::new();
        assert!(seen.insert(a));
        assert!(!seen.insert(b));
        assert!(seen.insert(c));
    }

    #[test]
    fn start() {
        let node = Node::start("entrance");
        assert_eq!(node.g(), 0);
        assert_eq!(node.f(), 0);
        assert_eq!(node.into_position(), "entrance");
    }
}
