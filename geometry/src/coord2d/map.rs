//! Walkability of squares on a grid.
use std::fmt;

use super::path::Path;
use super::pathfinder::Pathfinder;
use super::Point;

/// Anything which can say whether a square can be stood on.
///
/// How the squares are stored is up to the implementor. A map should
/// be bounded: on an endless open map, a search for an unreachable
/// destination never runs out of squares to try.
pub trait Map: Sized + fmt::Debug {
    fn is_traversable(&self, location: Point) -> bool;

    /// Build a re-usable pathfinder for this map
    fn pathfinder(&self) -> Pathfinder<Self> {
        Pathfinder::new(self)
    }

    /// Shortest orthogonal path on this map, if there is one.
    fn path(&self, origin: Point, destination: Point) -> Option<Path> {
        self.pathfinder().find_path(origin, destination)
    }
}
