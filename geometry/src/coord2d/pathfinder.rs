//! Pathfinding in two dimensions using A*
use searcher::{AStar, Route, SearchError, SearchOptions, SearchResult, Successors};
use thiserror::Error;
use tracing::{debug, warn};

use super::adjacency::Adjacency;
pub use super::map::Map;
pub use super::path::{Path, PathError};
use super::Point;

#[derive(Debug, Error)]
pub enum PathfinderError {
    #[error("Search stopped early")]
    Search(#[from] SearchError),

    #[error("Search returned a broken route")]
    BrokenRoute(#[from] PathError),
}

/// Lists the traversable neighbours of a point on a map.
#[derive(Debug, Clone, Copy)]
pub struct Walkable<'m, M> {
    map: &'m M,
    adjacency: Adjacency,
}

impl<'m, M> Walkable<'m, M> {
    pub fn new(map: &'m M, adjacency: Adjacency) -> Self {
        Self { map, adjacency }
    }
}

impl<'m, M> Successors<Point> for Walkable<'m, M>
where
    M: Map,
{
    fn successors(&self, position: &Point) -> Vec<Point> {
        self.adjacency
            .neighbors(*position)
            .into_iter()
            .filter(|p| self.map.is_traversable(*p))
            .collect()
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
    adjacency: Adjacency,
    options: SearchOptions,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self {
            map,
            adjacency: Adjacency::default(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the search and return the raw route.
    ///
    /// The route always exists: when the destination can't be reached
    /// it ends at the last point the search expanded instead. Nothing
    /// is checked about the origin.
    pub fn route(&self, origin: Point, destination: Point) -> SearchResult<Route<Point>> {
        let walkable = Walkable::new(self.map, self.adjacency);
        let heuristic = self.adjacency.heuristic();

        AStar::new(&walkable, &heuristic)
            .with_options(self.options.clone())
            .find_path(origin, destination)
    }

    /// Find a path between the origin and destination given.
    ///
    /// Returns `Ok(None)` when the origin is blocked or the
    /// search is exhausted without reaching the destination.
    pub fn try_find_path(
        &self,
        origin: Point,
        destination: Point,
    ) -> Result<Option<Path>, PathfinderError> {
        if !self.map.is_traversable(origin) {
            debug!(%origin, "origin is not traversable");
            return Ok(None);
        }

        let route = self.route(origin, destination)?;
        Ok(Path::from_route(route)?)
    }

    /// Find a path between the origin and destination given.
    ///
    /// When no path exists, or the search fails, return None.
    /// Failures are logged.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Path> {
        self.try_find_path(origin, destination)
            .map_err(|error| warn!(%origin, %destination, %error, "pathfinding failed"))
            .ok()
            .flatten()
    }
}
