//! Validated paths across a grid.

use searcher::Route;
use thiserror::Error;

use super::Point;

/// Error returned for invalid paths
#[derive(Debug, Error)]
pub enum PathError {
    /// A new step added to this path was not a single
    /// step away from the end of the path.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Point, Point),

    #[error("A path must contain at least one point")]
    Empty,
}

type PathResult<T> = Result<T, PathError>;

/// Squares visited in order, each a single step (orthogonal
/// or diagonal) from the one before.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    /// A path which starts, and so far ends, at `origin`.
    pub fn new(origin: Point) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Construct a path from a sequence of points, checking
    /// that each point follows on from the last.
    pub fn from_points(points: Vec<Point>) -> PathResult<Self> {
        let mut points = points.into_iter();
        let mut path = Path::new(points.next().ok_or(PathError::Empty)?);
        for point in points {
            path = path.step_to(point)?;
        }
        Ok(path)
    }

    /// The path a search found, or `None` if it never reached
    /// its goal. A route which skips squares is an error.
    pub fn from_route(route: Route<Point>) -> PathResult<Option<Self>> {
        route.into_path().map(Path::from_points).transpose()
    }

    /// Extend the path by one step to `point`.
    pub fn step_to(mut self, point: Point) -> PathResult<Self> {
        if !point.is_touching(self.destination()) {
            return Err(PathError::NotAdjacentSequence(point, *self.destination()));
        }

        self.steps.push(point);
        Ok(self)
    }

    pub fn origin(&self) -> &Point {
        &self.steps[0]
    }

    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// Number of steps taken.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    /// Iterate over the points in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.steps.iter()
    }
}
