//! Movement rules and distance estimates on a 2D grid.

use searcher::{Cost, Heuristic};

use super::Point;

/// Which neighbouring squares can be reached in a single step.
///
/// Every step costs the same, including diagonal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Up, down, left and right.
    #[default]
    Orthogonal,

    /// The orthogonal moves, plus the four diagonals.
    Diagonal,
}

impl Adjacency {
    /// All points a single step away from `point`.
    pub fn neighbors(self, point: Point) -> Vec<Point> {
        match self {
            Adjacency::Orthogonal => point.adjacent().collect(),
            Adjacency::Diagonal => point.adjacent_diagonal().collect(),
        }
    }

    /// The tightest admissible estimate for these movement rules.
    pub fn heuristic(self) -> Distance {
        match self {
            Adjacency::Orthogonal => Distance::Manhattan,
            Adjacency::Diagonal => Distance::Chebyshev,
        }
    }
}

/// Distance estimates between points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Manhattan,
    Chebyshev,

    /// Always zero, which turns A* into Dijkstra's algorithm.
    Zero,
}

impl Heuristic<Point> for Distance {
    fn estimate(&self, position: &Point, goal: &Point) -> Cost {
        let distance = match self {
            Distance::Manhattan => position.manhattan_distance(*goal),
            Distance::Chebyshev => position.chebyshev_distance(*goal),
            Distance::Zero => 0,
        };
        distance as Cost
    }
}
