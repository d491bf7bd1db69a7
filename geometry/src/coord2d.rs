//! Grid coordinates for dungeon floors.

use std::cmp;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod adjacency;
pub mod map;
pub mod path;
pub mod pathfinder;

/// One of the four orthogonal steps.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order their neighbours are searched.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Direction::Up,
            Direction::Left,
            Direction::Right,
            Direction::Down,
        ]
        .iter()
        .copied()
    }

    fn offset(self) -> (Position, Position) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A square on the dungeon floor. `y` grows downwards,
/// the same way rows do in a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// The square one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four squares sharing an edge with this one.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }

    /// The eight squares sharing an edge or a corner with this one.
    pub fn adjacent_diagonal(self) -> impl Iterator<Item = Self> {
        iproduct!(-1..2, -1..2)
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .map(move |(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }

    /// True when `point` is one king's move away.
    pub fn is_touching(&self, point: &Point) -> bool {
        self.chebyshev_distance(*point) == 1
    }

    /// Steps needed when only orthogonal moves are allowed.
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Steps needed when diagonal moves are allowed too.
    pub fn chebyshev_distance(self, other: Point) -> Position {
        cmp::max((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from((x, y): (Position, Position)) -> Self {
        Self::new(x, y)
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Accepts `x,y`, optionally in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*\)?\s*$").unwrap();
        };

        let cap = RE
            .captures(s)
            .ok_or_else(|| ParsePointError::InvalidLiteral(s.to_string()))?;

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

/// The smallest rectangle covering a set of squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    left: Position,
    right: Position,
    top: Position,
    bottom: Position,
}

impl BoundingBox {
    /// Covers nothing until a point is included.
    pub fn empty() -> Self {
        Self {
            left: Position::MAX,
            right: Position::MIN,
            top: Position::MAX,
            bottom: Position::MIN,
        }
    }

    /// Grow to cover `point`. Returns whether the box changed.
    pub fn include(&mut self, point: Point) -> bool {
        let before = *self;
        self.left = cmp::min(self.left, point.x);
        self.right = cmp::max(self.right, point.x);
        self.top = cmp::min(self.top, point.y);
        self.bottom = cmp::max(self.bottom, point.y);
        before != *self
    }

    pub fn width(&self) -> Position {
        self.right.saturating_sub(self.left) + 1
    }

    pub fn height(&self) -> Position {
        self.bottom.saturating_sub(self.top) + 1
    }

    /// Call a function which should write a single character at every position
    /// in this bounding box, row by row.
    pub fn printer<F>(&self, f: &mut fmt::Formatter, cb: F) -> fmt::Result
    where
        F: Fn(&mut fmt::Formatter, &Point) -> fmt::Result,
    {
        for y in self.top..=self.bottom {
            for x in self.left..=self.right {
                cb(f, &Point::new(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
