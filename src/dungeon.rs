//! Dungeon maps in their plain text form.
//!
//! ```text
//! #######
//! #S..#.#
//! #.#...#
//! #...#G#
//! #######
//! ```
//!
//! `#` and spaces are walls, `.` is floor, and `S` and `G` mark
//! the start and goal, which are also floor.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use geometry::coord2d::map::Map;
use geometry::coord2d::path::Path;
use geometry::coord2d::{BoundingBox, Point};
use geometry::Position;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("Unexpected map character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Marker {0:?} appears more than once (at {1} and {2})")]
    DuplicateMarker(char, Point, Point),

    #[error("Map is empty")]
    Empty,

    #[error("Unable to read map")]
    Io(#[from] std::io::Error),
}

/// A dungeon floor plan.
#[derive(Debug, Clone)]
pub struct Dungeon {
    floor: HashSet<Point>,
    start: Option<Point>,
    goal: Option<Point>,
    bbox: BoundingBox,
}

impl Dungeon {
    /// Read a whole map from a reader.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, DungeonError> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        buffer.parse()
    }

    /// Where the `S` marker is, if there is one.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Where the `G` marker is, if there is one.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Draw this map with a path marked out in `*`.
    pub fn render<'d>(&'d self, path: Option<&'d Path>) -> Rendered<'d> {
        Rendered {
            dungeon: self,
            path: path.map(|p| p.iter().collect()).unwrap_or_default(),
        }
    }

    fn marker(slot: &mut Option<Point>, marker: char, point: Point) -> Result<(), DungeonError> {
        if let Some(existing) = *slot {
            return Err(DungeonError::DuplicateMarker(marker, existing, point));
        }
        *slot = Some(point);
        Ok(())
    }
}

impl FromStr for Dungeon {
    type Err = DungeonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut floor = HashSet::new();
        let mut start = None;
        let mut goal = None;
        let mut bbox = BoundingBox::empty();

        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.trim_end().chars().enumerate() {
                let point = Point::new(x as Position, y as Position);
                match c {
                    '#' | ' ' => {}
                    '.' => {
                        floor.insert(point);
                    }
                    'S' => {
                        Self::marker(&mut start, c, point)?;
                        floor.insert(point);
                    }
                    'G' => {
                        Self::marker(&mut goal, c, point)?;
                        floor.insert(point);
                    }
                    _ => return Err(DungeonError::UnexpectedCharacter(c, point)),
                }
                bbox.include(point);
            }
        }

        if bbox == BoundingBox::empty() {
            return Err(DungeonError::Empty);
        }

        Ok(Dungeon {
            floor,
            start,
            goal,
            bbox,
        })
    }
}

impl Map for Dungeon {
    fn is_traversable(&self, location: Point) -> bool {
        self.floor.contains(&location)
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

/// A dungeon, drawn with an optional path.
#[derive(Debug)]
pub struct Rendered<'d> {
    dungeon: &'d Dungeon,
    path: HashSet<&'d Point>,
}

impl<'d> fmt::Display for Rendered<'d> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dungeon = self.dungeon;
        dungeon.bbox.printer(f, |f, point| {
            let c = if dungeon.start == Some(*point) {
                'S'
            } else if dungeon.goal == Some(*point) {
                'G'
            } else if self.path.contains(point) {
                '*'
            } else if dungeon.is_traversable(*point) {
                '.'
            } else {
                '#'
            };
            write!(f, "{}", c)
        })
    }
}
