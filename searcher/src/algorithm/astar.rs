//! A* search over positions with unit step costs.

use std::fmt;

use tracing::{debug, trace};

use super::open::OpenSet;
use super::visited::{ClosedSet, Predecessors};
use super::{Relaxation, SearchOptions};
use crate::errors::Result;
use crate::node::Node;
use crate::route::{Outcome, Route};
use crate::traits::{Heuristic, Position, Successors};

/// How often to report on a long running search.
const PROGRESS_INTERVAL: usize = 10_000;

/// A* searcher.
///
/// Holds the successor generator, the heuristic and the options. All
/// state for a single search lives inside [AStar::find_path], so one
/// searcher can serve many searches, including from several threads
/// at once.
pub struct AStar<'a, S, H> {
    successors: &'a S,
    heuristic: &'a H,
    options: SearchOptions,
}

impl<'a, S, H> fmt::Debug for AStar<'a, S, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AStar")
            .field("options", &self.options)
            .finish()
    }
}

impl<'a, S, H> AStar<'a, S, H> {
    pub fn new(successors: &'a S, heuristic: &'a H) -> Self {
        Self {
            successors,
            heuristic,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this searcher.
    ///
    /// When more than this many nodes have been expanded,
    /// the search will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options = self.options.clone().with_step_limit(limit);
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find a path from `start` to `goal`.
    ///
    /// The search stops when the goal is taken from the open set, or
    /// when the open set is exhausted. Either way, a [Route] is built
    /// from the last node taken. Errors are only returned when one of
    /// the limits in [SearchOptions] is hit.
    pub fn find_path<P>(&self, start: P, goal: P) -> Result<Route<P>>
    where
        P: Position,
        S: Successors<P>,
        H: Heuristic<P>,
    {
        debug!(?start, ?goal, relaxation = ?self.options.relaxation(), "starting search");

        let mut budget = self.options.budget();
        let mut open = OpenSet::default();
        let mut closed = ClosedSet::default();
        let mut came_from = Predecessors::default();

        let mut terminal = Node::start(start.clone());
        let mut outcome = Outcome::Exhausted;
        open.push(Node::start(start));

        while let Some(current) = open.pop() {
            budget.increment()?;

            if budget.steps() % PROGRESS_INTERVAL == 0 {
                debug!(
                    steps = budget.steps(),
                    open = open.len(),
                    closed = closed.len(),
                    f = current.f(),
                    "search progress"
                );
            }

            if current.position() == &goal {
                terminal = current;
                outcome = Outcome::GoalReached;
                break;
            }

            trace!(position = ?current.position(), g = current.g(), f = current.f(), "expanding");
            closed.close(current.position().clone());

            for successor in self.successors.successors(current.position()) {
                if closed.contains(&successor) {
                    continue;
                }

                let g = current.g() + 1;
                match self.options.relaxation() {
                    Relaxation::Overwrite => {
                        came_from.record(successor.clone(), &current);
                        if !open.contains(&successor) {
                            let f = g + self.heuristic.estimate(&successor, &goal);
                            open.push(Node::new(successor, g, f));
                        }
                    }
                    Relaxation::DecreaseKey => {
                        if open.cost(&successor).map(|best| g < best).unwrap_or(true) {
                            came_from.record(successor.clone(), &current);
                            let f = g + self.heuristic.estimate(&successor, &goal);
                            open.push(Node::new(successor, g, f));
                        }
                    }
                }
            }

            terminal = current;
        }

        let expanded = budget.steps();
        let route = Route::reconstruct(terminal, &came_from, outcome, expanded);
        debug!(
            ?outcome,
            expanded,
            distance = route.distance(),
            "search finished"
        );

        Ok(route)
    }
}

/// Find a path from `start` to `goal` with no limits on the search.
///
/// This never returns an error; see [AStar::find_path] for how the
/// route is built when the goal is unreachable.
pub fn find_path<P, S, H>(start: P, goal: P, successors: &S, heuristic: &H) -> Result<Route<P>>
where
    P: Position,
    S: Successors<P>,
    H: Heuristic<P>,
{
    AStar::new(successors, heuristic).find_path(start, goal)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::algorithm::CancelToken;
    use crate::errors::SearchError;
    use crate::node::Cost;

    type Cell = (i32, i32);

    /// A rectangular grid with 4-directional movement.
    #[derive(Debug, Default)]
    struct Grid {
        width: i32,
        height: i32,
        walls: HashSet<Cell>,
    }

    impl Grid {
        fn open(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                walls: HashSet::new(),
            }
        }

        fn with_walls(mut self, walls: &[Cell]) -> Self {
            self.walls.extend(walls.iter().cloned());
            self
        }

        fn is_open(&self, cell: Cell) -> bool {
            cell.0 >= 0
                && cell.1 >= 0
                && cell.0 < self.width
                && cell.1 < self.height
                && !self.walls.contains(&cell)
        }
    }

    impl Successors<Cell> for Grid {
        fn successors(&self, cell: &Cell) -> Vec<Cell> {
            let (x, y) = *cell;
            vec![(x, y - 1), (x - 1, y), (x + 1, y), (x, y + 1)]
                .into_iter()
                .filter(|c| self.is_open(*c))
                .collect()
        }
    }

    fn manhattan(a: &Cell, b: &Cell) -> Cost {
        ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as Cost
    }

    fn positions(route: &Route<Cell>) -> Vec<Cell> {
        route.nodes().iter().map(|n| *n.position()).collect()
    }

    fn assert_connected(route: &Route<Cell>) {
        for pair in route.nodes().windows(2) {
            assert_eq!(
                manhattan(pair[0].position(), pair[1].position()),
                1,
                "{:?} is not adjacent to {:?}",
                pair[0].position(),
                pair[1].position()
            );
        }
    }

    #[test]
    fn open_grid() {
        let grid = Grid::open(3, 3);
        let route = find_path((0, 0), (2, 2), &grid, &manhattan).unwrap();

        assert!(route.reached_goal());
        assert_eq!(route.distance(), 4);
        assert_eq!(route.terminal().position(), &(2, 2));
        assert_eq!(route.start().position(), &(0, 0));
        assert_eq!(route.forward().next().unwrap().position(), &(0, 0));
        assert_eq!(route.terminal().g(), 4);
        assert_connected(&route);
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::open(3, 3);
        let route = find_path((1, 1), (1, 1), &grid, &manhattan).unwrap();

        assert!(route.reached_goal());
        assert_eq!(positions(&route), vec![(1, 1)]);
        assert_eq!(route.expanded(), 1);
    }

    #[test]
    fn unreachable() {
        let grid = Grid::open(3, 3).with_walls(&[(1, 1), (2, 1), (1, 2)]);
        let route = find_path((0, 0), (2, 2), &grid, &manhattan).unwrap();

        assert_eq!(route.outcome(), Outcome::Exhausted);
        assert_ne!(route.terminal().position(), &(2, 2));
        assert_eq!(route.start().position(), &(0, 0));
        assert_connected(&route);
        assert_eq!(route.into_path(), None);
    }

    #[test]
    fn isolated_start() {
        let grid = Grid::open(3, 3).with_walls(&[(1, 0), (0, 1)]);
        let route = find_path((0, 0), (2, 2), &grid, &manhattan).unwrap();

        assert!(!route.reached_goal());
        assert_eq!(positions(&route), vec![(0, 0)]);
    }

    #[test]
    fn shortest_around_walls() {
        // .....
        // ####.
        // .....
        // .####
        // .....
        let grid = Grid::open(5, 5).with_walls(&[
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (1, 3),
            (2, 3),
            (3, 3),
            (4, 3),
        ]);
        let route = find_path((0, 0), (4, 4), &grid, &manhattan).unwrap();

        assert!(route.reached_goal());
        assert_eq!(route.distance(), 16);
        assert_connected(&route);
        assert!(route
            .nodes()
            .iter()
            .all(|n| !grid.walls.contains(n.position())));
    }

    #[test]
    fn zero_heuristic() {
        let grid = Grid::open(6, 4).with_walls(&[(2, 0), (2, 1), (2, 2)]);
        let zero = |_: &Cell, _: &Cell| -> Cost { 0 };
        let route = find_path((0, 0), (5, 0), &grid, &zero).unwrap();
        assert_eq!(route.distance(), 11);

        let informed = find_path((0, 0), (5, 0), &grid, &manhattan).unwrap();
        assert_eq!(informed.distance(), 11);
        assert!(informed.expanded() <= route.expanded());
    }

    #[test]
    fn idempotent() {
        let grid = Grid::open(8, 8).with_walls(&[(3, 2), (3, 3), (3, 4), (4, 4), (5, 4)]);
        let searcher = AStar::new(&grid, &manhattan);

        let first = searcher.find_path((0, 0), (7, 7)).unwrap();
        let second = searcher.find_path((0, 0), (7, 7)).unwrap();
        assert_eq!(positions(&first), positions(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn closures() {
        let successors = |n: &i32| vec![n - 1, n + 1];
        let heuristic = |a: &i32, b: &i32| (a - b).abs() as Cost;
        let route = find_path(0, 5, &successors, &heuristic).unwrap();

        let path = route.into_path().unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn legacy_overwrite() {
        let grid = Grid::open(6, 6).with_walls(&[(2, 2), (3, 2), (2, 3)]);
        let searcher = AStar::new(&grid, &manhattan)
            .with_options(SearchOptions::new().with_relaxation(Relaxation::Overwrite));

        let route = searcher.find_path((0, 0), (5, 5)).unwrap();
        assert!(route.reached_goal());
        assert_eq!(route.start().position(), &(0, 0));
        assert!(route.distance() >= 10);
        assert_connected(&route);
    }

    #[test]
    fn relaxation_policies_differ() {
        // Two routes reach `c`: s-a-c, and the longer s-x-y-c which
        // is expanded after `c` has already been queued through `a`.
        let successors = |n: &char| -> Vec<char> {
            match n {
                's' => vec!['a', 'x'],
                'a' => vec!['c'],
                'x' => vec!['y'],
                'y' => vec!['c'],
                'c' => vec!['g'],
                _ => vec![],
            }
        };
        let heuristic = |n: &char, _: &char| -> Cost {
            if *n == 'c' {
                1
            } else {
                0
            }
        };

        let shortest = AStar::new(&successors, &heuristic)
            .find_path('s', 'g')
            .unwrap();
        assert_eq!(shortest.terminal().g(), 3);
        assert_eq!(shortest.into_path(), Some(vec!['s', 'a', 'c', 'g']));

        // Without decrease-key, `c` keeps the cost it was queued with,
        // but its predecessor is overwritten by the later, longer route.
        let overwritten = AStar::new(&successors, &heuristic)
            .with_options(SearchOptions::new().with_relaxation(Relaxation::Overwrite))
            .find_path('s', 'g')
            .unwrap();
        assert_eq!(overwritten.terminal().g(), 3);
        assert_eq!(overwritten.distance(), 4);
        assert_eq!(overwritten.into_path(), Some(vec!['s', 'x', 'y', 'c', 'g']));
    }

    #[test]
    fn step_limit() {
        let grid = Grid::open(10, 10);
        let zero = |_: &Cell, _: &Cell| -> Cost { 0 };
        let mut searcher = AStar::new(&grid, &zero);
        searcher.set_limit(5);

        assert_eq!(
            searcher.find_path((0, 0), (9, 9)),
            Err(SearchError::StepLimitExhausted(5))
        );

        // A nearby goal still fits within the limit.
        assert!(searcher.find_path((0, 0), (0, 0)).unwrap().reached_goal());
    }

    #[test]
    fn cancelled() {
        let grid = Grid::open(10, 10);
        let token = CancelToken::new();
        token.cancel();
        let searcher =
            AStar::new(&grid, &manhattan).with_options(SearchOptions::new().with_cancel(token));

        assert_eq!(
            searcher.find_path((0, 0), (9, 9)),
            Err(SearchError::Cancelled(0))
        );
    }

    #[test]
    fn concurrent() {
        let grid = Grid::open(20, 20).with_walls(&[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4)]);
        let searcher = AStar::new(&grid, &manhattan);

        let pairs = vec![
            ((0, 0), (19, 19)),
            ((0, 0), (9, 0)),
            ((19, 0), (0, 19)),
            ((4, 4), (6, 4)),
        ];
        let expected: Vec<_> = pairs
            .iter()
            .map(|(s, g)| searcher.find_path(*s, *g).unwrap().distance())
            .collect();

        let found: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = pairs
                .iter()
                .map(|(s, g)| {
                    let searcher = &searcher;
                    scope.spawn(move || searcher.find_path(*s, *g).unwrap().distance())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(found, expected);
        assert_eq!(expected, vec![38, 19, 38, 4]);
    }
}
