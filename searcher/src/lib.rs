//! A* search over discrete positions with unit step costs.
//!
//! To search, provide a [Successors] generator which lists the positions
//! reachable in one step, and a [Heuristic] which estimates the remaining
//! distance to the goal. Closures work for both:
//!
//! ```
//! let successors = |n: &i32| vec![n - 1, n + 1];
//! let heuristic = |a: &i32, b: &i32| (a - b).abs() as usize;
//!
//! let route = searcher::find_path(0, 3, &successors, &heuristic).unwrap();
//! assert_eq!(route.into_path(), Some(vec![0, 1, 2, 3]));
//! ```

pub mod algorithm;
mod errors;
mod node;
mod route;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use node::{Cost, Node};
pub use route::{Outcome, Route};
pub use traits::Heuristic;
pub use traits::Position;
pub use traits::Successors;

pub use algorithm::astar::{find_path, AStar};
pub use algorithm::CancelToken;
pub use algorithm::Relaxation;
pub use algorithm::SearchOptions;
