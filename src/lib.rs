#![deny(clippy::all)]

//! Navigate dungeon maps with A*.

use geometry::coord2d::map::Map;
use geometry::coord2d::path::{Path, PathError};
use geometry::coord2d::Point;
use searcher::{Route, SearchError};
use thiserror::Error;
use tracing::info;

pub mod dungeon;
pub mod settings;

pub use dungeon::{Dungeon, DungeonError};
pub use settings::{app, Settings, SettingsError};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No start given: use --from or mark the map with S")]
    MissingOrigin,

    #[error("No goal given: use --to or mark the map with G")]
    MissingDestination,

    #[error("Search stopped early")]
    Search(#[from] SearchError),

    #[error("Search returned a broken route")]
    BrokenRoute(#[from] PathError),
}

/// The outcome of navigating a dungeon.
#[derive(Debug)]
pub struct Navigation {
    pub origin: Point,
    pub destination: Point,

    /// The route as the search found it. When the destination is
    /// unreachable, this ends where the search gave up.
    pub route: Route<Point>,

    /// The path to the destination, if it could be reached.
    pub path: Option<Path>,
}

/// Search a dungeon for a path between the points named in the
/// settings, falling back to the `S` and `G` markers.
pub fn navigate(dungeon: &Dungeon, settings: &Settings) -> Result<Navigation, NavigationError> {
    let origin = settings
        .origin
        .or_else(|| dungeon.start())
        .ok_or(NavigationError::MissingOrigin)?;
    let destination = settings
        .destination
        .or_else(|| dungeon.goal())
        .ok_or(NavigationError::MissingDestination)?;

    let route = dungeon
        .pathfinder()
        .with_adjacency(settings.adjacency)
        .with_options(settings.search.clone())
        .route(origin, destination)?;

    let path = Path::from_route(route.clone())?;

    info!(
        %origin,
        %destination,
        reached = path.is_some(),
        expanded = route.expanded(),
        "navigation finished"
    );

    Ok(Navigation {
        origin,
        destination,
        route,
        path,
    })
}
