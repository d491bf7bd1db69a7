//! Command line settings for the dungeon navigator.

use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use geometry::coord2d::adjacency::Adjacency;
use geometry::coord2d::{ParsePointError, Point};
use searcher::{Relaxation, SearchOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid point for --{0}")]
    InvalidPoint(&'static str, #[source] ParsePointError),

    #[error("Invalid number for --{0}: {1}")]
    InvalidNumber(&'static str, String, #[source] ParseIntError),
}

/// Everything needed to run a navigation, besides the map itself.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Map file to read, `None` or `-` for stdin.
    pub map: Option<String>,

    /// Overrides the `S` marker in the map.
    pub origin: Option<Point>,

    /// Overrides the `G` marker in the map.
    pub destination: Option<Point>,

    pub adjacency: Adjacency,
    pub search: SearchOptions,

    /// Number of `-v` flags given.
    pub verbosity: u64,
}

/// Build the command line interface.
pub fn app() -> App<'static, 'static> {
    App::new("Dungeon Navigator")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find the shortest path through a dungeon map")
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("X,Y")
                .takes_value(true)
                .help("Start here instead of at the S marker"),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .value_name("X,Y")
                .takes_value(true)
                .help("Head here instead of to the G marker"),
        )
        .arg(
            Arg::with_name("diagonal")
                .long("diagonal")
                .help("Allow diagonal steps"),
        )
        .arg(
            Arg::with_name("step-limit")
                .long("step-limit")
                .value_name("STEPS")
                .takes_value(true)
                .help("Give up after expanding this many squares"),
        )
        .arg(
            Arg::with_name("timeout-ms")
                .long("timeout-ms")
                .value_name("MILLISECONDS")
                .takes_value(true)
                .help("Give up after searching for this long"),
        )
        .arg(
            Arg::with_name("legacy")
                .long("legacy")
                .help("Always overwrite predecessors, as older navigators did"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, may be repeated"),
        )
}

fn point(matches: &ArgMatches, name: &'static str) -> Result<Option<Point>, SettingsError> {
    matches
        .value_of(name)
        .map(|v| v.parse().map_err(|e| SettingsError::InvalidPoint(name, e)))
        .transpose()
}

fn number<T>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>, SettingsError>
where
    T: FromStr<Err = ParseIntError>,
{
    matches
        .value_of(name)
        .map(|v| {
            v.parse()
                .map_err(|e| SettingsError::InvalidNumber(name, v.to_string(), e))
        })
        .transpose()
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, SettingsError> {
        let mut search = SearchOptions::new();
        if let Some(limit) = number(matches, "step-limit")? {
            search = search.with_step_limit(limit);
        }
        if let Some(ms) = number(matches, "timeout-ms")? {
            search = search.with_time_limit(Duration::from_millis(ms));
        }
        if matches.is_present("legacy") {
            search = search.with_relaxation(Relaxation::Overwrite);
        }

        let adjacency = if matches.is_present("diagonal") {
            Adjacency::Diagonal
        } else {
            Adjacency::Orthogonal
        };

        Ok(Settings {
            map: matches.value_of("map").map(|s| s.to_string()),
            origin: point(matches, "from")?,
            destination: point(matches, "to")?,
            adjacency,
            search,
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    /// Default log filter, used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
