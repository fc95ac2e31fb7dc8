use crate::Coordinate;
use thiserror::Error;

/// Errors returned by [`SearchState`](crate::SearchState) and [`Pathfinder`](crate::Pathfinder)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A precondition on an argument was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The location has no open Waypoint
    #[error("No open waypoint at {0}")]
    NotFound(Coordinate),
    /// The search closed more Waypoints than the configured limit allows
    #[error("Expansion limit of {0} waypoints reached")]
    ExpansionLimit(usize),
}

/// Shorthand for results of this crate
pub type Result<T> = std::result::Result<T, Error>;
