#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for the bookkeeping of A* searches on 2D Maps.
//!
//! ## Introduction
//! An [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) keeps two sets of Nodes:
//! the "open" ones that have been discovered but not yet expanded, and the "closed" ones whose
//! cheapest Path is settled. In every step the open Node with the lowest estimated total Cost
//! is closed and its neighbors are opened (or updated, if a cheaper Path to them was found).
//!
//! This crate provides that state machine as [`SearchState`], the Node record as [`Waypoint`]
//! and a [`Pathfinder`] that drives the search over any Map implementing [`Map2D`].
//!
//! Closed Nodes are never reopened. The Heuristic provided by the Map therefore has to be
//! admissible and consistent for the resulting Paths to be optimal. See [`Map2D`] for details.
//!
//! ## Examples
//! Finding a Path on a Grid:
//! ```
//! use waypoint_search::prelude::*;
//!
//! // create and initialize Grid
//! // 0 = empty, 1 = swamp, 2 = wall
//! let grid = [
//!     [0, 2, 0, 0, 0],
//!     [0, 2, 2, 2, 2],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 2, 0],
//!     [0, 0, 0, 2, 0],
//! ];
//!
//! const COST_MAP: [isize; 3] = [
//!     1,  // empty
//!     10, // swamp
//!     -1, // wall = solid
//! ];
//!
//! let map = GridMap::from_rows(
//!     grid.iter().map(|row| row.iter().map(|&t| COST_MAP[t])),
//!     ManhattanNeighborhood,
//! )
//! .unwrap();
//!
//! let pathfinder = Pathfinder::new(&map, SearchConfig::default());
//!
//! // find_path returns Ok(Some(Path)) on success
//! let path = pathfinder
//!     .find_path(Coordinate::new(0, 0), Coordinate::new(4, 4))
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(path.cost(), 12.0);
//! assert_eq!(path.len(), 13);
//! ```
//!
//! ### Driving a SearchState by hand
//! The [`Pathfinder`] is a thin loop around [`SearchState`]. The same operations are available
//! for custom search loops:
//! ```
//! use waypoint_search::{Coordinate, SearchState, Waypoint};
//!
//! let mut state = SearchState::new();
//! state.add_open(Waypoint::start(Coordinate::new(0, 0), 5.0));
//!
//! let current = state.get_min_open().unwrap();
//! state.close_waypoint(current.location()).unwrap();
//!
//! // a cheaper candidate replaces an open Waypoint, a more expensive one is rejected
//! let next = Coordinate::new(1, 0);
//! assert!(state.add_open(Waypoint::new(next, 3.0, 4.0, Some(current.clone()))));
//! assert!(state.add_open(Waypoint::new(next, 1.0, 4.0, Some(current.clone()))));
//! assert!(!state.add_open(Waypoint::new(next, 2.0, 4.0, Some(current))));
//!
//! assert_eq!(state.get_min_open().unwrap().previous_cost(), 1.0);
//! ```
//!
//! ### Configuration
//! The second parameter of [`Pathfinder::new`] is a [`SearchConfig`]. It can bound the number
//! of Waypoints a search may close, which is the way to stop searches on huge Maps early:
//! ```
//! # use waypoint_search::prelude::*;
//! let map = GridMap::new(100, 1, vec![1; 100], ManhattanNeighborhood).unwrap();
//! let pathfinder = Pathfinder::new(&map, SearchConfig::with_expansion_limit(10));
//!
//! let result = pathfinder.find_path(Coordinate::new(0, 0), Coordinate::new(99, 0));
//! assert_eq!(result, Err(Error::ExpansionLimit(10)));
//! ```

/// The Type used for the Cost of a step, a Path or an estimate
pub type Cost = f32;

mod coordinate;
pub use self::coordinate::{Coordinate, CoordinateMap, CoordinateSet};

mod waypoint;
pub use self::waypoint::{Ancestors, Waypoint};

mod search_state;
pub use self::search_state::SearchState;

mod map;
pub use self::map::Map2D;

mod path;
pub use self::path::Path;

mod error;
pub use self::error::{Error, Result};

mod engine;
pub use self::engine::{Pathfinder, SearchConfig};

pub mod grid;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        grid::{GridMap, ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        Coordinate, Cost, Error, Map2D, Path, Pathfinder, SearchConfig, SearchState, Waypoint,
    };
}
