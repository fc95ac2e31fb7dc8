use crate::{Coordinate, Error, Map2D, Path, Result, SearchState, Waypoint};

mod config;
pub use self::config::SearchConfig;

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Searches a [`Map2D`] using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// A Pathfinder only borrows the Map. Every search gets its own [`SearchState`], so a single
/// Pathfinder may serve several searches, see [`find_paths`](Pathfinder::find_paths).
///
/// ## Examples
/// Basic usage:
/// ```
/// use waypoint_search::prelude::*;
///
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid = [
///     [0, 2, 0, 0, 0],
///     [0, 2, 2, 2, 2],
///     [0, 1, 0, 0, 0],
///     [0, 1, 0, 2, 0],
///     [0, 0, 0, 2, 0],
/// ];
/// const COST_MAP: [isize; 3] = [1, 10, -1];
///
/// let map = GridMap::from_rows(
///     grid.iter().map(|row| row.iter().map(|&t| COST_MAP[t])),
///     ManhattanNeighborhood,
/// )
/// .unwrap();
///
/// let pathfinder = Pathfinder::new(&map, SearchConfig::default());
///
/// let path = pathfinder
///     .find_path(Coordinate::new(0, 0), Coordinate::new(4, 4))
///     .unwrap();
///
/// assert!(path.is_some());
/// let path = path.unwrap();
/// assert_eq!(path.cost(), 12.0);
/// assert_eq!(path[0], Coordinate::new(0, 0));
/// ```
///
/// If the goal cannot be reached, `None` is returned:
/// ```
/// # use waypoint_search::prelude::*;
/// # let grid = [
/// #     [0, 2, 0, 0, 0],
/// #     [0, 2, 2, 2, 2],
/// #     [0, 1, 0, 0, 0],
/// #     [0, 1, 0, 2, 0],
/// #     [0, 0, 0, 2, 0],
/// # ];
/// # const COST_MAP: [isize; 3] = [1, 10, -1];
/// # let map = GridMap::from_rows(
/// #     grid.iter().map(|row| row.iter().map(|&t| COST_MAP[t])),
/// #     ManhattanNeighborhood,
/// # )
/// # .unwrap();
/// # let pathfinder = Pathfinder::new(&map, SearchConfig::default());
/// let path = pathfinder
///     .find_path(Coordinate::new(0, 0), Coordinate::new(2, 0))
///     .unwrap();
///
/// assert_eq!(path, None);
/// ```
pub struct Pathfinder<'m, M: ?Sized> {
    map: &'m M,
    config: SearchConfig,
}

impl<M: ?Sized> Clone for Pathfinder<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<M: ?Sized> Copy for Pathfinder<'_, M> {}

impl<M: ?Sized> fmt::Debug for Pathfinder<'_, M> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Pathfinder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'m, M: Map2D + ?Sized> Pathfinder<'m, M> {
    /// Creates a new Pathfinder navigating `map`
    pub fn new(map: &'m M, config: SearchConfig) -> Self {
        Pathfinder { map, config }
    }

    /// Returns the Map this Pathfinder is navigating
    pub fn map(&self) -> &'m M {
        self.map
    }

    /// Returns the config used for every search
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a search from `start` to `goal` on `state`.
    ///
    /// `state` is cleared first. When the search ends it still holds every open and closed
    /// Waypoint, which allows inspecting how much of the Map was explored.
    ///
    /// ## Returns
    /// - `Ok(Some(waypoint))` - the Waypoint at `goal`. Its predecessors lead back to `start`.
    /// - `Ok(None)` - `start` is not walkable, or every reachable location was closed without
    ///   finding `goal`.
    /// - `Err(Error::InvalidArgument)` - the Map returned a negative or non-finite edge cost.
    /// - `Err(Error::ExpansionLimit)` - the configured expansion limit was reached.
    pub fn search(
        &self,
        state: &mut SearchState,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Arc<Waypoint>>> {
        let timer = Instant::now();
        state.clear();
        if !self.map.is_walkable(start) {
            debug!("{} -> {}: start is not walkable", start, goal);
            return Ok(None);
        }
        state.add_open(Waypoint::start(start, self.map.heuristic(start, goal)));

        let mut expansions = 0;
        let mut neighbors = vec![];

        while let Some(current) = state.get_min_open() {
            let location = current.location();
            if location == goal {
                debug!(
                    "found path {} -> {} with cost {} after {} expansions in {:?}",
                    start,
                    goal,
                    current.previous_cost(),
                    expansions,
                    timer.elapsed()
                );
                return Ok(Some(current));
            }
            if let Some(limit) = self.config.expansion_limit {
                if expansions >= limit {
                    debug!(
                        "gave up on {} -> {} after {} expansions in {:?}",
                        start,
                        goal,
                        expansions,
                        timer.elapsed()
                    );
                    return Err(Error::ExpansionLimit(limit));
                }
            }

            state.close_waypoint(location)?;
            expansions += 1;
            trace!(
                "expanding {} (g = {}, f = {})",
                location,
                current.previous_cost(),
                current.total_cost()
            );

            neighbors.clear();
            self.map.neighbors(location, &mut neighbors);
            for &next in neighbors.iter() {
                if state.is_closed(next) {
                    continue;
                }
                let step = self.map.edge_cost(location, next);
                if !step.is_finite() || step < 0.0 {
                    return Err(Error::InvalidArgument(format!(
                        "edge cost from {} to {} is {}",
                        location, next, step
                    )));
                }
                let cost = current.previous_cost() + step;
                let candidate = Waypoint::new(
                    next,
                    cost,
                    self.map.heuristic(next, goal),
                    Some(current.clone()),
                );
                if state.add_open(candidate) {
                    trace!("opened {} (g = {})", next, cost);
                }
            }
        }

        debug!(
            "no path {} -> {} after {} expansions in {:?}",
            start,
            goal,
            expansions,
            timer.elapsed()
        );
        Ok(None)
    }

    /// Finds the cheapest Path from `start` to `goal`.
    ///
    /// The first Coordinate of the Path is always `start` and the last is `goal`. If both are
    /// the same, the Path consists of that single Coordinate with a Cost of 0.
    /// See [`search`](Pathfinder::search) for the possible errors.
    pub fn find_path(
        &self,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Path<Coordinate>>> {
        let mut state = SearchState::with_capacity(self.config.size_hint);
        let found = self.search(&mut state, start, goal)?;
        Ok(found.map(|waypoint| Path::from_waypoint(&waypoint)))
    }

    /// Runs an independent [`find_path`](Pathfinder::find_path) for every `(start, goal)` pair.
    ///
    /// The results are in the same order as `requests`. With the `parallel` feature the
    /// searches are spread over the rayon thread pool, each with its own [`SearchState`].
    ///
    /// ## Examples
    /// ```
    /// # use waypoint_search::prelude::*;
    /// let map = GridMap::new(4, 1, vec![1, 1, -1, 1], ManhattanNeighborhood).unwrap();
    /// let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    ///
    /// let results = pathfinder.find_paths(&[
    ///     (Coordinate::new(0, 0), Coordinate::new(1, 0)),
    ///     (Coordinate::new(0, 0), Coordinate::new(3, 0)),
    /// ]);
    ///
    /// assert_eq!(results[0].as_ref().unwrap().as_ref().unwrap().cost(), 1.0);
    /// assert_eq!(results[1], Ok(None));
    /// ```
    pub fn find_paths(
        &self,
        requests: &[(Coordinate, Coordinate)],
    ) -> Vec<Result<Option<Path<Coordinate>>>>
    where
        M: Sync,
    {
        #[cfg(feature = "parallel")]
        let results = requests
            .par_iter()
            .map(|&(start, goal)| self.find_path(start, goal))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results = requests
            .iter()
            .map(|&(start, goal)| self.find_path(start, goal))
            .collect();
        results
    }
}
