use crate::{Coordinate, CoordinateMap, Cost, Error, Result, Waypoint};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// The open and closed Waypoints of a single A* search.
///
/// `open` holds discovered Waypoints that are candidates for expansion, `closed` holds the ones
/// whose Path is settled. Both are keyed by location and never share a key. Once closed, a
/// location stays closed until [`clear`](SearchState::clear) is called.
///
/// A SearchState belongs to exactly one search at a time. Concurrent searches need one each.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use waypoint_search::{Coordinate, SearchState, Waypoint};
/// let mut state = SearchState::new();
///
/// state.add_open(Waypoint::new(Coordinate::new(0, 0), 0.0, 5.0, None));
/// state.add_open(Waypoint::new(Coordinate::new(1, 0), 1.0, 3.0, None));
///
/// let min = state.get_min_open().unwrap();
/// assert_eq!(min.location(), Coordinate::new(1, 0));
///
/// state.close_waypoint(min.location()).unwrap();
/// assert!(state.is_closed(Coordinate::new(1, 0)));
/// assert_eq!(state.num_open(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    open: CoordinateMap<OpenEntry>,
    closed: CoordinateMap<Arc<Waypoint>>,
    queue: BinaryHeap<QueueElement>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct OpenEntry {
    waypoint: Arc<Waypoint>,
    seq: u64,
}

/// Entry of the open queue. Entries whose `seq` no longer matches the open entry at
/// `location` have been replaced or closed and are skipped.
#[derive(Debug, Clone, Copy)]
struct QueueElement {
    location: Coordinate,
    total_cost: Cost,
    seq: u64,
}

impl PartialEq for QueueElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for QueueElement {}
impl PartialOrd for QueueElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for QueueElement {
    // BinaryHeap is a max-heap: lowest total_cost first, then oldest entry
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.total_cost
            .total_cmp(&self.total_cost)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

impl SearchState {
    /// Creates an empty SearchState
    pub fn new() -> SearchState {
        SearchState::default()
    }

    /// Creates an empty SearchState with room for about `size_hint` Waypoints
    pub fn with_capacity(size_hint: usize) -> SearchState {
        SearchState {
            open: CoordinateMap::with_capacity(size_hint / 2),
            closed: CoordinateMap::with_capacity(size_hint),
            queue: BinaryHeap::with_capacity(size_hint / 2),
            next_seq: 0,
        }
    }

    /// Returns the open Waypoint with the lowest `total_cost`, or `None` if nothing is open.
    ///
    /// On ties, the Waypoint that has been open the longest is returned. A Waypoint that
    /// replaced another counts as newly opened.
    pub fn get_min_open(&self) -> Option<Arc<Waypoint>> {
        let top = self.queue.peek()?;
        self.open
            .get(&top.location)
            .map(|entry| entry.waypoint.clone())
    }

    /// Adds `candidate` to the open Waypoints.
    ///
    /// If there is no open Waypoint at its location yet, `candidate` is inserted. Otherwise it
    /// replaces the existing one only if its `previous_cost` is strictly lower. Candidates for
    /// closed locations are ignored.
    ///
    /// Returns `true` if `candidate` was stored.
    ///
    /// ## Examples
    /// ```
    /// # use waypoint_search::{Coordinate, SearchState, Waypoint};
    /// let mut state = SearchState::new();
    /// let loc = Coordinate::new(2, 2);
    ///
    /// assert!(state.add_open(Waypoint::new(loc, 10.0, 0.0, None)));
    /// assert!(state.add_open(Waypoint::new(loc, 7.0, 0.0, None)));
    /// assert!(!state.add_open(Waypoint::new(loc, 9.0, 0.0, None)));
    ///
    /// assert_eq!(state.open_waypoint(loc).unwrap().previous_cost(), 7.0);
    /// ```
    pub fn add_open(&mut self, candidate: Waypoint) -> bool {
        let location = candidate.location();
        if self.closed.contains_key(&location) {
            return false;
        }
        if let Some(existing) = self.open.get(&location) {
            if candidate.previous_cost() >= existing.waypoint.previous_cost() {
                return false;
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(QueueElement {
            location,
            total_cost: candidate.total_cost(),
            seq,
        });
        self.open.insert(
            location,
            OpenEntry {
                waypoint: Arc::new(candidate),
                seq,
            },
        );
        self.prune();
        true
    }

    /// The number of open Waypoints
    pub fn num_open(&self) -> usize {
        self.open.len()
    }

    /// The number of closed Waypoints
    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }

    /// Moves the open Waypoint at `location` to the closed Waypoints.
    ///
    /// Fails with [`Error::NotFound`] if `location` is not open, which includes locations that
    /// are already closed.
    pub fn close_waypoint(&mut self, location: Coordinate) -> Result<()> {
        let entry = self
            .open
            .remove(&location)
            .ok_or(Error::NotFound(location))?;
        self.closed.insert(location, entry.waypoint);
        self.prune();
        Ok(())
    }

    /// Returns `true` if `location` has been closed. Does not look at open Waypoints.
    pub fn is_closed(&self, location: Coordinate) -> bool {
        self.closed.contains_key(&location)
    }

    /// Returns `true` if `location` has an open Waypoint
    pub fn is_open(&self, location: Coordinate) -> bool {
        self.open.contains_key(&location)
    }

    /// The open Waypoint at `location`, if any
    pub fn open_waypoint(&self, location: Coordinate) -> Option<&Arc<Waypoint>> {
        self.open.get(&location).map(|entry| &entry.waypoint)
    }

    /// The closed Waypoint at `location`, if any
    pub fn closed_waypoint(&self, location: Coordinate) -> Option<&Arc<Waypoint>> {
        self.closed.get(&location)
    }

    /// Removes all Waypoints, keeping the allocated memory for the next search
    pub fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.queue.clear();
        self.next_seq = 0;
    }

    /// Drops stale queue entries until the top refers to a live open Waypoint
    fn prune(&mut self) {
        while let Some(&top) = self.queue.peek() {
            match self.open.get(&top.location) {
                Some(entry) if entry.seq == top.seq => break,
                _ => {
                    self.queue.pop();
                }
            }
        }
    }
}
