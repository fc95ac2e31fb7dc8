use crate::{Coordinate, Cost};

use std::fmt;
use std::sync::Arc;

/// A Node of an A* search.
///
/// Stores the Cost of the best known Path from the start to `location` (`previous_cost`),
/// the estimated remaining Cost to the goal (`heuristic_cost`) and their sum (`total_cost`),
/// which is what the search orders by.
///
/// Waypoints are immutable. A cheaper Path to the same location is represented by a new
/// Waypoint that replaces the old one, so every `predecessor` held by another Waypoint stays valid.
/// Since a predecessor has to exist before the Waypoint pointing to it, chains are always finite
/// and end at the start Waypoint.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use waypoint_search::{Coordinate, Waypoint};
/// use std::sync::Arc;
///
/// let start = Arc::new(Waypoint::start(Coordinate::new(0, 0), 4.0));
/// let next = Waypoint::new(Coordinate::new(1, 0), 1.0, 3.0, Some(start.clone()));
///
/// assert_eq!(next.total_cost(), 4.0);
/// assert_eq!(next.predecessor().map(|p| p.location()), Some(Coordinate::new(0, 0)));
/// assert_eq!(next.steps(), 1);
/// ```
#[derive(Clone)]
pub struct Waypoint {
    location: Coordinate,
    previous_cost: Cost,
    heuristic_cost: Cost,
    total_cost: Cost,
    predecessor: Option<Arc<Waypoint>>,
}

impl Waypoint {
    /// Creates a new Waypoint reached from `predecessor`
    pub fn new(
        location: Coordinate,
        previous_cost: Cost,
        heuristic_cost: Cost,
        predecessor: Option<Arc<Waypoint>>,
    ) -> Waypoint {
        Waypoint {
            location,
            previous_cost,
            heuristic_cost,
            total_cost: previous_cost + heuristic_cost,
            predecessor,
        }
    }

    /// Creates the first Waypoint of a search: no predecessor and no Cost so far
    pub fn start(location: Coordinate, heuristic_cost: Cost) -> Waypoint {
        Waypoint::new(location, 0.0, heuristic_cost, None)
    }

    /// The position of this Waypoint
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// The Cost of the best known Path from the start to this Waypoint (g)
    pub fn previous_cost(&self) -> Cost {
        self.previous_cost
    }

    /// The estimated Cost from this Waypoint to the goal (h)
    pub fn heuristic_cost(&self) -> Cost {
        self.heuristic_cost
    }

    /// `previous_cost + heuristic_cost` (f)
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// The Waypoint this one was reached from, or `None` for the start
    pub fn predecessor(&self) -> Option<&Arc<Waypoint>> {
        self.predecessor.as_ref()
    }

    /// Iterates over this Waypoint followed by all of its predecessors, ending at the start.
    ///
    /// ## Examples
    /// ```
    /// # use waypoint_search::{Coordinate, Waypoint};
    /// # use std::sync::Arc;
    /// let a = Arc::new(Waypoint::start(Coordinate::new(0, 0), 0.0));
    /// let b = Arc::new(Waypoint::new(Coordinate::new(0, 1), 1.0, 0.0, Some(a)));
    /// let c = Waypoint::new(Coordinate::new(0, 2), 2.0, 0.0, Some(b));
    ///
    /// let chain: Vec<_> = c.ancestors().map(|w| w.location().y).collect();
    /// assert_eq!(chain, vec![2, 1, 0]);
    /// ```
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            current: Some(self),
        }
    }

    /// The number of steps between the start and this Waypoint
    pub fn steps(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl PartialEq for Waypoint {
    /// Waypoints are equal if they describe the same step: same location, same Costs and the
    /// same predecessor location. Whole chains are not compared.
    fn eq(&self, rhs: &Waypoint) -> bool {
        self.location == rhs.location
            && self.previous_cost == rhs.previous_cost
            && self.heuristic_cost == rhs.heuristic_cost
            && self.predecessor.as_ref().map(|p| p.location)
                == rhs.predecessor.as_ref().map(|p| p.location)
    }
}

impl fmt::Debug for Waypoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Waypoint")
            .field("location", &self.location)
            .field("previous_cost", &self.previous_cost)
            .field("heuristic_cost", &self.heuristic_cost)
            .field("total_cost", &self.total_cost)
            .field("predecessor", &self.predecessor.as_ref().map(|p| p.location))
            .finish()
    }
}

impl Drop for Waypoint {
    fn drop(&mut self) {
        // unlink uniquely owned predecessors one by one instead of recursing down the chain
        let mut next = self.predecessor.take();
        while let Some(waypoint) = next {
            next = match Arc::try_unwrap(waypoint) {
                Ok(mut waypoint) => waypoint.predecessor.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a chain of Waypoints, see [`Waypoint::ancestors`]
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a Waypoint>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Waypoint;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.predecessor.as_deref();
        Some(current)
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}
