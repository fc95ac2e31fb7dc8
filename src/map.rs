use crate::{Coordinate, Cost};

/// The Map an A* search navigates.
///
/// The search never looks at the Map itself. It only asks for the neighbors of a location,
/// the Cost of a single step and an estimate of the remaining Cost to the goal. This allows
/// the user to store the Map in any format they want.
///
/// ## Heuristic
/// The Path found by a [`Pathfinder`](crate::Pathfinder) is only guaranteed to be optimal if
/// [`heuristic`](Map2D::heuristic) is
/// - admissible: it never overestimates the actual remaining Cost, and
/// - consistent: `heuristic(a, goal) <= edge_cost(a, b) + heuristic(b, goal)` for all neighbors.
///
/// Neither is checked. Violating them yields a worse Path, never an error. If there is no
/// proper way of estimating the Cost, simply return 0.
///
/// ## Examples
/// A corridor along the x axis:
/// ```
/// use waypoint_search::{Coordinate, Cost, Map2D};
///
/// struct Corridor(i32);
///
/// impl Map2D for Corridor {
///     fn neighbors(&self, loc: Coordinate, buf: &mut Vec<Coordinate>) {
///         for x in [loc.x - 1, loc.x + 1] {
///             if x >= 0 && x < self.0 {
///                 buf.push(Coordinate::new(x, 0));
///             }
///         }
///     }
///     fn edge_cost(&self, _: Coordinate, _: Coordinate) -> Cost {
///         1.0
///     }
///     fn heuristic(&self, loc: Coordinate, goal: Coordinate) -> Cost {
///         (goal.x - loc.x).abs() as Cost
///     }
/// }
///
/// let mut buf = vec![];
/// Corridor(3).neighbors(Coordinate::new(0, 0), &mut buf);
/// assert_eq!(buf, vec![Coordinate::new(1, 0)]);
/// ```
pub trait Map2D {
    /// Appends all locations reachable in one step from `location` to `buf`.
    ///
    /// `buf` is cleared by the caller.
    fn neighbors(&self, location: Coordinate, buf: &mut Vec<Coordinate>);
    /// The Cost of stepping from `from` to its neighbor `to`. Must be finite and non-negative.
    fn edge_cost(&self, from: Coordinate, to: Coordinate) -> Cost;
    /// An estimate of the Cost to get from `location` to `goal`
    fn heuristic(&self, location: Coordinate, goal: Coordinate) -> Cost;
    /// Whether a search may start at `location`. Maps with solid or bounded areas should return
    /// `false` for those.
    ///
    /// The default accepts every location.
    fn is_walkable(&self, location: Coordinate) -> bool {
        let _ = location;
        true
    }
}

impl<M: Map2D + ?Sized> Map2D for &M {
    fn neighbors(&self, location: Coordinate, buf: &mut Vec<Coordinate>) {
        (**self).neighbors(location, buf)
    }
    fn edge_cost(&self, from: Coordinate, to: Coordinate) -> Cost {
        (**self).edge_cost(from, to)
    }
    fn heuristic(&self, location: Coordinate, goal: Coordinate) -> Cost {
        (**self).heuristic(location, goal)
    }
    fn is_walkable(&self, location: Coordinate) -> bool {
        (**self).is_walkable(location)
    }
}
