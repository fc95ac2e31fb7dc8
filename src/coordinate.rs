//! Positions on a 2D Map

use std::fmt;

/// A position on a 2D Map.
///
/// Coordinates are plain values: two Coordinates are equal (and hash equally) iff both
/// components are equal.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use waypoint_search::Coordinate;
/// let a = Coordinate::new(3, -1);
/// let b: Coordinate = (3, -1).into();
///
/// assert_eq!(a, b);
/// assert_eq!(Coordinate::default(), Coordinate::new(0, 0));
/// assert_eq!(a.to_string(), "(3, -1)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// the horizontal component
    pub x: i32,
    /// the vertical component
    pub y: i32,
}

impl Coordinate {
    /// Creates a new Coordinate at `(x, y)`
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Coordinate {
        Coordinate { x, y }
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> (i32, i32) {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Coordinate`]
pub type CoordinateMap<V> = hashbrown::HashMap<Coordinate, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Coordinate`]s
pub type CoordinateSet = hashbrown::HashSet<Coordinate>;
