//! A tile Grid implementation of [`Map2D`] and the most common Neighborhoods

use crate::{Coordinate, Cost, Error, Map2D, Result};
use std::fmt::Debug;

/// The movement rules on a [`GridMap`].
///
/// A Neighborhood knows which offsets a single step may take and how many steps separate two
/// Coordinates when nothing is in the way. The GridMap multiplies that step count with its
/// cheapest Tile to get a heuristic.
///
/// Provided implementations:
/// - [`ManhattanNeighborhood`]: steps along the x and y axes only
/// - [`MooreNeighborhood`]: axis steps plus the 4 diagonal ones
pub trait Neighborhood: Clone + Debug {
    /// Pushes every Coordinate one step away from `point` that lies inside a Grid of `size`
    /// (width, height) onto `buf`. Solid Tiles are filtered out by the GridMap afterwards.
    fn get_all_neighbors(&self, point: Coordinate, size: (i32, i32), buf: &mut Vec<Coordinate>);
    /// Lower bound on the number of steps from `point` to `goal`, saturating at `u32::MAX`
    fn distance(&self, point: Coordinate, goal: Coordinate) -> u32;
}

fn push_offsets(
    offsets: &[(i32, i32)],
    point: Coordinate,
    (width, height): (i32, i32),
    buf: &mut Vec<Coordinate>,
) {
    buf.extend(
        offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                Some(Coordinate::new(
                    point.x.checked_add(dx)?,
                    point.y.checked_add(dy)?,
                ))
            })
            .filter(|c| c.x >= 0 && c.y >= 0 && c.x < width && c.y < height),
    );
}

/// Axis-aligned movement: one step changes either x or y by one.
///
/// The step count is the [taxicab distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
/// `|dx| + |dy|`.
///
/// ```no_code
/// S: current Tile, +: one step away
///   +
/// + S +
///   +
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanNeighborhood;

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Coordinate, size: (i32, i32), buf: &mut Vec<Coordinate>) {
        push_offsets(&[(0, -1), (1, 0), (0, 1), (-1, 0)], point, size, buf);
    }
    fn distance(&self, point: Coordinate, goal: Coordinate) -> u32 {
        point
            .x
            .abs_diff(goal.x)
            .saturating_add(point.y.abs_diff(goal.y))
    }
}

/// Axis-aligned and diagonal movement: one step changes x, y or both by one.
///
/// The step count is the [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance)
/// `max(|dx|, |dy|)`.
///
/// ```no_code
/// S: current Tile, +: one step away
/// + + +
/// + S +
/// + + +
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreNeighborhood;

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Coordinate, size: (i32, i32), buf: &mut Vec<Coordinate>) {
        push_offsets(
            &[
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
            ],
            point,
            size,
            buf,
        );
    }
    fn distance(&self, point: Coordinate, goal: Coordinate) -> u32 {
        point.x.abs_diff(goal.x).max(point.y.abs_diff(goal.y))
    }
}

/// A rectangular Grid of Tiles.
///
/// Every Tile has a Cost for walking onto it. A negative Cost means the Tile is solid: it never
/// appears as a neighbor and a search cannot start on it. The heuristic is the [`Neighborhood`]
/// distance multiplied by the cheapest walkable Tile, which keeps it admissible and consistent.
///
/// ## Examples
/// ```
/// use waypoint_search::prelude::*;
///
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid = [
///     [0, 2, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ];
/// const COST_MAP: [isize; 3] = [1, 5, -1];
///
/// let map = GridMap::from_rows(
///     grid.iter().map(|row| row.iter().map(|&t| COST_MAP[t])),
///     ManhattanNeighborhood,
/// )
/// .unwrap();
///
/// assert_eq!(map.size(), (3, 3));
/// assert!(!map.is_walkable(Coordinate::new(1, 0)));
/// assert_eq!(map.edge_cost(Coordinate::new(0, 1), Coordinate::new(1, 1)), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct GridMap<N: Neighborhood> {
    width: i32,
    height: i32,
    tiles: Vec<isize>,
    min_cost: Cost,
    neighborhood: N,
}

impl<N: Neighborhood> GridMap<N> {
    /// Creates a new GridMap from the Tile costs in row-major order.
    ///
    /// Fails with [`Error::InvalidArgument`] if `tiles` does not hold exactly `width * height`
    /// entries or the size does not fit into a [`Coordinate`].
    pub fn new(width: usize, height: usize, tiles: Vec<isize>, neighborhood: N) -> Result<Self> {
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "grid of {}x{} exceeds the coordinate range",
                    width, height
                )))
            }
        };
        if width.checked_mul(height) != Some(tiles.len()) {
            return Err(Error::InvalidArgument(format!(
                "expected {}x{} tiles, got {}",
                width,
                height,
                tiles.len()
            )));
        }
        let min_cost = cheapest_tile(&tiles);

        Ok(GridMap {
            width: w,
            height: h,
            tiles,
            min_cost,
            neighborhood,
        })
    }

    /// Creates a new GridMap from rows of Tile costs. All rows must have the same length.
    pub fn from_rows<R, T>(rows: R, neighborhood: N) -> Result<Self>
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = isize>,
    {
        let mut tiles = vec![];
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let before = tiles.len();
            tiles.extend(row);
            let len = tiles.len() - before;
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(Error::InvalidArgument(format!(
                        "row {} has {} tiles, expected {}",
                        height, len, w
                    )))
                }
                Some(_) => {}
            }
            height += 1;
        }
        GridMap::new(width.unwrap_or(0), height, tiles, neighborhood)
    }

    /// `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    /// The Neighborhood used for movement
    pub fn neighborhood(&self) -> &N {
        &self.neighborhood
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        if c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height {
            Some(c.y as usize * self.width as usize + c.x as usize)
        } else {
            None
        }
    }

    /// The Cost of the Tile at `c`, or `None` outside of the Grid
    pub fn tile_cost(&self, c: Coordinate) -> Option<isize> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Changes the Cost of the Tile at `c`. Returns `false` if `c` is outside of the Grid.
    pub fn set_tile_cost(&mut self, c: Coordinate, cost: isize) -> bool {
        let Some(i) = self.index(c) else {
            return false;
        };
        self.tiles[i] = cost;
        self.min_cost = cheapest_tile(&self.tiles);
        true
    }

    /// `true` if `c` is inside the Grid and not solid
    pub fn is_walkable(&self, c: Coordinate) -> bool {
        self.tile_cost(c).is_some_and(|cost| cost >= 0)
    }
}

fn cheapest_tile(tiles: &[isize]) -> Cost {
    tiles
        .iter()
        .filter(|&&cost| cost >= 0)
        .min()
        .map_or(0.0, |&cost| cost as Cost)
}

impl<N: Neighborhood> Map2D for GridMap<N> {
    fn neighbors(&self, location: Coordinate, buf: &mut Vec<Coordinate>) {
        if !self.is_walkable(location) {
            return;
        }
        let start = buf.len();
        self.neighborhood
            .get_all_neighbors(location, (self.width, self.height), buf);
        let mut kept = start;
        for i in start..buf.len() {
            if self.is_walkable(buf[i]) {
                buf[kept] = buf[i];
                kept += 1;
            }
        }
        buf.truncate(kept);
    }
    fn is_walkable(&self, location: Coordinate) -> bool {
        GridMap::is_walkable(self, location)
    }
    fn edge_cost(&self, _from: Coordinate, to: Coordinate) -> Cost {
        self.tile_cost(to).map_or(Cost::INFINITY, |cost| cost as Cost)
    }
    fn heuristic(&self, location: Coordinate, goal: Coordinate) -> Cost {
        self.neighborhood.distance(location, goal) as Cost * self.min_cost
    }
}
