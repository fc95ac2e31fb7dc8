use crate::{Coordinate, Cost, Waypoint};

use std::sync::Arc;

/// A Path found by a search
///
/// Stores the sequence of locations from start to goal and the total Cost of walking it.
/// The individual costs of the steps cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_search::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the number of Nodes in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<P> {
        self.path.iter()
    }
}

impl Path<Coordinate> {
    /// Rebuilds the Path leading to `goal` by following its predecessors back to the start
    ///
    /// ## Examples
    /// ```
    /// # use waypoint_search::{Coordinate, Path, Waypoint};
    /// # use std::sync::Arc;
    /// let a = Arc::new(Waypoint::start(Coordinate::new(0, 0), 0.0));
    /// let b = Waypoint::new(Coordinate::new(1, 0), 2.5, 0.0, Some(a));
    ///
    /// let path = Path::from_waypoint(&b);
    /// assert_eq!(path, vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
    /// assert_eq!(path.cost(), 2.5);
    /// ```
    pub fn from_waypoint(goal: &Waypoint) -> Path<Coordinate> {
        let mut steps: Vec<Coordinate> = goal.ancestors().map(Waypoint::location).collect();
        steps.reverse();
        Path::new(steps, goal.previous_cost())
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        *self.path == **rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        *self.path == **rhs
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42.0);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)], 1.5);

        assert_eq!(&format!("{}", path), "Path[Cost = 1.5]: (0, 0) -> (0, 1)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn from_start_waypoint() {
        let start = Waypoint::start(Coordinate::new(3, 3), 7.0);
        let path = Path::from_waypoint(&start);

        assert_eq!(path, vec![Coordinate::new(3, 3)]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn equal_cost_is_not_equal_path() {
        let a = Path::new(vec![1, 2], 3.0);
        let b = Path::new(vec![2, 1], 3.0);

        assert_ne!(a, b);
        assert_eq!(a, Path::new(vec![1, 2], 3.0));
        assert_ne!(a, Path::new(vec![1, 2], 4.0));
    }
}
