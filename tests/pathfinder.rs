use nanorand::{Rng, WyRand};
use waypoint_search::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// 0 = empty, 1 = swamp, 2 = wall
const GRID: [[usize; 5]; 5] = [
    [0, 2, 0, 0, 0],
    [0, 2, 2, 2, 2],
    [0, 1, 0, 0, 0],
    [0, 1, 0, 2, 0],
    [0, 0, 0, 2, 0],
];
const COST_MAP: [isize; 3] = [1, 10, -1];

fn grid_map<N: Neighborhood>(neighborhood: N) -> GridMap<N> {
    GridMap::from_rows(
        GRID.iter().map(|row| row.iter().map(|&t| COST_MAP[t])),
        neighborhood,
    )
    .unwrap()
}

fn points(path: &Path<Coordinate>) -> Vec<(i32, i32)> {
    path.iter().map(|&c| c.into()).collect()
}

/// Same Map, but without a heuristic, which turns the search into Dijkstra
struct NoHeuristic<M>(M);

impl<M: Map2D> Map2D for NoHeuristic<M> {
    fn neighbors(&self, location: Coordinate, buf: &mut Vec<Coordinate>) {
        self.0.neighbors(location, buf)
    }
    fn edge_cost(&self, from: Coordinate, to: Coordinate) -> Cost {
        self.0.edge_cost(from, to)
    }
    fn heuristic(&self, _: Coordinate, _: Coordinate) -> Cost {
        0.0
    }
    fn is_walkable(&self, location: Coordinate) -> bool {
        self.0.is_walkable(location)
    }
}

#[test]
fn manhattan() {
    init();
    let map = grid_map(ManhattanNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());

    let path = pathfinder
        .find_path(Coordinate::new(0, 0), Coordinate::new(4, 4))
        .unwrap()
        .unwrap();

    assert_eq!(path.cost(), 12.0);
    #[rustfmt::skip]
    assert_eq!(
        points(&path),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (2, 3), (2, 2), (3, 2), (4, 2), (4, 3), (4, 4)],
    );
}

#[test]
fn moore() {
    init();
    let map = grid_map(MooreNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());

    let path = pathfinder
        .find_path(Coordinate::new(0, 0), Coordinate::new(4, 4))
        .unwrap()
        .unwrap();

    assert_eq!(path.cost(), 8.0);
    assert_eq!(path.len(), 9);
    assert_eq!(path[0], Coordinate::new(0, 0));
    assert_eq!(path[8], Coordinate::new(4, 4));
}

#[test]
fn swamp_is_avoided_until_it_pays_off() {
    init();
    let mut map = grid_map(ManhattanNeighborhood);
    let start = Coordinate::new(0, 2);
    let goal = Coordinate::new(2, 2);

    // around the swamp: down, right, up
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let path = pathfinder.find_path(start, goal).unwrap().unwrap();
    assert_eq!(path.cost(), 6.0);

    // a cheap swamp is crossed directly
    map.set_tile_cost(Coordinate::new(1, 2), 1);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let path = pathfinder.find_path(start, goal).unwrap().unwrap();
    assert_eq!(points(&path), vec![(0, 2), (1, 2), (2, 2)]);
    assert_eq!(path.cost(), 2.0);
}

#[test]
fn unreachable_goal() {
    init();
    let map = grid_map(ManhattanNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let mut state = SearchState::new();

    let found = pathfinder
        .search(&mut state, Coordinate::new(0, 0), Coordinate::new(2, 0))
        .unwrap();

    assert!(found.is_none());
    assert_eq!(state.num_open(), 0);
    // every walkable tile outside the walled-in top right corner got closed
    assert_eq!(state.num_closed(), 25 - 7 - 3);
}

#[test]
fn solid_goal_is_unreachable() {
    init();
    let map = grid_map(ManhattanNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());

    let path = pathfinder
        .find_path(Coordinate::new(0, 0), Coordinate::new(1, 0))
        .unwrap();
    assert!(path.is_none());
}

#[test]
fn solid_start_is_not_expanded() {
    init();
    let map = GridMap::new(2, 1, vec![-1, 1], ManhattanNeighborhood).unwrap();
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let mut state = SearchState::new();

    let found = pathfinder
        .search(&mut state, Coordinate::new(0, 0), Coordinate::new(1, 0))
        .unwrap();
    assert!(found.is_none());
    assert_eq!(state.num_open() + state.num_closed(), 0);

    // the wall in the top row of the shared grid
    let map = grid_map(ManhattanNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    for goal in [Coordinate::new(0, 0), Coordinate::new(1, 0)] {
        assert_eq!(pathfinder.find_path(Coordinate::new(1, 0), goal), Ok(None));
    }
}

#[test]
fn off_grid_locations() {
    init();
    let map = grid_map(ManhattanNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());

    assert_eq!(
        pathfinder.find_path(Coordinate::new(0, 0), Coordinate::new(9, 9)),
        Ok(None)
    );
    assert_eq!(
        pathfinder.find_path(Coordinate::new(-1, 0), Coordinate::new(0, 0)),
        Ok(None)
    );
    assert_eq!(
        pathfinder.find_path(Coordinate::new(5, 5), Coordinate::new(5, 5)),
        Ok(None)
    );
}

#[test]
fn extreme_coordinates() {
    init();
    let map = GridMap::new(2, 1, vec![1, 1], MooreNeighborhood).unwrap();
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let max = Coordinate::new(i32::MAX, i32::MAX);
    let min = Coordinate::new(i32::MIN, i32::MIN);

    assert_eq!(pathfinder.find_path(max, min), Ok(None));
    assert_eq!(pathfinder.find_path(Coordinate::new(i32::MAX, 0), Coordinate::new(0, 0)), Ok(None));
    assert_eq!(pathfinder.find_path(Coordinate::new(0, 0), max), Ok(None));
    assert_eq!(pathfinder.find_path(Coordinate::new(0, 0), min), Ok(None));

    let map = GridMap::new(2, 1, vec![1, 1], ManhattanNeighborhood).unwrap();
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    assert_eq!(pathfinder.find_path(max, min), Ok(None));
    assert_eq!(pathfinder.find_path(Coordinate::new(0, 0), min), Ok(None));
}

#[test]
fn find_paths_keeps_order() {
    init();
    let map = grid_map(MooreNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let requests = [
        (Coordinate::new(0, 0), Coordinate::new(4, 4)),
        (Coordinate::new(0, 0), Coordinate::new(2, 0)),
        (Coordinate::new(4, 4), Coordinate::new(4, 4)),
        (Coordinate::new(0, 0), Coordinate::new(0, 4)),
    ];

    let results = pathfinder.find_paths(&requests);

    assert_eq!(results.len(), requests.len());
    for (result, &(start, goal)) in results.iter().zip(requests.iter()) {
        assert_eq!(result, &pathfinder.find_path(start, goal));
    }
    assert_eq!(results[1], Ok(None));
    assert_eq!(results[2].as_ref().unwrap().as_ref().unwrap().cost(), 0.0);
    assert_eq!(results[3].as_ref().unwrap().as_ref().unwrap().cost(), 4.0);
}

#[test]
fn matches_dijkstra_on_random_grids() {
    init();
    let mut rng = WyRand::new_seed(42);
    let size = 24;

    for _ in 0..20 {
        let tiles = (0..size * size)
            .map(|_| rng.generate_range(0_u32..8) as isize - 1)
            .collect();
        let map = GridMap::new(size, size, tiles, MooreNeighborhood).unwrap();
        let dijkstra = NoHeuristic(&map);

        let a_star = Pathfinder::new(&map, SearchConfig::default());
        let reference = Pathfinder::new(&dijkstra, SearchConfig::default());

        for _ in 0..10 {
            let mut point = || {
                Coordinate::new(
                    rng.generate_range(0..size as u32) as i32,
                    rng.generate_range(0..size as u32) as i32,
                )
            };
            let (start, goal) = (point(), point());

            let expected = reference.find_path(start, goal).unwrap();
            let actual = a_star.find_path(start, goal).unwrap();

            match (expected, actual) {
                (None, None) => {}
                (Some(expected), Some(actual)) => {
                    assert_eq!(expected.cost(), actual.cost(), "{} -> {}", start, goal);
                    assert_eq!(actual[0], start);
                    assert_eq!(actual[actual.len() - 1], goal);
                }
                (expected, actual) => panic!(
                    "{} -> {}: expected {:?}, got {:?}",
                    start, goal, expected, actual
                ),
            }
        }
    }
}

#[test]
fn path_steps_are_neighbors() {
    init();
    let map = grid_map(MooreNeighborhood);
    let pathfinder = Pathfinder::new(&map, SearchConfig::default());
    let path = pathfinder
        .find_path(Coordinate::new(0, 0), Coordinate::new(4, 2))
        .unwrap()
        .unwrap();

    let mut buf = vec![];
    let mut cost = 0.0;
    for pair in path.iter().collect::<Vec<_>>().windows(2) {
        buf.clear();
        map.neighbors(*pair[0], &mut buf);
        assert!(buf.contains(pair[1]));
        cost += map.edge_cost(*pair[0], *pair[1]);
    }
    assert_eq!(cost, path.cost());
}
