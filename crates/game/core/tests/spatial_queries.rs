use std::collections::{HashMap, VecDeque};

use waves_core::{
    Actor, ActorId, AreaShape, Faction, GameState, GeneProfile, Grid, Position, ShipProfile,
    ShipStats,
};

/// Plain BFS distances over unblocked cells, used as a reference.
fn bfs_distances(grid: &Grid, origin: Position) -> HashMap<Position, u32> {
    let mut distances = HashMap::from([(origin, 0)]);
    let mut queue = VecDeque::from([origin]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for next in current.neighbours() {
            if !grid.contains(next) || grid.is_blocked(next) || distances.contains_key(&next) {
                continue;
            }
            distances.insert(next, next_distance);
            queue.push_back(next);
        }
    }
    distances
}

fn archipelago() -> Grid {
    Grid::from_rows(&[
        "..#....",
        "..#.##.",
        "....#..",
        ".##....",
        "...#.#.",
        "#......",
    ])
    .unwrap()
}

#[test]
fn reachable_always_contains_origin_and_respects_distance() {
    let grid = archipelago();
    for origin in grid.cells().map(|cell| cell.position()) {
        let distances = bfs_distances(&grid, origin);
        for radius in 0..5 {
            let reached = grid.reachable(origin, radius);
            assert!(reached.contains(&origin), "origin {origin} radius {radius}");

            for cell in reached.iter().filter(|cell| **cell != origin) {
                assert!(!grid.is_blocked(*cell));
                assert!(distances[cell] <= radius, "{cell} from {origin}");
            }

            let expected = distances.values().filter(|d| **d <= radius).count();
            assert_eq!(reached.len(), expected, "origin {origin} radius {radius}");
        }
    }
}

#[test]
fn up_ray_length_matches_clipped_distance() {
    let grid = Grid::new(6, 6).unwrap();
    for y in 0..6 {
        let origin = Position::new(3, y);
        for range in 0..8u32 {
            let clipped = range.min((5 - y) as u32);
            for dead_zone in 0..4u32 {
                let cells = grid.targets_for(AreaShape::Up, origin, range, dead_zone);
                assert_eq!(cells.len() as u32, clipped.saturating_sub(dead_zone));
                for cell in cells {
                    let distance = cell.manhattan_distance(origin);
                    assert!(distance > dead_zone && distance <= clipped);
                }
            }
        }
    }
}

#[test]
fn area_membership_is_exactly_the_annulus() {
    let grid = archipelago();
    let origin = Position::new(3, 2);
    for range in 0..5u32 {
        for dead_zone in 0..3u32 {
            let cells = grid.targets_for(AreaShape::Area, origin, range, dead_zone);
            assert!(!cells.contains(&origin));
            for cell in grid.cells().map(|cell| cell.position()) {
                let distance = origin.euclidean_distance(cell);
                let expected = distance > dead_zone as f32 && distance <= range as f32;
                assert_eq!(cells.contains(&cell), expected);
            }
        }
    }
}

#[test]
fn zero_budget_path_exists_only_in_place() {
    let grid = archipelago();
    let here = Position::new(0, 0);
    assert_eq!(grid.path(here, here, 0, true), vec![here]);
    for other in grid.cells().map(|cell| cell.position()).filter(|p| *p != here) {
        assert!(grid.path(here, other, 0, true).is_empty());
        assert!(grid.path(here, other, 0, false).is_empty());
    }
}

#[test]
fn paths_are_shortest_and_avoid_rocks() {
    let grid = archipelago();
    let origin = Position::new(0, 0);
    let distances = bfs_distances(&grid, origin);

    for (target, distance) in &distances {
        let route = grid.path(origin, *target, 20, true);
        assert_eq!(route.len() as u32, distance + 1, "to {target}");
        assert_eq!(route.first(), Some(&origin));
        assert_eq!(route.last(), Some(target));
        assert!(route.iter().skip(1).all(|cell| !grid.is_blocked(*cell)));

        if *distance > 0 {
            assert!(grid.path(origin, *target, distance - 1, true).is_empty());
        }
    }
}

fn frigate(id: u32) -> Actor {
    Actor::ai_ship(
        ActorId(id),
        "frigate",
        ShipProfile::new(ShipStats::default(), None),
        Faction::Navy,
        GeneProfile::default(),
        10,
    )
}

#[test]
fn anchored_ship_seals_the_only_exit_until_it_leaves() {
    let mut state = GameState::new(Grid::from_rows(&["...", "##.", "..."]).unwrap());
    let start = Position::new(0, 0);
    let harbour = Position::new(0, 2);
    let blocker = state.spawn(frigate(1), Position::new(1, 0)).unwrap();

    assert_eq!(state.grid().reachable(start, 6), vec![start]);
    assert!(state.grid().path(start, harbour, 6, true).is_empty());

    state.detach(blocker);
    assert!(state.grid().reachable(start, 6).contains(&harbour));
    assert_eq!(state.grid().path(start, harbour, 6, true).len(), 7);
}

#[test]
fn paths_steer_around_ships() {
    let mut state = GameState::new(Grid::new(3, 3).unwrap());
    let start = Position::new(0, 0);
    let goal = Position::new(0, 2);
    let ship_cell = Position::new(0, 1);
    state.spawn(frigate(1), ship_cell).unwrap();

    let route = state.grid().path(start, goal, 6, true);
    assert_eq!(route.len(), 5);
    assert!(!route.contains(&ship_cell));

    let reached = state.grid().reachable(start, 2);
    assert!(!reached.contains(&ship_cell));
    assert!(!reached.contains(&goal));

    // Ignoring blockers, the straight line is back.
    assert_eq!(
        state.grid().path(start, goal, 6, false),
        vec![start, ship_cell, goal]
    );
}
