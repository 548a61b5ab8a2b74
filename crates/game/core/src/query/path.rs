use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::state::{Grid, Position};

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    position: Position,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u64) {
        (self.f, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest f, oldest entry first.
        other.key().cmp(&self.key())
    }
}

impl Grid {
    /// Shortest orthogonal route from `from` to `to` using at most
    /// `step_budget` steps.
    ///
    /// A* with a Manhattan heuristic and unit step cost. Nodes whose cost has
    /// reached the budget are not expanded. With `respect_blocking`, blocked
    /// cells are never entered (the start cell itself may be blocked by the
    /// walker). Equal scores resolve in insertion order.
    ///
    /// Returns the route including both endpoints, or an empty vector when no
    /// route fits the budget or either endpoint lies outside the grid.
    pub fn path(
        &self,
        from: Position,
        to: Position,
        step_budget: u32,
        respect_blocking: bool,
    ) -> Vec<Position> {
        if !self.contains(from) || !self.contains(to) {
            return Vec::new();
        }

        let mut open = BinaryHeap::new();
        let mut closed = HashSet::new();
        let mut best_cost = HashMap::from([(from, 0u32)]);
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut tie: u64 = 0;

        open.push(OpenNode {
            f: from.manhattan_distance(to),
            g: 0,
            position: from,
            tie,
        });

        while let Some(node) = open.pop() {
            if node.position == to {
                return Self::reconstruct(&came_from, to);
            }
            if !closed.insert(node.position) || node.g >= step_budget {
                continue;
            }

            for next in node.position.neighbours() {
                if !self.contains(next) || closed.contains(&next) {
                    continue;
                }
                if respect_blocking && self.is_blocked(next) {
                    continue;
                }

                let g = node.g + 1;
                if best_cost.get(&next).is_some_and(|&known| known <= g) {
                    continue;
                }
                best_cost.insert(next, g);
                came_from.insert(next, node.position);
                tie += 1;
                open.push(OpenNode {
                    f: g + next.manhattan_distance(to),
                    g,
                    position: next,
                    tie,
                });
            }
        }

        Vec::new()
    }

    fn reconstruct(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
        let mut route = vec![goal];
        let mut current = goal;
        while let Some(&previous) = came_from.get(&current) {
            route.push(previous);
            current = previous;
        }
        route.reverse();
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_only_reaches_itself() {
        let grid = Grid::new(3, 3).unwrap();
        let here = Position::new(1, 1);
        assert_eq!(grid.path(here, here, 0, true), vec![here]);
        assert!(grid.path(here, Position::new(1, 2), 0, true).is_empty());
    }

    #[test]
    fn straight_route_on_open_water() {
        let grid = Grid::new(5, 5).unwrap();
        let route = grid.path(Position::new(0, 0), Position::new(0, 3), 5, true);
        assert_eq!(
            route,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
            ]
        );
    }

    #[test]
    fn equal_cost_routes_prefer_the_earliest_expansion() {
        // Both corners are equally short; north is expanded before east.
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.path(Position::new(0, 0), Position::new(1, 1), 4, true),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );

        // South is expanded before west.
        assert_eq!(
            grid.path(Position::new(1, 1), Position::new(0, 0), 4, true),
            vec![
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(0, 0)
            ]
        );
    }

    #[test]
    fn routes_around_rocks_within_budget() {
        let grid = Grid::from_rows(&["...", "##.", "..."]).unwrap();
        let from = Position::new(0, 0);
        let to = Position::new(0, 2);

        let route = grid.path(from, to, 6, true);
        assert_eq!(route.len(), 7);
        assert!(route.iter().all(|p| !grid.is_blocked(*p)));
        for pair in route.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }

        assert!(grid.path(from, to, 5, true).is_empty());
        assert_eq!(grid.path(from, to, 2, false).len(), 3);
    }

    #[test]
    fn blocked_destination_is_unreachable_when_respecting_blocking() {
        let grid = Grid::from_rows(&["..#"]).unwrap();
        assert!(
            grid.path(Position::new(0, 0), Position::new(2, 0), 5, true)
                .is_empty()
        );
    }

    #[test]
    fn out_of_grid_endpoints_have_no_route() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(
            grid.path(Position::new(0, 0), Position::new(3, 0), 9, false)
                .is_empty()
        );
    }
}
