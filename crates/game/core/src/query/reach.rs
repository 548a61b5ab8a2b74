use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::state::{Grid, Position};

impl Grid {
    /// Cells reachable from `origin` in at most `radius` orthogonal steps.
    ///
    /// Breadth first, expanding North, South, East, West. A cell is settled on
    /// its first dequeue. The origin is always part of the result, even when
    /// it is blocked; any other blocked cell is neither returned nor expanded.
    /// Out of range origins are clamped.
    pub fn reachable(&self, origin: Position, radius: u32) -> Vec<Position> {
        let origin = self.clamp(origin);
        let mut reached = Vec::new();
        let mut visited = HashSet::new();
        let mut frontier = VecDeque::from([(origin, i64::from(radius))]);

        while let Some((position, remaining)) = frontier.pop_front() {
            if !visited.insert(position) || remaining < 0 {
                continue;
            }
            if position != origin && self.is_blocked(position) {
                continue;
            }

            reached.push(position);
            for next in position.neighbours() {
                if self.contains(next) {
                    frontier.push_back((next, remaining - 1));
                }
            }
        }

        reached
    }

    /// Uniformly random cell among [`Grid::reachable`].
    pub fn random_reachable<R: Rng + ?Sized>(
        &self,
        origin: Position,
        steps: u32,
        rng: &mut R,
    ) -> Option<Position> {
        self.reachable(origin, steps).choose(rng).copied()
    }
}
