use crate::state::{Grid, Position};

use super::AreaShape;

impl Grid {
    /// Cells covered by `shape` from `origin`.
    ///
    /// Rays stop at the grid edge. The distance actually covered after
    /// clipping is what `dead_zone` is subtracted from, so a ray returns
    /// `clipped - dead_zone` cells, listed from the far end back towards the
    /// origin. `Area` keeps every cell with `dead_zone < distance <= range`,
    /// scanning columns left to right.
    ///
    /// Blocked cells are included; targeting ignores blocking.
    pub fn targets_for(
        &self,
        shape: AreaShape,
        origin: Position,
        range: u32,
        dead_zone: u32,
    ) -> Vec<Position> {
        let origin = self.clamp(origin);
        match shape {
            AreaShape::Area => self.disc(origin, range, dead_zone),
            shape => shape
                .rays()
                .iter()
                .flat_map(|&step| self.ray(origin, step, range, dead_zone))
                .collect(),
        }
    }

    /// Cells in the disc `dead_zone < distance <= radius` around `center`.
    pub fn disc(&self, center: Position, radius: u32, dead_zone: u32) -> Vec<Position> {
        let reach = radius.min(i32::MAX as u32) as i32;
        let x_range = (center.x.saturating_sub(reach)).max(0)
            ..=(center.x.saturating_add(reach)).min(self.width() as i32 - 1);
        let y_lo = center.y.saturating_sub(reach).max(0);
        let y_hi = center.y.saturating_add(reach).min(self.height() as i32 - 1);

        let mut cells = Vec::new();
        for x in x_range {
            for y in y_lo..=y_hi {
                let candidate = Position::new(x, y);
                let distance = center.euclidean_distance(candidate);
                if distance <= radius as f32 && distance > dead_zone as f32 {
                    cells.push(candidate);
                }
            }
        }
        cells
    }

    fn ray(
        &self,
        origin: Position,
        (dx, dy): (i32, i32),
        range: u32,
        dead_zone: u32,
    ) -> impl Iterator<Item = Position> {
        let clipped = self.steps_to_edge(origin, dx, dy).min(range);
        (dead_zone.saturating_add(1)..=clipped)
            .rev()
            .map(move |i| origin.offset(dx * i as i32, dy * i as i32))
    }

    /// In-bounds steps from `origin` along `(dx, dy)` before leaving the grid.
    fn steps_to_edge(&self, origin: Position, dx: i32, dy: i32) -> u32 {
        let limit = |coordinate: i32, delta: i32, size: u32| -> u32 {
            match delta.signum() {
                1 => size - 1 - coordinate as u32,
                -1 => coordinate as u32,
                _ => u32::MAX,
            }
        };
        limit(origin.x, dx, self.width()).min(limit(origin.y, dy, self.height()))
    }
}
