use std::fmt;

/// Unique identifier for any actor placed on the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
///
/// `y` grows "up": the `Up` ray walks towards larger `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (taxicab) distance in cells.
    #[inline]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance between cell indices.
    #[inline]
    pub fn euclidean_distance(self, other: Position) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// The four orthogonal neighbours in search order: North, South, East, West.
    #[inline]
    pub const fn neighbours(self) -> [Position; 4] {
        [
            self.offset(0, 1),
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(-1, 0),
        ]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Integer health meter tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Full health meter.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Current health as a fraction of maximum in `[0, 1]`.
    ///
    /// A meter with zero maximum reports `0.0`.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount` and returns the health actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.euclidean_distance(b), 5.0);
        assert_eq!(b.manhattan_distance(a), 7);
    }

    #[test]
    fn neighbour_order_is_north_south_east_west() {
        let p = Position::new(2, 2);
        assert_eq!(
            p.neighbours(),
            [
                Position::new(2, 3),
                Position::new(2, 1),
                Position::new(3, 2),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn health_ratio_and_damage() {
        let mut health = Health::full(10);
        assert_eq!(health.ratio(), 1.0);
        assert_eq!(health.apply_damage(4), 4);
        assert_eq!(health.ratio(), 0.6);
        assert_eq!(health.apply_damage(20), 6);
        assert!(health.is_depleted());
        assert_eq!(Health::new(0, 0).ratio(), 0.0);
    }
}
