use rand::Rng;

use crate::query::AreaShape;
use crate::state::{Grid, Position, ShipProfile};

use super::Dice;

/// A ship's cannon: where it can fire and how hard it hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub shape: AreaShape,
    /// Size of the target area.
    pub range: u32,
    /// Cells this close to the ship cannot be fired upon.
    pub dead_zone: u32,
    pub damage: Dice,
}

impl WeaponProfile {
    pub fn new(shape: AreaShape, range: u32, dead_zone: u32, damage: Dice) -> Self {
        Self {
            shape,
            range,
            dead_zone,
            damage,
        }
    }

    pub fn roll_damage<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.damage.roll(rng)
    }

    /// Cells this weapon covers when fired from `origin`.
    pub fn targets(&self, grid: &Grid, origin: Position) -> Vec<Position> {
        grid.targets_for(self.shape, origin, self.range, self.dead_zone)
    }
}

impl ShipProfile {
    /// Damage of one attack: strength plus the weapon roll.
    ///
    /// `None` for unarmed ships.
    pub fn roll_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u32> {
        self.weapon
            .as_ref()
            .map(|weapon| self.stats.strength.saturating_add(weapon.roll_damage(rng)))
    }

    /// Initiative for ordering turns: speed plus the initiative die.
    pub fn roll_initiative<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.stats.speed.saturating_add(self.initiative.roll(rng))
    }
}
