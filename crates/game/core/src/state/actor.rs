//! Actor model: everything that can stand on a cell.
use bitflags::bitflags;

use crate::combat::{Dice, WeaponProfile};
use crate::query::AreaShape;

use super::{ActorId, GeneProfile, Health, Occupant, Position};

bitflags! {
    /// Behavioural switches shared by every actor kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActorFlags: u8 {
        /// The actor turns its cell `Blocked`.
        const BLOCKS_MOVEMENT = 1 << 0;
        /// Ships stepping onto the actor's cell trigger its step effect.
        const HAS_STEP_EFFECT = 1 << 1;
        /// Damage reduces health and can destroy the actor.
        const DESTRUCTIBLE    = 1 << 2;
    }
}

/// Allegiance of a combatant ship.
///
/// Player ships always belong to [`Faction::Player`] and AI ships never do,
/// so the player is an enemy of every AI ship. Two ships are enemies when
/// their factions differ.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Player,
    Pirates,
    Navy,
    Merchants,
    Corsairs,
}

/// Base statistics of a ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShipStats {
    /// Added to every weapon roll.
    pub strength: u32,
    /// Steps available per turn.
    pub speed: u32,
    /// Chance out of the resist die to shrug off a wave push.
    pub stability: u32,
    /// Awareness radius used when scoring movement.
    pub sight: u32,
    /// Subtracted from incoming damage.
    pub sturdiness: u32,
    /// Actions available per turn.
    pub spirit: u32,
}

/// Everything a ship brings into battle besides its health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipProfile {
    pub stats: ShipStats,
    pub weapon: Option<WeaponProfile>,
    /// Rolled and added to `speed` to order ships at the start of a level.
    pub initiative: Dice,
}

impl ShipProfile {
    pub fn new(stats: ShipStats, weapon: Option<WeaponProfile>) -> Self {
        Self {
            stats,
            weapon,
            initiative: Dice::D6,
        }
    }
}

/// Hazard parameters of a wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveProfile {
    /// Shape of both the push area and the eruption footprint.
    pub direction: AreaShape,
    /// Size of the footprint hit when the wave is struck.
    pub area_of_effect: u32,
    /// How far a ship stepping on the wave may be thrown.
    pub push_distance: u32,
    /// Damage dealt to ships stepping on the wave.
    pub damage: u32,
}

/// Closed set of actor variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActorKind {
    PlayerShip {
        ship: ShipProfile,
    },
    AiShip {
        ship: ShipProfile,
        faction: Faction,
        genes: GeneProfile,
    },
    Target {
        sturdiness: u32,
    },
    Wave(WaveProfile),
    Obstacle,
}

impl ActorKind {
    /// Flags an actor of this kind carries unless overridden.
    pub fn default_flags(&self) -> ActorFlags {
        match self {
            Self::PlayerShip { .. } | Self::AiShip { .. } | Self::Target { .. } => {
                ActorFlags::BLOCKS_MOVEMENT | ActorFlags::DESTRUCTIBLE
            }
            Self::Wave(_) => ActorFlags::HAS_STEP_EFFECT,
            Self::Obstacle => ActorFlags::BLOCKS_MOVEMENT,
        }
    }
}

/// An actor placed in the battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    pub health: Health,
    pub flags: ActorFlags,
    /// Cell the actor currently stands on. `None` once destroyed.
    pub position: Option<Position>,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>, kind: ActorKind, max_health: u32) -> Self {
        let flags = kind.default_flags();
        Self {
            id,
            name: name.into(),
            kind,
            health: Health::full(max_health),
            flags,
            position: None,
        }
    }

    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn player_ship(id: ActorId, name: impl Into<String>, ship: ShipProfile, max_health: u32) -> Self {
        Self::new(id, name, ActorKind::PlayerShip { ship }, max_health)
    }

    pub fn ai_ship(
        id: ActorId,
        name: impl Into<String>,
        ship: ShipProfile,
        faction: Faction,
        genes: GeneProfile,
        max_health: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            ActorKind::AiShip {
                ship,
                faction,
                genes,
            },
            max_health,
        )
    }

    pub fn target(id: ActorId, name: impl Into<String>, sturdiness: u32, max_health: u32) -> Self {
        Self::new(id, name, ActorKind::Target { sturdiness }, max_health)
    }

    pub fn wave(id: ActorId, name: impl Into<String>, wave: WaveProfile) -> Self {
        Self::new(id, name, ActorKind::Wave(wave), 1)
    }

    pub fn obstacle(id: ActorId, name: impl Into<String>) -> Self {
        Self::new(id, name, ActorKind::Obstacle, 1)
    }

    /// Grid occupant record for this actor.
    pub fn occupant(&self) -> Occupant {
        Occupant::new(self.id, self.blocks_movement())
    }

    pub fn blocks_movement(&self) -> bool {
        self.flags.contains(ActorFlags::BLOCKS_MOVEMENT)
    }

    pub fn has_step_effect(&self) -> bool {
        self.flags.contains(ActorFlags::HAS_STEP_EFFECT)
    }

    pub fn is_destructible(&self) -> bool {
        self.flags.contains(ActorFlags::DESTRUCTIBLE)
    }

    pub fn is_ship(&self) -> bool {
        matches!(
            self.kind,
            ActorKind::PlayerShip { .. } | ActorKind::AiShip { .. }
        )
    }

    pub fn ship(&self) -> Option<&ShipProfile> {
        match &self.kind {
            ActorKind::PlayerShip { ship } | ActorKind::AiShip { ship, .. } => Some(ship),
            _ => None,
        }
    }

    pub fn genes(&self) -> Option<&GeneProfile> {
        match &self.kind {
            ActorKind::AiShip { genes, .. } => Some(genes),
            _ => None,
        }
    }

    pub fn wave_profile(&self) -> Option<&WaveProfile> {
        match &self.kind {
            ActorKind::Wave(wave) => Some(wave),
            _ => None,
        }
    }

    /// Faction of a combatant; `None` for everything that is not a ship.
    pub fn faction(&self) -> Option<Faction> {
        match &self.kind {
            ActorKind::PlayerShip { .. } => Some(Faction::Player),
            ActorKind::AiShip { faction, .. } => Some(*faction),
            _ => None,
        }
    }

    /// Whether both actors are ships fighting on opposite sides.
    pub fn is_enemy_of(&self, other: &Actor) -> bool {
        match (self.faction(), other.faction()) {
            (Some(mine), Some(theirs)) => mine != theirs,
            _ => false,
        }
    }

    /// Whether both actors are ships of the same faction.
    pub fn is_ally_of(&self, other: &Actor) -> bool {
        match (self.faction(), other.faction()) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }

    /// Damage subtracted from every incoming hit.
    pub fn sturdiness(&self) -> u32 {
        match &self.kind {
            ActorKind::PlayerShip { ship } | ActorKind::AiShip { ship, .. } => {
                ship.stats.sturdiness
            }
            ActorKind::Target { sturdiness } => *sturdiness,
            ActorKind::Wave(_) | ActorKind::Obstacle => 0,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.position.is_none() && self.health.is_depleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(id: u32, faction: Faction) -> Actor {
        Actor::ai_ship(
            ActorId(id),
            "sloop",
            ShipProfile::new(ShipStats::default(), None),
            faction,
            GeneProfile::default(),
            10,
        )
    }

    #[test]
    fn allegiance() {
        let player = Actor::player_ship(
            ActorId(0),
            "flagship",
            ShipProfile::new(ShipStats::default(), None),
            10,
        );
        let pirate = ship(1, Faction::Pirates);
        let other_pirate = ship(2, Faction::Pirates);
        let navy = ship(3, Faction::Navy);
        let buoy = Actor::target(ActorId(4), "buoy", 0, 3);

        assert!(pirate.is_enemy_of(&player));
        assert!(pirate.is_enemy_of(&navy));
        assert!(pirate.is_ally_of(&other_pirate));
        assert!(!pirate.is_enemy_of(&buoy));
        assert!(!pirate.is_ally_of(&buoy));
    }

    #[test]
    fn default_flags_follow_kind() {
        let wave = Actor::wave(
            ActorId(1),
            "swell",
            WaveProfile {
                direction: AreaShape::Up,
                area_of_effect: 2,
                push_distance: 2,
                damage: 1,
            },
        );
        assert!(wave.has_step_effect());
        assert!(!wave.blocks_movement());
        assert!(!wave.occupant().blocks);

        let rock = Actor::obstacle(ActorId(2), "rock");
        assert!(rock.blocks_movement());
        assert!(!rock.is_destructible());

        assert!(ship(3, Faction::Navy).occupant().blocks);
    }

    #[test]
    fn faction_parses_case_insensitively() {
        assert_eq!("NAVY".parse::<Faction>().unwrap(), Faction::Navy);
        assert_eq!(Faction::Corsairs.to_string(), "corsairs");
    }
}
