//! Battle scenarios: a grid layout and who starts where.

use waves_core::{Actor, Faction, GameState, Grid, Position, WaveProfile};

use crate::catalog::{CatalogError, ShipCatalog};

/// One actor to place when the battle starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Placement {
    Player {
        name: String,
        ship: String,
        at: (i32, i32),
    },
    Ai {
        name: String,
        ship: String,
        faction: Faction,
        genes: String,
        at: (i32, i32),
    },
    Target {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        sturdiness: u32,
        health: u32,
        at: (i32, i32),
    },
    Wave {
        name: String,
        wave: WaveProfile,
        at: (i32, i32),
    },
    Obstacle {
        name: String,
        at: (i32, i32),
    },
}

impl Placement {
    pub fn name(&self) -> &str {
        match self {
            Placement::Player { name, .. }
            | Placement::Ai { name, .. }
            | Placement::Target { name, .. }
            | Placement::Wave { name, .. }
            | Placement::Obstacle { name, .. } => name,
        }
    }

    pub fn position(&self) -> Position {
        let at = match self {
            Placement::Player { at, .. }
            | Placement::Ai { at, .. }
            | Placement::Target { at, .. }
            | Placement::Wave { at, .. }
            | Placement::Obstacle { at, .. } => *at,
        };
        Position::from(at)
    }
}

/// A playable battle layout.
///
/// `rows` use `.` for open water and `#` for rocks; the first row is `y = 0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    pub rows: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placements: Vec<Placement>,
}

impl Scenario {
    /// Builds the initial game state.
    ///
    /// Actors receive ids in placement order, starting at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is malformed, a catalog reference is
    /// unknown, or an actor cannot be placed.
    pub fn build(&self, catalog: &ShipCatalog) -> Result<GameState, CatalogError> {
        let mut state = GameState::new(Grid::from_rows(self.rows.as_slice())?);

        for placement in &self.placements {
            let id = state.next_actor_id();
            let actor = match placement {
                Placement::Player { name, ship, .. } => {
                    let (profile, health) = catalog.ship(ship)?;
                    Actor::player_ship(id, name.as_str(), profile, health)
                }
                Placement::Ai {
                    name,
                    ship,
                    faction,
                    genes,
                    ..
                } => {
                    let (profile, health) = catalog.ship(ship)?;
                    let genes = catalog.genes(genes)?;
                    Actor::ai_ship(id, name.as_str(), profile, *faction, genes, health)
                }
                Placement::Target {
                    name,
                    sturdiness,
                    health,
                    ..
                } => Actor::target(id, name.as_str(), *sturdiness, *health),
                Placement::Wave { name, wave, .. } => Actor::wave(id, name.as_str(), *wave),
                Placement::Obstacle { name, .. } => Actor::obstacle(id, name.as_str()),
            };

            state
                .spawn(actor, placement.position())
                .map_err(|source| CatalogError::Placement {
                    name: placement.name().to_string(),
                    source,
                })?;
        }

        Ok(state)
    }
}
