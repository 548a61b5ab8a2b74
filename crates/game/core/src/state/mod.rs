//! Authoritative battle state.
//!
//! [`GameState`] owns the [`Grid`] and every [`Actor`]. The grid only stores
//! occupant references; actor data lives in the state's registry. All
//! placement goes through `GameState` so an actor's recorded position and the
//! grid's occupant lists never disagree.
pub mod actor;
pub mod common;
pub mod genes;
pub mod grid;
pub mod turn;

use std::collections::BTreeMap;

use crate::error::StateError;

pub use actor::{Actor, ActorFlags, ActorKind, Faction, ShipProfile, ShipStats, WaveProfile};
pub use common::{ActorId, Health, Position};
pub use genes::GeneProfile;
pub use grid::{Cell, CellLookup, CellType, Grid, GridDimensions, Occupant};
pub use turn::TurnBudget;

/// Grid plus the actors standing on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    grid: Grid,
    actors: BTreeMap<ActorId, Actor>,
}

impl GameState {
    /// Creates a state with no actors.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            actors: BTreeMap::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Smallest id greater than every registered actor id.
    pub fn next_actor_id(&self) -> ActorId {
        self.actors
            .keys()
            .next_back()
            .map_or(ActorId(0), |last| ActorId(last.0 + 1))
    }

    /// Registers `actor` and places it on `position`.
    ///
    /// # Errors
    ///
    /// - [`StateError::DuplicateActor`] if the id is already registered
    /// - [`StateError::ReservedFaction`] for an AI ship of [`Faction::Player`]
    /// - [`StateError::Grid`] if the cell is out of bounds or full
    pub fn spawn(&mut self, mut actor: Actor, position: Position) -> Result<ActorId, StateError> {
        let id = actor.id;
        if self.actors.contains_key(&id) {
            return Err(StateError::DuplicateActor(id));
        }
        if let ActorKind::AiShip {
            faction: Faction::Player,
            ..
        } = actor.kind
        {
            return Err(StateError::ReservedFaction(id));
        }

        self.grid.add_occupant(position, actor.occupant())?;
        actor.position = Some(position);
        self.actors.insert(id, actor);
        Ok(id)
    }

    /// Moves an actor to `to`, leaving its previous cell first.
    ///
    /// When the destination rejects the actor it stays where it was.
    pub fn move_actor(&mut self, id: ActorId, to: Position) -> Result<(), StateError> {
        let actor = self.actors.get(&id).ok_or(StateError::UnknownActor(id))?;
        let from = actor.position.ok_or(StateError::NotPlaced(id))?;
        if from == to {
            return Ok(());
        }
        let occupant = actor.occupant();

        self.grid.remove_occupant(from, id);
        if let Err(err) = self.grid.add_occupant(to, occupant) {
            self.grid.add_occupant(from, occupant)?;
            return Err(err.into());
        }

        if let Some(actor) = self.actors.get_mut(&id) {
            actor.position = Some(to);
        }
        Ok(())
    }

    /// Takes an actor off the grid while keeping its record.
    ///
    /// Returns the cell it stood on, or `None` if it was not placed.
    pub fn detach(&mut self, id: ActorId) -> Option<Position> {
        let actor = self.actors.get_mut(&id)?;
        let position = actor.position.take()?;
        self.grid.remove_occupant(position, id);
        Some(position)
    }

    /// Removes an actor from the grid and the registry.
    pub fn remove_actor(&mut self, id: ActorId) -> Result<Actor, StateError> {
        self.detach(id);
        self.actors.remove(&id).ok_or(StateError::UnknownActor(id))
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub(crate) fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// All registered actors in id order, including destroyed ones.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values()
    }

    /// Ships still on the grid, in id order.
    pub fn ships(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors
            .values()
            .filter(|actor| actor.is_ship() && actor.position.is_some())
    }

    /// Actors standing on `position` in placement order.
    ///
    /// Out of bounds positions yield nothing.
    pub fn occupants_at(&self, position: Position) -> impl Iterator<Item = &Actor> + '_ {
        self.grid
            .cell(position)
            .into_iter()
            .flat_map(|cell| cell.occupant_ids())
            .filter_map(|id| self.actors.get(&id))
    }

    /// Whether nothing stands on `position`.
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.grid.cell(position).is_none_or(|cell| cell.is_empty())
    }
}
