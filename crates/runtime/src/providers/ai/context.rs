//! Read-only view of the battle from one AI ship's perspective.

use waves_core::{Actor, ActorId, GameState, GeneProfile, Position, ShipProfile, TurnBudget};

use crate::error::{Result, RuntimeError};

/// Everything the scoring functions need to know about the deciding ship.
///
/// The context borrows the [`GameState`] immutably, so a decision can never
/// observe a half-applied move.
pub struct AiContext<'a> {
    /// The ship making the decision.
    pub entity: ActorId,

    /// Read-only access to the current game state.
    pub state: &'a GameState,

    /// The deciding ship itself.
    pub me: &'a Actor,

    /// The ship's personality.
    pub genes: &'a GeneProfile,

    /// Stats and weapon of the ship.
    pub ship: &'a ShipProfile,

    /// Where the ship currently is.
    pub position: Position,

    /// Steps and actions left this turn.
    pub budget: TurnBudget,
}

impl<'a> AiContext<'a> {
    /// Builds the context for `entity`.
    ///
    /// # Errors
    ///
    /// Fails when the actor is unknown, not an AI ship, or no longer placed.
    pub fn new(entity: ActorId, state: &'a GameState, budget: TurnBudget) -> Result<Self> {
        let me = state
            .actor(entity)
            .ok_or(RuntimeError::UnknownActor(entity))?;
        let (Some(ship), Some(genes)) = (me.ship(), me.genes()) else {
            return Err(RuntimeError::NotAnAiShip(entity));
        };
        let position = me.position.ok_or(RuntimeError::NotPlaced(entity))?;

        Ok(Self {
            entity,
            state,
            me,
            genes,
            ship,
            position,
            budget,
        })
    }

    /// Own health as a fraction in `[0, 1]`.
    pub fn health_ratio(&self) -> f32 {
        self.me.health.ratio()
    }

    /// Actors on `cell` other than the deciding ship.
    pub fn others_at(&self, cell: Position) -> impl Iterator<Item = &'a Actor> + '_ {
        let me = self.entity;
        self.state
            .occupants_at(cell)
            .filter(move |actor| actor.id != me)
    }

    /// Cells within the ship's sight of `cell`, `cell` itself excluded.
    pub fn awareness_area(&self, cell: Position) -> Vec<Position> {
        self.state.grid().disc(cell, self.ship.stats.sight, 0)
    }
}
