//! Resolution of a committed move, including wave step effects.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::combat::Hit;
use crate::config::{GameConfig, WavePolicy};
use crate::error::StateError;
use crate::state::{ActorId, GameState, Position, TurnBudget, WaveProfile};

/// Why a move ended where it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MovementStop {
    /// The ship reached its destination.
    Arrived,
    /// No route fits the remaining steps; the ship did not move.
    PathNotFound,
    /// A wave threw the ship off its route.
    Pushed,
    /// A wave stopped the ship but had nowhere to throw it.
    Held,
}

/// Result of [`GameState::resolve_movement`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementOutcome {
    /// Planned route, both endpoints included. Empty when no route exists.
    pub path: Vec<Position>,
    pub final_position: Position,
    pub steps_spent: u32,
    pub stop: MovementStop,
    /// Wave that pushed or held the ship.
    pub pushed_by: Option<ActorId>,
    /// Wave damage collected along the way, before sturdiness.
    pub wave_damage: u32,
    /// The wave damage actually applied after the walk.
    pub damage: Option<Hit>,
    pub destroyed: bool,
}

impl GameState {
    /// Moves `id` towards `destination` along the shortest unblocked route
    /// that fits `budget`.
    ///
    /// The route's length is deducted from the budget up front. Every cell
    /// entered applies the step effects of the waves on it: their damage is
    /// collected, and unless the ship resists (see [`WavePolicy`]) the first
    /// such wave throws it to a random unblocked cell of the wave's push area
    /// and the move ends. Collected damage is applied once the ship stops.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownActor`] / [`StateError::NotPlaced`] for an actor
    /// that cannot move, or a grid error if a cell on the route is full.
    pub fn resolve_movement<R: Rng + ?Sized>(
        &mut self,
        id: ActorId,
        destination: Position,
        budget: &mut TurnBudget,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<MovementOutcome, StateError> {
        let actor = self.actor(id).ok_or(StateError::UnknownActor(id))?;
        let start = actor.position.ok_or(StateError::NotPlaced(id))?;
        let stability = actor.ship().map_or(0, |ship| ship.stats.stability);

        let path = self
            .grid()
            .path(start, destination, budget.steps_remaining, true);
        let mut outcome = MovementOutcome {
            final_position: start,
            steps_spent: 0,
            stop: MovementStop::PathNotFound,
            pushed_by: None,
            wave_damage: 0,
            damage: None,
            destroyed: false,
            path,
        };
        if outcome.path.is_empty() {
            return Ok(outcome);
        }

        outcome.steps_spent = outcome.path.len() as u32 - 1;
        budget.spend_steps(outcome.steps_spent);
        outcome.stop = MovementStop::Arrived;

        for index in 1..outcome.path.len() {
            let step = outcome.path[index];
            self.move_actor(id, step)?;
            outcome.final_position = step;

            for (wave_id, wave) in self.waves_at(step) {
                outcome.wave_damage = outcome.wave_damage.saturating_add(wave.damage);
                if outcome.pushed_by.is_some() || resists_wave(stability, config, rng) {
                    continue;
                }

                outcome.pushed_by = Some(wave_id);
                let push_area: Vec<Position> = self
                    .grid()
                    .targets_for(wave.direction, step, wave.push_distance, 0)
                    .into_iter()
                    .filter(|cell| !self.grid().is_blocked(*cell))
                    .collect();
                match push_area.choose(rng) {
                    Some(&landing) => {
                        self.move_actor(id, landing)?;
                        outcome.final_position = landing;
                        outcome.stop = MovementStop::Pushed;
                    }
                    None => outcome.stop = MovementStop::Held,
                }
            }

            if outcome.pushed_by.is_some() {
                break;
            }
        }

        if outcome.wave_damage > 0 {
            outcome.damage = self.damage_actor(id, outcome.wave_damage);
            outcome.destroyed = outcome.damage.is_some_and(|hit| hit.destroyed);
        }
        Ok(outcome)
    }

    fn waves_at(&self, position: Position) -> Vec<(ActorId, WaveProfile)> {
        self.occupants_at(position)
            .filter(|actor| actor.has_step_effect())
            .filter_map(|actor| actor.wave_profile().map(|wave| (actor.id, *wave)))
            .collect()
    }
}

fn resists_wave<R: Rng + ?Sized>(stability: u32, config: &GameConfig, rng: &mut R) -> bool {
    match config.wave_policy {
        WavePolicy::AlwaysHit => false,
        WavePolicy::AlwaysResist => true,
        WavePolicy::Roll => rng.gen_range(1..=config.wave_resist_die.max(1)) <= stability,
    }
}
