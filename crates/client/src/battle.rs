//! Headless battle loop.
//!
//! Initiative is rolled once when the battle starts. Every round each ship
//! still afloat takes its turn in that order: AI ships through
//! [`run_ai_turn`], the player ship through a simple autopilot that drifts to
//! a random reachable cell and fires at the first enemy in range.

use rand::SeedableRng;
use rand::rngs::StdRng;
use waves_core::{ActorId, Faction, GameState, Position, TurnBudget};
use waves_runtime::{RuntimeConfig, initiative_order, run_ai_turn};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Only ships of this faction are left afloat.
    Victory(Faction),
    /// Every ship went down.
    MutualDestruction,
    /// The round limit was reached with several factions still fighting.
    Draw,
}

/// A battle in progress.
pub struct Battle {
    state: GameState,
    config: RuntimeConfig,
    rng: StdRng,
    max_rounds: u32,
    order: Vec<ActorId>,
    round: u32,
}

impl Battle {
    pub fn new(state: GameState, config: RuntimeConfig, max_rounds: u32, mut rng: StdRng) -> Self {
        let order = initiative_order(&state, &mut rng)
            .into_iter()
            .map(|(id, initiative)| {
                tracing::debug!("{} rolled initiative {}", id, initiative);
                id
            })
            .collect();

        Self {
            state,
            config,
            rng,
            max_rounds,
            order,
            round: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Plays rounds until one faction is left or the round limit is hit.
    pub fn play(&mut self) -> anyhow::Result<BattleOutcome> {
        while self.round < self.max_rounds {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.play_round()?;
        }
        Ok(self.outcome().unwrap_or(BattleOutcome::Draw))
    }

    /// Gives every ship afloat one turn.
    pub fn play_round(&mut self) -> anyhow::Result<()> {
        self.round += 1;
        tracing::info!("=== Round {} ===", self.round);

        for id in self.order.clone() {
            let Some(ship) = self.state.actor(id) else {
                continue;
            };
            if ship.position.is_none() {
                continue;
            }

            if ship.faction() == Some(Faction::Player) {
                self.player_turn(id)?;
            } else {
                let report = run_ai_turn(&mut self.state, id, &self.config, &mut self.rng)?;
                if report.destroyed {
                    tracing::info!("{} went down on its own turn", id);
                }
            }

            if self.outcome().is_some() {
                break;
            }
        }
        Ok(())
    }

    /// The result if the battle is decided, `None` while it goes on.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let mut factions = self.state.ships().filter_map(|ship| ship.faction());
        let Some(first) = factions.next() else {
            return Some(BattleOutcome::MutualDestruction);
        };
        if factions.all(|faction| faction == first) {
            return Some(BattleOutcome::Victory(first));
        }
        None
    }

    fn player_turn(&mut self, id: ActorId) -> anyhow::Result<()> {
        let Some(ship) = self.state.actor(id).and_then(|actor| actor.ship()).cloned() else {
            return Ok(());
        };
        let mut budget = TurnBudget::from_stats(&ship.stats);

        let Some(origin) = self.state.actor(id).and_then(|actor| actor.position) else {
            return Ok(());
        };
        if let Some(destination) =
            self.state
                .grid()
                .random_reachable(origin, budget.steps_remaining, &mut self.rng)
        {
            let outcome = self.state.resolve_movement(
                id,
                destination,
                &mut budget,
                &self.config.game_config,
                &mut self.rng,
            )?;
            if outcome.destroyed {
                tracing::info!("Player ship {} sank while moving", id);
                return Ok(());
            }
        }

        while budget.try_act() {
            let Some(target) = self.first_enemy_in_range(id) else {
                break;
            };
            let damage = ship.roll_attack(&mut self.rng).unwrap_or(0);
            let report = self.state.damage_cell(target, damage);
            tracing::info!(
                "Player ship {} fires at {} for {} ({} destroyed)",
                id,
                target,
                damage,
                report.destroyed.len()
            );
            if report.was_destroyed(id) {
                break;
            }
        }
        Ok(())
    }

    fn first_enemy_in_range(&self, id: ActorId) -> Option<Position> {
        let me = self.state.actor(id)?;
        let weapon = me.ship()?.weapon?;
        let position = me.position?;
        weapon
            .targets(self.state.grid(), position)
            .into_iter()
            .find(|&cell| {
                self.state
                    .occupants_at(cell)
                    .any(|other| me.is_enemy_of(other))
            })
    }
}

/// A fresh RNG, seeded when reproducibility was asked for.
pub fn battle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
