//! Driving a full AI turn: move, then spend every action on attacks.

use rand::Rng;
use waves_core::{ActorId, DamageReport, GameState, MovementOutcome, Position, TurnBudget};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::providers::ai::{AiBrain, AiContext};

/// One shot fired during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub target: Position,
    /// Damage rolled before the victims' sturdiness.
    pub damage: u32,
    pub outcome: DamageReport,
}

/// What an AI ship did with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: ActorId,
    /// Destination picked by utility, `None` when the ship fell back to a
    /// random move.
    pub decision: Option<Position>,
    pub movement: Option<MovementOutcome>,
    pub attacks: Vec<AttackReport>,
    /// The ship did not survive its own turn.
    pub destroyed: bool,
}

impl TurnReport {
    fn new(actor: ActorId) -> Self {
        Self {
            actor,
            decision: None,
            movement: None,
            attacks: Vec::new(),
            destroyed: false,
        }
    }
}

/// Plays one turn for the AI ship `actor`.
///
/// 1. The budget is refilled from the ship's speed and spirit.
/// 2. The brain picks a destination; without one the ship drifts to a random
///    reachable cell.
/// 3. The move is resolved, waves included. A ship sunk on the way ends here.
/// 4. Only after a deliberate move, an armed ship spends every remaining
///    action on an attack decision. Actions without a worthwhile target are
///    skipped.
///
/// # Errors
///
/// Fails when `actor` is not a placed AI ship, or when the move hits a full
/// cell.
pub fn run_ai_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    actor: ActorId,
    config: &RuntimeConfig,
    rng: &mut R,
) -> Result<TurnReport> {
    let brain = AiBrain::new();
    let mut report = TurnReport::new(actor);

    let ship = state
        .actor(actor)
        .ok_or(RuntimeError::UnknownActor(actor))?
        .ship()
        .ok_or(RuntimeError::NotAnAiShip(actor))?;
    let stats = ship.stats;
    let armed = ship.weapon.is_some();
    let mut budget = TurnBudget::from_stats(&stats);
    budget.actions_remaining = budget.actions_remaining.min(config.max_actions_per_turn);

    let destination = {
        let ctx = AiContext::new(actor, state, budget)?;
        report.decision = brain.decide_movement(&ctx, rng);
        report.decision.or_else(|| {
            tracing::debug!("{} found no decision, drifting at random", ctx.me.name);
            state
                .grid()
                .random_reachable(ctx.position, budget.steps_remaining, rng)
        })
    };

    if let Some(destination) = destination {
        let outcome =
            state.resolve_movement(actor, destination, &mut budget, &config.game_config, rng)?;
        report.destroyed = outcome.destroyed;
        report.movement = Some(outcome);
        if report.destroyed {
            tracing::info!("{} sank while moving", actor);
            return Ok(report);
        }
    }

    if report.decision.is_none() || !armed {
        return Ok(report);
    }

    while budget.try_act() {
        let target = {
            let ctx = AiContext::new(actor, state, budget)?;
            brain.decide_attack(&ctx, rng)
        };
        let Some(target) = target else {
            continue;
        };
        if state.is_empty_at(target) {
            continue;
        }

        let damage = state
            .actor(actor)
            .and_then(|me| me.ship())
            .and_then(|ship| ship.roll_attack(rng))
            .unwrap_or(0);
        let outcome = state.damage_cell(target, damage);
        tracing::info!(
            "{} hits {} for {} ({} hits, {} destroyed)",
            actor,
            target,
            damage,
            outcome.hits.len(),
            outcome.destroyed.len()
        );

        let sunk = outcome.was_destroyed(actor);
        report.attacks.push(AttackReport {
            target,
            damage,
            outcome,
        });
        if sunk {
            report.destroyed = true;
            break;
        }
    }

    Ok(report)
}

/// Orders every ship on the grid by rolled initiative, highest first.
///
/// Ties keep id order.
pub fn initiative_order<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Vec<(ActorId, u32)> {
    let mut order: Vec<(ActorId, u32)> = state
        .ships()
        .filter_map(|actor| {
            let ship = actor.ship()?;
            Some((actor.id, ship.roll_initiative(rng)))
        })
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}
