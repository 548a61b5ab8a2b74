//! Per-cell utilities.
//!
//! All three functions look at the actors standing on one cell, skipping the
//! deciding ship itself, and add up what each of them is worth:
//!
//! | occupant        | move            | proximity      | attack         |
//! |-----------------|-----------------|----------------|----------------|
//! | nothing         | `patience`      | `patience`     | forbidden      |
//! | target          | `target_interest` | `target_interest` | `target_interest` |
//! | allied ship     | `friendliness`  | `friendliness` | forbidden      |
//! | enemy ship      | forbidden       | engagement     | engagement     |
//! | wave            | `-damage`       | `-damage`      | wave chain     |
//! | obstacle        | 0               | 0              | 0              |
//!
//! where engagement is
//! `aggressiveness + (own_health_ratio - enemy_health_ratio) * self_preservation`.

use waves_core::{Actor, ActorKind, Position};

use super::{Utility, wave_chain_utility};
use crate::providers::ai::AiContext;

/// Utility of ending the move on `cell`.
pub fn move_utility(ctx: &AiContext, cell: Position) -> Utility {
    score_occupants(ctx, cell, Utility::Score(ctx.genes.patience), |other| {
        match &other.kind {
            ActorKind::Target { .. } => Utility::Score(ctx.genes.target_interest),
            ActorKind::PlayerShip { .. } | ActorKind::AiShip { .. } => {
                if ctx.me.is_ally_of(other) {
                    Utility::Score(ctx.genes.friendliness)
                } else {
                    // Never sail onto an enemy.
                    Utility::Forbidden
                }
            }
            ActorKind::Wave(wave) => Utility::Score(-(wave.damage as f32)),
            ActorKind::Obstacle => Utility::ZERO,
        }
    })
}

/// Utility of having `cell` within sight.
pub fn proximity_utility(ctx: &AiContext, cell: Position) -> Utility {
    score_occupants(ctx, cell, Utility::Score(ctx.genes.patience), |other| {
        match &other.kind {
            ActorKind::Target { .. } => Utility::Score(ctx.genes.target_interest),
            ActorKind::PlayerShip { .. } | ActorKind::AiShip { .. } => {
                if ctx.me.is_ally_of(other) {
                    Utility::Score(ctx.genes.friendliness)
                } else {
                    Utility::Score(engagement(ctx, other))
                }
            }
            ActorKind::Wave(wave) => Utility::Score(-(wave.damage as f32)),
            ActorKind::Obstacle => Utility::ZERO,
        }
    })
}

/// Utility of firing at `cell`.
///
/// Empty cells and cells holding an allied ship are forbidden targets.
pub fn attack_utility(ctx: &AiContext, cell: Position) -> Utility {
    score_occupants(ctx, cell, Utility::Forbidden, |other| match &other.kind {
        ActorKind::Target { .. } => Utility::Score(ctx.genes.target_interest),
        ActorKind::PlayerShip { .. } | ActorKind::AiShip { .. } => {
            if ctx.me.is_ally_of(other) {
                Utility::Forbidden
            } else {
                Utility::Score(engagement(ctx, other))
            }
        }
        ActorKind::Wave(wave) => wave_chain_utility(ctx, other.id, wave, cell),
        ActorKind::Obstacle => Utility::ZERO,
    })
}

/// Full utility of moving to `candidate`: the cell itself, everything within
/// sight of it, and everything the weapon could hit from there.
///
/// Forbidden attack cells are left out of the sum rather than ruling out the
/// move.
pub fn movement_utility(ctx: &AiContext, candidate: Position) -> Utility {
    let mut utility = move_utility(ctx, candidate);
    if utility.is_forbidden() {
        return utility;
    }

    for cell in ctx.awareness_area(candidate) {
        utility += proximity_utility(ctx, cell);
    }

    if let Some(weapon) = &ctx.ship.weapon {
        for cell in weapon.targets(ctx.state.grid(), candidate) {
            if cell == candidate {
                continue;
            }
            let attack = attack_utility(ctx, cell);
            if !attack.is_forbidden() {
                utility += attack;
            }
        }
    }

    utility
}

fn engagement(ctx: &AiContext, enemy: &Actor) -> f32 {
    let genes = ctx.genes;
    genes.aggressiveness + (ctx.health_ratio() - enemy.health.ratio()) * genes.self_preservation
}

fn score_occupants(
    ctx: &AiContext,
    cell: Position,
    when_empty: Utility,
    score: impl FnMut(&Actor) -> Utility,
) -> Utility {
    let mut occupants = ctx.others_at(cell).peekable();
    if occupants.peek().is_none() {
        return when_empty;
    }
    occupants.map(score).sum()
}
