//! Wave chain evaluation.
//!
//! Striking a wave makes it erupt across its footprint, so the payoff of the
//! shot is the sum of what the eruption would hit:
//!
//! - the deciding ship: `-self_preservation`
//! - the struck wave itself: nothing
//! - a target: `target_interest`
//! - an allied ship: `-friendliness`
//! - an enemy ship: `aggressiveness * (2 - health_ratio)`
//! - another wave: its damage
//! - an obstacle: nothing
//!
//! Chained waves are not followed any further. A blast that would not hit a
//! single enemy ship is worth exactly zero.

use waves_core::{ActorId, ActorKind, Position, WaveProfile};

use super::Utility;
use crate::providers::ai::AiContext;

/// Payoff of striking the wave `wave_id` standing on `wave_cell`.
///
/// Only ships of an opposing faction count as enemy hits. Targets and other
/// waves add to the total but never make a blast worth firing on their own.
pub fn wave_chain_utility(
    ctx: &AiContext,
    wave_id: ActorId,
    wave: &WaveProfile,
    wave_cell: Position,
) -> Utility {
    let genes = ctx.genes;
    let footprint =
        ctx.state
            .grid()
            .targets_for(wave.direction, wave_cell, wave.area_of_effect, 0);

    let mut total = 0.0;
    let mut enemies_hit = 0;
    for cell in footprint {
        for actor in ctx.state.occupants_at(cell) {
            if actor.id == ctx.entity {
                total -= genes.self_preservation;
                continue;
            }
            if actor.id == wave_id {
                continue;
            }

            total += match &actor.kind {
                ActorKind::Target { .. } => genes.target_interest,
                ActorKind::PlayerShip { .. } | ActorKind::AiShip { .. } => {
                    if ctx.me.is_ally_of(actor) {
                        -genes.friendliness
                    } else {
                        enemies_hit += 1;
                        genes.aggressiveness * (2.0 - actor.health.ratio())
                    }
                }
                ActorKind::Wave(other) => other.damage as f32,
                ActorKind::Obstacle => 0.0,
            };
        }
    }

    if enemies_hit == 0 {
        return Utility::ZERO;
    }
    Utility::Score(total)
}

#[cfg(test)]
mod tests {
    use waves_core::{AreaShape, Faction, GeneProfile};

    use super::*;
    use crate::providers::ai::fixtures::Battle;
    use crate::providers::ai::scoring::attack_utility;

    fn genes() -> GeneProfile {
        GeneProfile::new(2.0, 0.5, 1.0, 1.5, 0.25, 4)
    }

    #[test]
    fn blast_without_enemies_scores_zero() {
        let mut battle = Battle::new(5, 5);
        let me = battle.ai_ship(Position::new(0, 4), Faction::Pirates, genes());
        battle.wave(Position::new(2, 0), AreaShape::Up, 2);
        battle.target(Position::new(2, 1));
        battle.ai_ship(Position::new(2, 2), Faction::Pirates, genes());
        let ctx = battle.context(me);

        assert_eq!(attack_utility(&ctx, Position::new(2, 0)), Utility::ZERO);
    }

    #[test]
    fn blast_sums_every_occupant_in_the_footprint() {
        let mut battle = Battle::new(5, 5);
        // The deciding ship sits inside the footprint of the wave at (2, 0).
        let me = battle.ai_ship(Position::new(2, 2), Faction::Pirates, genes());
        battle.wave(Position::new(2, 0), AreaShape::Up, 2);
        battle.player(Position::new(2, 1), 5, 10);
        battle.target(Position::new(2, 1));
        battle.ai_ship(Position::new(2, 2), Faction::Pirates, genes());
        battle.wave(Position::new(2, 2), AreaShape::Down, 3);
        let ctx = battle.context(me);

        let expected = 2.0 * (2.0 - 0.5) + 0.25 - 1.5 - 1.0 + 3.0;
        assert_eq!(
            attack_utility(&ctx, Position::new(2, 0)),
            Utility::Score(expected)
        );
    }

    #[test]
    fn struck_wave_does_not_score_itself() {
        let mut battle = Battle::new(5, 5);
        let me = battle.ai_ship(Position::new(4, 4), Faction::Pirates, genes());
        // Down from (2, 1) covers (2, 0): the wave never sees its own cell.
        let wave = battle.wave(Position::new(2, 1), AreaShape::Down, 9);
        battle.player(Position::new(2, 0), 10, 10);
        let ctx = battle.context(me);

        let profile = *battle.state.actor(wave).unwrap().wave_profile().unwrap();
        assert_eq!(
            wave_chain_utility(&ctx, wave, &profile, Position::new(2, 1)),
            Utility::Score(2.0)
        );
    }
}
