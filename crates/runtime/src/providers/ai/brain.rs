//! Movement and attack decisions for AI ships.

use rand::Rng;
use waves_core::Position;

use super::AiContext;
use super::scoring::{attack_utility, movement_utility};
use super::selector::{Candidate, choose};

/// Utility-driven decision maker.
///
/// Both decisions are pure with respect to the game state: the caller commits
/// the chosen cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiBrain;

impl AiBrain {
    pub fn new() -> Self {
        Self
    }

    /// Chooses where to sail this turn.
    ///
    /// Every cell reachable with the remaining steps is scored with
    /// [`movement_utility`], then one of the ship's `top_k` best is picked.
    ///
    /// # Returns
    ///
    /// The destination, or `None` if every candidate is forbidden.
    pub fn decide_movement<R: Rng + ?Sized>(
        &self,
        ctx: &AiContext,
        rng: &mut R,
    ) -> Option<Position> {
        let reachable = ctx
            .state
            .grid()
            .reachable(ctx.position, ctx.budget.steps_remaining);

        tracing::debug!(
            "AiBrain: {} evaluating {} movement candidates",
            ctx.entity,
            reachable.len()
        );

        let candidates = reachable.into_iter().map(|cell| {
            let utility = movement_utility(ctx, cell);
            tracing::debug!("  Move {}: utility={}", cell, utility);
            Candidate::new(cell, utility)
        });
        let choice = choose(candidates.collect::<Vec<_>>(), ctx.genes.top_k, rng)?;

        tracing::info!(
            "{} moves towards {} (utility={}, rank={})",
            ctx.me.name,
            choice.candidate.cell,
            choice.candidate.utility,
            choice.rank
        );
        Some(choice.candidate.cell)
    }

    /// Chooses where to fire from the current position.
    ///
    /// # Returns
    ///
    /// The target cell, or `None` if no cell in range is worth a shot.
    ///
    /// # Panics
    ///
    /// Panics if the ship carries no weapon; attack decisions are only asked
    /// of armed ships.
    pub fn decide_attack<R: Rng + ?Sized>(&self, ctx: &AiContext, rng: &mut R) -> Option<Position> {
        let Some(weapon) = &ctx.ship.weapon else {
            panic!(
                "attack decision requested for unarmed ship {} ({})",
                ctx.entity, ctx.me.name
            );
        };

        let candidates: Vec<Candidate> = weapon
            .targets(ctx.state.grid(), ctx.position)
            .into_iter()
            .map(|cell| {
                let utility = attack_utility(ctx, cell);
                tracing::debug!("  Attack {}: utility={}", cell, utility);
                Candidate::new(cell, utility)
            })
            .collect();
        let choice = choose(candidates, ctx.genes.top_k, rng)?;

        tracing::info!(
            "{} fires at {} (utility={}, rank={})",
            ctx.me.name,
            choice.candidate.cell,
            choice.candidate.utility,
            choice.rank
        );
        Some(choice.candidate.cell)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use waves_core::{AreaShape, Dice, Faction, GeneProfile, WeaponProfile};

    use super::*;
    use crate::providers::ai::fixtures::Battle;

    fn decisive() -> GeneProfile {
        GeneProfile {
            top_k: 1,
            ..GeneProfile::default()
        }
    }

    #[test]
    fn greedy_ship_closes_in_on_the_target() {
        let mut battle = Battle::new(7, 1);
        let cannon = WeaponProfile::new(AreaShape::Right, 1, 0, Dice::D6);
        let me = battle.armed_ai_ship(Position::new(0, 0), Faction::Pirates, decisive(), 0, cannon);
        battle.target(Position::new(4, 0));
        let ctx = battle.context_with_steps(me, 3);

        // Only (3, 0) puts the target within the cannon's single cell reach.
        let destination = AiBrain::new().decide_movement(&ctx, &mut StdRng::seed_from_u64(1));
        assert_eq!(destination, Some(Position::new(3, 0)));
    }

    #[test]
    fn attack_prefers_weakened_enemy() {
        let mut battle = Battle::new(5, 5);
        let cannon = WeaponProfile::new(AreaShape::Cross, 2, 0, Dice::D6);
        let me = battle.armed_ai_ship(Position::new(2, 2), Faction::Pirates, decisive(), 1, cannon);
        battle.player(Position::new(2, 4), 10, 10);
        battle.player(Position::new(0, 2), 2, 10);
        battle.ai_ship(Position::new(3, 2), Faction::Pirates, GeneProfile::default());
        let ctx = battle.context(me);

        let target = AiBrain::new().decide_attack(&ctx, &mut StdRng::seed_from_u64(4));
        assert_eq!(target, Some(Position::new(0, 2)));
    }

    #[test]
    fn nothing_worth_shooting() {
        let mut battle = Battle::new(5, 5);
        let cannon = WeaponProfile::new(AreaShape::Cross, 2, 0, Dice::D6);
        let me = battle.armed_ai_ship(Position::new(2, 2), Faction::Pirates, decisive(), 1, cannon);
        battle.ai_ship(Position::new(2, 3), Faction::Pirates, GeneProfile::default());
        let ctx = battle.context(me);

        assert_eq!(
            AiBrain::new().decide_attack(&ctx, &mut StdRng::seed_from_u64(4)),
            None
        );
    }

    #[test]
    #[should_panic(expected = "unarmed")]
    fn attack_decision_requires_a_weapon() {
        let mut battle = Battle::new(3, 3);
        let me = battle.ai_ship(Position::new(1, 1), Faction::Navy, decisive());
        let ctx = battle.context(me);
        AiBrain::new().decide_attack(&ctx, &mut StdRng::seed_from_u64(0));
    }
}
