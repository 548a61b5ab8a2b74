//! Damage application and wave eruptions.

use std::collections::BTreeSet;

use crate::state::{ActorId, GameState, Position};

/// Damage dealt to a single actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub actor: ActorId,
    pub position: Position,
    /// Damage left after sturdiness. Zero is a miss.
    pub damage: u32,
    pub destroyed: bool,
}

impl Hit {
    pub fn is_miss(&self) -> bool {
        self.damage == 0
    }
}

/// Everything that happened while resolving one damage event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Hits in resolution order, eruption hits included.
    pub hits: Vec<Hit>,
    /// Actors destroyed by this event.
    pub destroyed: Vec<ActorId>,
    /// Waves that erupted.
    pub eruptions: Vec<ActorId>,
}

impl DamageReport {
    pub fn total_damage(&self) -> u32 {
        self.hits.iter().map(|hit| hit.damage).fold(0, u32::saturating_add)
    }

    pub fn was_destroyed(&self, id: ActorId) -> bool {
        self.destroyed.contains(&id)
    }
}

impl GameState {
    /// Deals `amount` to every actor on `position`.
    ///
    /// Ships and targets subtract their sturdiness first. Actors without
    /// [`ActorFlags::DESTRUCTIBLE`](crate::ActorFlags::DESTRUCTIBLE) keep
    /// their health. An actor whose health reaches zero is destroyed and taken
    /// off the grid. A wave struck with positive damage erupts and deals the
    /// same amount across its footprint; every wave erupts at most once per
    /// call.
    pub fn damage_cell(&mut self, position: Position, amount: u32) -> DamageReport {
        let mut report = DamageReport::default();
        let mut erupted = BTreeSet::new();
        self.strike(position, amount, &mut erupted, &mut report);
        report
    }

    /// Deals `amount` to a single placed actor, without triggering eruptions.
    ///
    /// Returns `None` when the actor is unknown or not on the grid.
    pub fn damage_actor(&mut self, id: ActorId, amount: u32) -> Option<Hit> {
        let actor = self.actor_mut(id)?;
        let position = actor.position?;

        let damage = amount.saturating_sub(actor.sturdiness());
        let destroyed = actor.is_destructible() && {
            actor.health.apply_damage(damage);
            actor.health.is_depleted()
        };
        if destroyed {
            self.detach(id);
        }

        Some(Hit {
            actor: id,
            position,
            damage,
            destroyed,
        })
    }

    fn strike(
        &mut self,
        position: Position,
        amount: u32,
        erupted: &mut BTreeSet<ActorId>,
        report: &mut DamageReport,
    ) {
        let occupants: Vec<ActorId> = self
            .grid()
            .cell(position)
            .map(|cell| cell.occupant_ids().collect())
            .unwrap_or_default();

        for id in occupants {
            let footprint = self
                .actor(id)
                .and_then(|actor| actor.wave_profile().copied())
                .filter(|_| amount > 0);
            let Some(hit) = self.damage_actor(id, amount) else {
                continue;
            };

            report.hits.push(hit);
            if hit.destroyed {
                report.destroyed.push(id);
            }

            if let Some(wave) = footprint {
                if !erupted.insert(id) {
                    continue;
                }
                report.eruptions.push(id);
                let area = self
                    .grid()
                    .targets_for(wave.direction, position, wave.area_of_effect, 0);
                for cell in area {
                    self.strike(cell, amount, erupted, report);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::AreaShape;
    use crate::state::{Actor, ActorFlags, Grid, ShipProfile, ShipStats, WaveProfile};

    fn state() -> GameState {
        GameState::new(Grid::new(5, 5).unwrap())
    }

    fn ship(id: u32, sturdiness: u32, health: u32) -> Actor {
        let stats = ShipStats {
            sturdiness,
            ..ShipStats::default()
        };
        Actor::player_ship(ActorId(id), "brig", ShipProfile::new(stats, None), health)
    }

    fn wave(id: u32, direction: AreaShape) -> Actor {
        Actor::wave(
            ActorId(id),
            "swell",
            WaveProfile {
                direction,
                area_of_effect: 2,
                push_distance: 1,
                damage: 1,
            },
        )
    }

    #[test]
    fn sturdiness_reduces_damage_and_can_cause_a_miss() {
        let mut state = state();
        state.spawn(ship(1, 2, 10), Position::new(1, 1)).unwrap();

        let report = state.damage_cell(Position::new(1, 1), 5);
        assert_eq!(report.hits[0].damage, 3);
        assert_eq!(state.actor(ActorId(1)).unwrap().health.current, 7);

        let report = state.damage_cell(Position::new(1, 1), 2);
        assert!(report.hits[0].is_miss());
        assert_eq!(state.actor(ActorId(1)).unwrap().health.current, 7);
    }

    #[test]
    fn lethal_damage_removes_actor_from_its_cell() {
        let mut state = state();
        state
            .spawn(Actor::target(ActorId(1), "buoy", 0, 3), Position::new(2, 2))
            .unwrap();

        let report = state.damage_cell(Position::new(2, 2), 9);

        assert!(report.was_destroyed(ActorId(1)));
        assert!(state.is_empty_at(Position::new(2, 2)));
        assert!(state.actor(ActorId(1)).unwrap().is_destroyed());
    }

    #[test]
    fn indestructible_actors_keep_health() {
        let mut state = state();
        state
            .spawn(
                Actor::target(ActorId(1), "fort", 0, 3).with_flags(ActorFlags::BLOCKS_MOVEMENT),
                Position::new(0, 0),
            )
            .unwrap();

        let report = state.damage_cell(Position::new(0, 0), 10);
        assert!(report.destroyed.is_empty());
        assert_eq!(state.actor(ActorId(1)).unwrap().health.current, 3);
    }

    #[test]
    fn struck_wave_erupts_over_its_footprint() {
        let mut state = state();
        state.spawn(wave(1, AreaShape::Up), Position::new(2, 0)).unwrap();
        state.spawn(ship(2, 1, 10), Position::new(2, 2)).unwrap();
        state.spawn(ship(3, 0, 10), Position::new(3, 0)).unwrap();

        let report = state.damage_cell(Position::new(2, 0), 4);

        assert_eq!(report.eruptions, vec![ActorId(1)]);
        assert_eq!(state.actor(ActorId(2)).unwrap().health.current, 7);
        // Outside the footprint.
        assert_eq!(state.actor(ActorId(3)).unwrap().health.current, 10);
    }

    #[test]
    fn facing_waves_erupt_once_each() {
        let mut state = state();
        state.spawn(wave(1, AreaShape::Up), Position::new(2, 1)).unwrap();
        state.spawn(wave(2, AreaShape::Down), Position::new(2, 2)).unwrap();
        state.spawn(ship(3, 0, 20), Position::new(2, 3)).unwrap();

        let report = state.damage_cell(Position::new(2, 1), 2);

        assert_eq!(report.eruptions, vec![ActorId(1), ActorId(2)]);
        // Ship at (2, 3) sits only in the first wave's footprint.
        assert_eq!(state.actor(ActorId(3)).unwrap().health.current, 18);
    }

    #[test]
    fn zero_damage_does_not_erupt() {
        let mut state = state();
        state.spawn(wave(1, AreaShape::Up), Position::new(2, 0)).unwrap();
        let report = state.damage_cell(Position::new(2, 0), 0);
        assert!(report.eruptions.is_empty());
    }
}
