use super::ShipStats;

/// Steps and actions left to the ship currently taking its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnBudget {
    pub steps_remaining: u32,
    pub actions_remaining: u32,
}

impl TurnBudget {
    pub const fn new(steps_remaining: u32, actions_remaining: u32) -> Self {
        Self {
            steps_remaining,
            actions_remaining,
        }
    }

    /// Fresh budget for a ship at the start of its turn.
    pub fn from_stats(stats: &ShipStats) -> Self {
        Self::new(stats.speed, stats.spirit)
    }

    /// Consumes one action if any is left.
    pub fn try_act(&mut self) -> bool {
        if self.actions_remaining == 0 {
            return false;
        }
        self.actions_remaining -= 1;
        true
    }

    /// Deducts walked steps, saturating at zero.
    pub fn spend_steps(&mut self, steps: u32) {
        self.steps_remaining = self.steps_remaining.saturating_sub(steps);
    }
}
