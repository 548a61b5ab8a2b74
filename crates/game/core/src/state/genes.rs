/// Personality weights steering an AI ship's utility scoring.
///
/// Gene profiles are loaded with the level and never change during it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneProfile {
    /// Weight of engaging enemy ships.
    pub aggressiveness: f32,
    /// Score of waiting on (or next to) empty water.
    pub patience: f32,
    /// Weight of staying close to ships of the same faction.
    pub friendliness: f32,
    /// Weight of the own health lead when closing in, and the penalty of
    /// catching oneself in a wave blast.
    pub self_preservation: f32,
    /// Weight of neutral targets.
    pub target_interest: f32,
    /// How many of the best ranked candidates take part in the final random pick.
    pub top_k: usize,
}

impl GeneProfile {
    pub const DEFAULT_TOP_K: usize = 4;

    pub fn new(
        aggressiveness: f32,
        patience: f32,
        friendliness: f32,
        self_preservation: f32,
        target_interest: f32,
        top_k: usize,
    ) -> Self {
        Self {
            aggressiveness,
            patience,
            friendliness,
            self_preservation,
            target_interest,
            top_k,
        }
    }
}

impl Default for GeneProfile {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0, 0.1, Self::DEFAULT_TOP_K)
    }
}
