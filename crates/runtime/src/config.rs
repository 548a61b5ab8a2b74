use waves_core::GameConfig;

/// Settings for driving AI turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Upper bound on attacks per turn regardless of a ship's spirit.
    pub max_actions_per_turn: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_ACTIONS_PER_TURN: u32 = 8;

    pub fn new(game_config: GameConfig) -> Self {
        Self {
            game_config,
            max_actions_per_turn: Self::DEFAULT_MAX_ACTIONS_PER_TURN,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
