//! Battle configuration loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use waves_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Rounds played before the battle is called a draw.
    pub max_rounds: u32,
    /// Cap on attacks per AI turn.
    pub max_actions_per_turn: u32,
    pub game: GameConfig,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 30;
    pub const DEFAULT_MAX_ACTIONS_PER_TURN: u32 = 8;
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            max_actions_per_turn: Self::DEFAULT_MAX_ACTIONS_PER_TURN,
            game: GameConfig::default(),
        }
    }
}

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
