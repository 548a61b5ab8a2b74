//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for a headless battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Fixed seed for a reproducible battle; random when unset.
    pub seed: Option<u64>,
    /// Overrides `max_rounds` from `config.toml`.
    pub max_rounds: Option<u32>,
}

impl ClientConfig {
    pub const DEFAULT_SCENARIO: &'static str = "skirmish";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WAVES_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `WAVES_SCENARIO` - Scenario name without extension (default: `skirmish`)
    /// - `WAVES_SEED` - RNG seed (default: random)
    /// - `WAVES_MAX_ROUNDS` - Round limit override
    pub fn from_env() -> Self {
        let data_dir = env::var("WAVES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            scenario: env::var("WAVES_SCENARIO")
                .unwrap_or_else(|_| Self::DEFAULT_SCENARIO.to_string()),
            seed: read_env("WAVES_SEED"),
            max_rounds: read_env::<u32>("WAVES_MAX_ROUNDS").map(|rounds| rounds.max(1)),
        }
    }
}

/// Bundled content, relative to the working directory.
fn default_data_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("crates/game/content/data")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
