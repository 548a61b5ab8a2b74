//! Headless Waves client.
//!
//! Loads a scenario from the content directory and plays it out with every
//! non-player ship driven by the utility AI.

pub mod battle;
pub mod config;

pub use battle::{Battle, BattleOutcome, battle_rng};
pub use config::ClientConfig;
