//! Waves headless battle binary.
//!
//! ```bash
//! WAVES_SCENARIO=narrows WAVES_SEED=7 RUST_LOG=debug cargo run -p waves-client
//! ```

use anyhow::Result;
use waves_client::{Battle, BattleOutcome, ClientConfig, battle_rng};
use waves_content::ContentFactory;
use waves_runtime::RuntimeConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let battle_config = factory.load_config()?;
    let state = factory.build_battle(&config.scenario)?;
    tracing::info!(
        "Scenario '{}' loaded: {} ships on a {}x{} grid",
        config.scenario,
        state.ships().count(),
        state.grid().width(),
        state.grid().height()
    );

    let mut runtime_config = RuntimeConfig::new(battle_config.game);
    runtime_config.max_actions_per_turn = battle_config.max_actions_per_turn;
    let max_rounds = config.max_rounds.unwrap_or(battle_config.max_rounds);

    let mut battle = Battle::new(state, runtime_config, max_rounds, battle_rng(config.seed));
    let outcome = battle.play()?;

    match outcome {
        BattleOutcome::Victory(faction) => {
            tracing::info!("{} win after {} rounds", faction, battle.round())
        }
        BattleOutcome::MutualDestruction => {
            tracing::info!("No ship survived after {} rounds", battle.round())
        }
        BattleOutcome::Draw => tracing::info!("Draw after {} rounds", battle.round()),
    }
    for ship in battle.state().ships() {
        tracing::info!(
            "  {} at {}: {}/{} hull",
            ship.name,
            ship.position.map_or_else(|| "-".to_string(), |at| at.to_string()),
            ship.health.current,
            ship.health.maximum
        );
    }

    Ok(())
}
