//! Content factory for building battles from a data directory.

use std::path::{Path, PathBuf};

use waves_core::GameState;

use crate::catalog::ShipCatalog;
use crate::loaders::{
    BattleConfig, ConfigLoader, GenesLoader, LoadResult, ScenarioLoader, ShipsLoader,
    WeaponsLoader,
};
use crate::scenario::Scenario;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── genes.ron
/// ├── weapons.ron
/// ├── ships.ron
/// └── scenarios/
///     ├── skirmish.ron
///     └── narrows.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load weapons, gene profiles and ship templates into one catalog.
    pub fn load_catalog(&self) -> LoadResult<ShipCatalog> {
        let mut catalog = ShipCatalog::new();
        for (name, weapon) in WeaponsLoader::load(&self.data_dir.join("weapons.ron"))? {
            catalog.add_weapon(name, weapon);
        }
        for (name, genes) in GenesLoader::load(&self.data_dir.join("genes.ron"))? {
            catalog.add_genes(name, genes);
        }
        for (name, ship) in ShipsLoader::load(&self.data_dir.join("ships.ron"))? {
            catalog.add_ship(name, ship);
        }
        Ok(catalog)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Loads the catalog and the named scenario and builds the starting state.
    pub fn build_battle(&self, scenario: &str) -> LoadResult<GameState> {
        let catalog = self.load_catalog()?;
        let scenario = self.load_scenario(scenario)?;
        scenario
            .build(&catalog)
            .map_err(|e| anyhow::anyhow!("Failed to build scenario '{}': {}", scenario.name, e))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
