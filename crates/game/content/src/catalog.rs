//! Named weapons, gene profiles and ship templates.
//!
//! Scenario files refer to ships and personalities by name. The catalog keeps
//! the presets and resolves those names into core profiles.

use std::collections::HashMap;

use thiserror::Error;
use waves_core::{Dice, GeneProfile, GridError, ShipProfile, ShipStats, StateError, WeaponProfile};

/// Failures while resolving catalog references or assembling a battle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("ship template '{0}' not found")]
    UnknownShip(String),

    #[error("weapon '{weapon}' referenced by ship '{ship}' not found")]
    UnknownWeapon { ship: String, weapon: String },

    #[error("gene profile '{0}' not found")]
    UnknownGenes(String),

    #[error("invalid scenario layout: {0}")]
    Layout(#[from] GridError),

    #[error("cannot place '{name}': {source}")]
    Placement { name: String, source: StateError },
}

/// A ship as written in the data files: stats plus a weapon by name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipTemplate {
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: ShipStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_initiative"))]
    pub initiative: Dice,
    pub health: u32,
}

#[cfg(feature = "serde")]
fn default_initiative() -> Dice {
    Dice::D6
}

/// Registry of named presets.
#[derive(Clone, Debug, Default)]
pub struct ShipCatalog {
    weapons: HashMap<String, WeaponProfile>,
    genes: HashMap<String, GeneProfile>,
    ships: HashMap<String, ShipTemplate>,
}

impl ShipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_weapon(&mut self, name: impl Into<String>, weapon: WeaponProfile) {
        self.weapons.insert(name.into(), weapon);
    }

    pub fn add_genes(&mut self, name: impl Into<String>, genes: GeneProfile) {
        self.genes.insert(name.into(), genes);
    }

    pub fn add_ship(&mut self, name: impl Into<String>, ship: ShipTemplate) {
        self.ships.insert(name.into(), ship);
    }

    pub fn genes(&self, name: &str) -> Result<GeneProfile, CatalogError> {
        self.genes
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownGenes(name.to_string()))
    }

    /// Resolves a ship template into its profile and maximum health.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or its weapon is not registered.
    pub fn ship(&self, name: &str) -> Result<(ShipProfile, u32), CatalogError> {
        let template = self
            .ships
            .get(name)
            .ok_or_else(|| CatalogError::UnknownShip(name.to_string()))?;

        let weapon = match &template.weapon {
            Some(weapon) => Some(*self.weapons.get(weapon).ok_or_else(|| {
                CatalogError::UnknownWeapon {
                    ship: name.to_string(),
                    weapon: weapon.clone(),
                }
            })?),
            None => None,
        };

        let mut profile = ShipProfile::new(template.stats, weapon);
        profile.initiative = template.initiative;
        Ok((profile, template.health))
    }
}
