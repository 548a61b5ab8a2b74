//! Loaders for the named presets of the ship catalog.
//!
//! Every file is a RON map from preset name to definition:
//!
//! ```ron
//! {
//!     "raider": (aggressiveness: 2.0, patience: 0.5, top_k: 2),
//!     "escort": (friendliness: 2.5, self_preservation: 1.5),
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use waves_core::{GeneProfile, WeaponProfile};

use crate::catalog::ShipTemplate;
use crate::loaders::{LoadResult, read_file};

fn load_presets<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<HashMap<String, T>> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}

/// Loader for gene profiles (`genes.ron`).
pub struct GenesLoader;

impl GenesLoader {
    /// Fields left out of a profile take their default weight.
    pub fn load(path: &Path) -> LoadResult<HashMap<String, GeneProfile>> {
        load_presets(path, "gene profile")
    }
}

/// Loader for weapons (`weapons.ron`).
pub struct WeaponsLoader;

impl WeaponsLoader {
    pub fn load(path: &Path) -> LoadResult<HashMap<String, WeaponProfile>> {
        load_presets(path, "weapon")
    }
}

/// Loader for ship templates (`ships.ron`).
pub struct ShipsLoader;

impl ShipsLoader {
    /// Weapons are referenced by name and resolved by the catalog.
    pub fn load(path: &Path) -> LoadResult<HashMap<String, ShipTemplate>> {
        load_presets(path, "ship template")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use waves_core::{AreaShape, Dice};

    use super::*;

    #[test]
    fn genes_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.ron");
        fs::write(&path, r#"{ "raider": (aggressiveness: 2.5, top_k: 2) }"#).unwrap();

        let genes = GenesLoader::load(&path).unwrap();
        let raider = genes["raider"];
        assert_eq!(raider.aggressiveness, 2.5);
        assert_eq!(raider.top_k, 2);
        assert_eq!(raider.patience, GeneProfile::default().patience);
    }

    #[test]
    fn weapons_parse_shape_and_dice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weapons.ron");
        fs::write(
            &path,
            r#"{
                "long_gun": (shape: up, range: 4, dead_zone: 1, damage: "2d6+1"),
            }"#,
        )
        .unwrap();

        let weapons = WeaponsLoader::load(&path).unwrap();
        assert_eq!(
            weapons["long_gun"],
            WeaponProfile::new(AreaShape::Up, 4, 1, Dice::new(2, 6, 1))
        );
    }

    #[test]
    fn ships_default_their_initiative() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.ron");
        fs::write(
            &path,
            r#"{
                "sloop": (stats: (speed: 4, spirit: 1), weapon: Some("swivel"), health: 6),
            }"#,
        )
        .unwrap();

        let ships = ShipsLoader::load(&path).unwrap();
        let sloop = &ships["sloop"];
        assert_eq!(sloop.stats.speed, 4);
        assert_eq!(sloop.weapon.as_deref(), Some("swivel"));
        assert_eq!(sloop.initiative, Dice::D6);
    }

    #[test]
    fn bad_files_report_their_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weapons.ron");
        fs::write(&path, "{ \"broken\": (shape: sideways) }").unwrap();

        let err = WeaponsLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("weapons.ron"));

        let missing = WeaponsLoader::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read file"));
    }
}
