//! Scenario loader.
//!
//! A scenario file holds the layout and every starting placement:
//!
//! ```ron
//! (
//!     name: "Smuggler's Cove",
//!     rows: [
//!         "......",
//!         "..#...",
//!         "......",
//!     ],
//!     placements: [
//!         player(name: "Resolute", ship: "frigate", at: (0, 0)),
//!         ai(name: "Black Gull", ship: "sloop", faction: pirates, genes: "raider", at: (5, 2)),
//!         wave(name: "swell", wave: (direction: left, area_of_effect: 2, push_distance: 1, damage: 2), at: (3, 1)),
//!     ],
//! )
//! ```

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse scenario RON at {}: {}", path.display(), e)
        })
    }
}
