//! Data-driven battle content and loaders.
//!
//! This crate turns data files into ready-to-play battles:
//! - Ship catalog: weapons, gene profiles and ship templates (RON)
//! - Scenarios: grid layout plus actor placements (RON)
//! - Battle configuration (TOML)
//!
//! The catalog and scenario types are usable without any file I/O; the
//! [`loaders`] module (default feature `loaders`) reads them from a data
//! directory.

pub mod catalog;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, ShipCatalog, ShipTemplate};
pub use scenario::{Placement, Scenario};

#[cfg(feature = "loaders")]
pub use loaders::{
    BattleConfig, ConfigLoader, ContentFactory, GenesLoader, ScenarioLoader, ShipsLoader,
    WeaponsLoader,
};
