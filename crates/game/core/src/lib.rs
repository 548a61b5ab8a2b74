//! Deterministic grid rules and data types for the Waves tactical battles.
//!
//! `waves-core` owns the battlefield: the cell grid with its occupancy
//! invariant, the closed actor model, every spatial query the AI and the
//! presentation layer rely on, and the resolution of movement and damage.
//! Decision making lives in `waves-runtime`; this crate only answers "what is
//! where" and "what can be reached or hit from here".
//!
//! Modules are organized by responsibility:
//! - [`state`] hosts the grid store, actors and [`GameState`]
//! - [`query`] implements reachability, target areas and A* routing
//! - [`combat`] covers dice, weapons and damage resolution
//! - [`movement`] resolves a committed move including wave pushes
pub mod combat;
pub mod config;
pub mod error;
pub mod movement;
pub mod query;
pub mod state;

pub use combat::{DamageReport, Dice, DiceParseError, Hit, WeaponProfile};
pub use config::{GameConfig, WavePolicy};
pub use error::{GridError, StateError};
pub use movement::{MovementOutcome, MovementStop};
pub use query::AreaShape;
pub use state::{
    Actor, ActorFlags, ActorId, ActorKind, Cell, CellLookup, CellType, Faction, GameState,
    GeneProfile, Grid, GridDimensions, Health, Occupant, Position, ShipProfile, ShipStats,
    TurnBudget, WaveProfile,
};
