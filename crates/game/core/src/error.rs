//! Error types for fallible grid and state mutations.
//!
//! Spatial queries never fail: out of range coordinates are clamped and
//! reported through [`crate::CellLookup::in_bounds`], and "nothing found" is an
//! empty result. The errors below only cover setup and placement mistakes,
//! which callers are expected to surface rather than retry.

use crate::state::{ActorId, Position};

/// Errors raised by the grid store when occupancy cannot be changed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position lies outside the grid.
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    /// The cell already holds the maximum number of occupants.
    #[error("cell {position} cannot hold more than {capacity} occupants")]
    CellFull { position: Position, capacity: usize },

    #[error("grid dimensions {width}x{height} are not usable")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: u32,
        found: u32,
    },

    #[error("unknown layout symbol {0:?}")]
    UnknownSymbol(char),
}

impl GridError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "GRID_OUT_OF_BOUNDS",
            Self::CellFull { .. } => "GRID_CELL_FULL",
            Self::InvalidDimensions { .. } => "GRID_INVALID_DIMENSIONS",
            Self::RaggedLayout { .. } => "GRID_RAGGED_LAYOUT",
            Self::UnknownSymbol(_) => "GRID_UNKNOWN_SYMBOL",
        }
    }
}

/// Errors raised when spawning, moving or removing actors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("actor {0} does not exist")]
    UnknownActor(ActorId),

    #[error("actor {0} already exists")]
    DuplicateActor(ActorId),

    #[error("actor {0} is not placed on the grid")]
    NotPlaced(ActorId),

    /// Only the player ship may fly the player's colours.
    #[error("AI ship {0} cannot belong to the player faction")]
    ReservedFaction(ActorId),

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl StateError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "STATE_UNKNOWN_ACTOR",
            Self::DuplicateActor(_) => "STATE_DUPLICATE_ACTOR",
            Self::NotPlaced(_) => "STATE_NOT_PLACED",
            Self::ReservedFaction(_) => "STATE_RESERVED_FACTION",
            Self::Grid(inner) => inner.error_code(),
        }
    }
}
