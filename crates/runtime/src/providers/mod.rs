//! Decision providers for non-player ships.

pub mod ai;
