//! Utility-based AI for enemy ships.
//!
//! Decisions follow a "rank, then randomize among the best" scheme:
//!
//! 1. **Enumerate**: reachable cells for movement, weapon targets for attacks
//! 2. **Score**: each cell gets a [`scoring::Utility`] shaped by the ship's genes
//! 3. **Select**: drop forbidden cells, sort, pick uniformly among the top K
//!
//! # Core Components
//!
//! - [`AiBrain`]: movement and attack decisions
//! - [`AiContext`]: the deciding ship's view of the battle
//! - [`scoring`]: per-cell utilities and the wave chain
//! - [`selector`]: top-K random pick

pub mod brain;
pub mod context;
pub mod scoring;
pub mod selector;

pub use brain::AiBrain;
pub use context::AiContext;
pub use scoring::Utility;
pub use selector::{Candidate, Choice, choose};
