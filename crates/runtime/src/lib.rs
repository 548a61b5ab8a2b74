//! Turn orchestration for AI controlled ships.
//!
//! The runtime owns no state of its own: callers hand it a
//! [`waves_core::GameState`] and it plays one ship's turn against it, asking
//! the utility AI where to sail and what to shoot.
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the utility AI that makes decisions
//! - [`turn`] commits those decisions: movement, then attacks
//! - [`config`] and [`error`] carry the runtime settings and failures
pub mod config;
pub mod error;
pub mod providers;
pub mod turn;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use providers::ai::{AiBrain, AiContext, Candidate, Choice, Utility};
pub use turn::{AttackReport, TurnReport, initiative_order, run_ai_turn};
