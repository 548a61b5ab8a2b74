//! Combat resolution.
//!
//! - [`dice`]: `NdS+B` dice expressions and rolls
//! - [`weapon`]: cannon profiles, attack and initiative rolls
//! - [`damage`]: applying damage to a cell, including wave eruptions

pub mod damage;
pub mod dice;
pub mod weapon;

pub use damage::{DamageReport, Hit};
pub use dice::{Dice, DiceParseError};
pub use weapon::WeaponProfile;
