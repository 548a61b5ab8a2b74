//! Utility scoring for AI ships.
//!
//! Every candidate cell gets a [`Utility`]. Scores are plain sums of per
//! occupant contributions weighted by the ship's [`GeneProfile`], except that
//! some situations are ruled out entirely ([`Utility::Forbidden`]).
//!
//! - [`cells`]: move, proximity and attack utility of a single cell
//! - [`wave`]: payoff of striking a wave and letting it erupt
//!
//! ## Forbidden
//!
//! `Forbidden` absorbs: adding anything to it stays `Forbidden`. It sorts
//! below every score, so it never wins a comparison.
//!
//! [`GeneProfile`]: waves_core::GeneProfile

pub mod cells;
pub mod wave;

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

pub use cells::{attack_utility, move_utility, movement_utility, proximity_utility};
pub use wave::wave_chain_utility;

/// Desirability of a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Utility {
    /// The option must never be taken.
    Forbidden,
    Score(f32),
}

impl Utility {
    pub const ZERO: Utility = Utility::Score(0.0);

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Utility::Forbidden)
    }

    /// Numeric score, `None` if forbidden.
    pub fn value(&self) -> Option<f32> {
        match self {
            Utility::Forbidden => None,
            Utility::Score(score) => Some(*score),
        }
    }

    /// Total order: `Forbidden` first, scores by [`f32::total_cmp`].
    pub fn total_cmp(&self, other: &Utility) -> Ordering {
        match (self, other) {
            (Utility::Forbidden, Utility::Forbidden) => Ordering::Equal,
            (Utility::Forbidden, Utility::Score(_)) => Ordering::Less,
            (Utility::Score(_), Utility::Forbidden) => Ordering::Greater,
            (Utility::Score(a), Utility::Score(b)) => a.total_cmp(b),
        }
    }
}

impl Default for Utility {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Utility {
    fn from(score: f32) -> Self {
        Utility::Score(score)
    }
}

impl PartialOrd for Utility {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

impl Add for Utility {
    type Output = Utility;

    fn add(self, rhs: Utility) -> Utility {
        match (self, rhs) {
            (Utility::Score(a), Utility::Score(b)) => Utility::Score(a + b),
            _ => Utility::Forbidden,
        }
    }
}

impl AddAssign for Utility {
    fn add_assign(&mut self, rhs: Utility) {
        *self = *self + rhs;
    }
}

impl Sum for Utility {
    fn sum<I: Iterator<Item = Utility>>(iter: I) -> Self {
        iter.fold(Utility::ZERO, Add::add)
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utility::Forbidden => f.write_str("forbidden"),
            Utility::Score(score) => write!(f, "{score:.3}"),
        }
    }
}
