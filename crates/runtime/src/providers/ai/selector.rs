//! Rank-then-randomize candidate selection.

use rand::Rng;
use waves_core::Position;

use super::scoring::Utility;

/// A cell paired with its utility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub cell: Position,
    pub utility: Utility,
}

impl Candidate {
    pub fn new(cell: Position, utility: Utility) -> Self {
        Self { cell, utility }
    }
}

/// The picked candidate and its rank among the survivors (0 is best).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub candidate: Candidate,
    pub rank: usize,
}

/// Picks one of the `top_k` best candidates uniformly at random.
///
/// Forbidden candidates are dropped first. The rest are sorted by descending
/// utility; the sort is stable so equal scores keep their enumeration order.
/// A `top_k` of zero behaves like one.
///
/// Returns `None` when nothing is left to choose from.
pub fn choose<R: Rng + ?Sized>(
    candidates: impl IntoIterator<Item = Candidate>,
    top_k: usize,
    rng: &mut R,
) -> Option<Choice> {
    let mut ranked: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| !candidate.utility.is_forbidden())
        .collect();
    if ranked.is_empty() {
        return None;
    }

    ranked.sort_by(|a, b| b.utility.total_cmp(&a.utility));
    let pool = top_k.max(1).min(ranked.len());
    let rank = rng.gen_range(0..pool);

    tracing::debug!(
        "Selector: rank {} of top {} (best={}, picked={})",
        rank,
        pool,
        ranked[0].utility,
        ranked[rank].utility
    );

    Some(Choice {
        candidate: ranked[rank],
        rank,
    })
}
