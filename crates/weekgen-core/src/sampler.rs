//! Discrete weighted sampling.
//!
//! Inverse-CDF selection over an ordered list of `(value, weight)` pairs whose
//! weights are expected to sum to 1.0.

use rand::Rng;
use serde::Serialize;

/// A value paired with its selection probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub const fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Sum of all weights in the table.
#[cfg(test)]
pub(crate) fn total_weight<T>(outcomes: &[Weighted<T>]) -> f64 {
    outcomes.iter().map(|o| o.weight).sum()
}

/// Pick one outcome for a draw already taken from `[0, 1)`.
///
/// Returns the first entry whose cumulative weight is `>= draw`, or `None`
/// when the weights run out before reaching it.
pub fn select_weighted<T>(outcomes: &[Weighted<T>], draw: f64) -> Option<&T> {
    let mut cumulative = 0.0;
    for outcome in outcomes {
        cumulative += outcome.weight;
        if draw <= cumulative {
            return Some(&outcome.value);
        }
    }
    None
}

/// Draw one uniform value and select an outcome with it.
pub fn pick_weighted<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    outcomes: &'a [Weighted<T>],
) -> Option<&'a T> {
    let draw: f64 = rng.gen();
    select_weighted(outcomes, draw)
}
